//! Potentiometer monitor
//!
//! Pots are noisy, so raw positions are filtered through a dead band
//! before they become events. The band is two-tiered: a pot that has
//! been still for a while needs a larger excursion to wake up than one
//! the user is actively turning. Activity events frame each burst of
//! movement so the UI can show and hide value overlays.

use bezel_events::{Event, EventQueue, PotId};

use crate::Ticks;

/// Filter settings for a [`PotMonitor`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PotConfig {
    /// Excursion from the last reported position needed to wake an
    /// idle pot, as a fraction of full scale.
    pub dead_band_idle: f32,
    /// Excursion needed to report further movement while active.
    pub dead_band_moving: f32,
    /// Ticks without movement after which a pot is considered idle.
    pub idle_timeout: Ticks,
}

impl PotConfig {
    pub const fn new() -> Self {
        Self {
            dead_band_idle: 1.0 / 1024.0,
            dead_band_moving: 1.0 / 4096.0,
            idle_timeout: 500,
        }
    }
}

impl Default for PotConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw pot positions, typically read from an ADC.
///
/// Pot IDs run from `0` to `NUM_POTS - 1` of the owning monitor; the
/// same IDs appear in the posted events.
pub trait PotBackend {
    /// Current absolute position of a pot in `0.0..=1.0`.
    fn position(&mut self, pot: PotId) -> f32;
}

#[derive(Debug, Clone, Copy)]
struct PotState {
    /// Position last posted to the queue.
    last_reported: f32,
    /// Ticks accumulated since the last reported movement. The pot is
    /// considered moving while this stays below the idle timeout.
    idle_ticks: Ticks,
}

/// Polls `NUM_POTS` pots through a [`PotBackend`], filters out noise
/// and posts [`Event::PotMoved`] and [`Event::PotActivityChanged`] to
/// an event queue.
pub struct PotMonitor<B, const NUM_POTS: usize> {
    backend: B,
    config: PotConfig,
    states: [PotState; NUM_POTS],
    last_call: Option<Ticks>,
}

impl<B: PotBackend, const NUM_POTS: usize> PotMonitor<B, NUM_POTS> {
    pub fn new(backend: B, config: PotConfig) -> Self {
        Self {
            backend,
            config,
            states: [PotState {
                last_reported: 0.0,
                idle_ticks: 0,
            }; NUM_POTS],
            last_call: None,
        }
    }

    /// Samples every pot and posts events for movements and activity
    /// changes. Call this at regular intervals with the current time.
    pub fn process<const N: usize>(&mut self, now: Ticks, queue: &EventQueue<N>) {
        let elapsed = match self.last_call {
            Some(last) => now.wrapping_sub(last),
            None => 0,
        };
        self.last_call = Some(now);

        for index in 0..NUM_POTS {
            let position = self.backend.position(index as PotId);
            update_pot(
                &mut self.states[index],
                index as PotId,
                position,
                elapsed,
                &self.config,
                queue,
            );
        }
    }

    /// Whether a pot is currently in its moving state. Unknown IDs
    /// read as idle.
    pub fn is_moving(&self, pot: PotId) -> bool {
        self.states
            .get(usize::from(pot))
            .map_or(false, |state| state.idle_ticks < self.config.idle_timeout)
    }

    /// The position last posted to the queue for a pot, or `None` for
    /// unknown IDs.
    pub fn last_position(&self, pot: PotId) -> Option<f32> {
        self.states
            .get(usize::from(pot))
            .map(|state| state.last_reported)
    }

    /// Number of pots this monitor watches.
    pub const fn num_pots(&self) -> usize {
        NUM_POTS
    }

    /// The backend supplying raw positions.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the backend.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

fn update_pot<const N: usize>(
    state: &mut PotState,
    pot: PotId,
    position: f32,
    elapsed: Ticks,
    config: &PotConfig,
    queue: &EventQueue<N>,
) {
    let delta = state.last_reported - position;
    if state.idle_ticks < config.idle_timeout {
        // Moving: the tight band applies.
        if delta > config.dead_band_moving || delta < -config.dead_band_moving {
            state.last_reported = position;
            state.idle_ticks = 0;
            queue.push(Event::PotMoved { pot, position });
        } else {
            state.idle_ticks = state.idle_ticks.saturating_add(elapsed);
            // Exactly one event at the moment the pot goes idle.
            if state.idle_ticks >= config.idle_timeout {
                queue.push(Event::PotActivityChanged { pot, active: false });
            }
        }
    } else {
        // Idle: waking up takes the wide band.
        if delta > config.dead_band_idle || delta < -config.dead_band_idle {
            state.last_reported = position;
            state.idle_ticks = 0;
            queue.push(Event::PotActivityChanged { pot, active: true });
            queue.push(Event::PotMoved { pot, position });
        }
    }
}
