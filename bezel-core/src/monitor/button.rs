//! Debouncing button monitor
//!
//! Levels are integrated over time: a button must hold its new level
//! for the configured number of ticks before the edge is reported.
//! Presses arriving in quick succession are counted, so double clicks
//! reach the UI as `presses == 2` without extra bookkeeping there.

use bezel_events::{ButtonId, Event, EventQueue};

use crate::Ticks;

/// Debounce settings for a [`ButtonMonitor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// Ticks a changed level must hold before the edge is reported.
    /// `0` disables debouncing and reports edges immediately.
    pub debounce_ticks: u16,
    /// Longest gap between two presses that still counts as one click
    /// sequence.
    pub double_click_window: Ticks,
}

impl ButtonConfig {
    pub const fn new() -> Self {
        Self {
            debounce_ticks: 50,
            double_click_window: 500,
        }
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw button levels, typically read straight from GPIOs.
///
/// Button IDs run from `0` to `NUM_BUTTONS - 1` of the owning monitor;
/// the same IDs appear in the posted events.
pub trait ButtonBackend {
    /// Whether a button currently reads as pressed, bounce and all.
    fn is_pressed(&mut self, button: ButtonId) -> bool;
}

#[derive(Debug, Clone, Copy)]
struct ButtonState {
    /// Debounce integrator. Rests at `-threshold` (released) or
    /// `threshold` (pressed) and walks between them while the raw
    /// level disagrees with the settled state.
    integrator: i32,
    pressed: bool,
    last_press: Option<Ticks>,
    presses: u8,
}

impl ButtonState {
    const fn released(threshold: i32) -> Self {
        Self {
            integrator: -threshold,
            pressed: false,
            last_press: None,
            presses: 0,
        }
    }
}

/// Polls `NUM_BUTTONS` buttons through a [`ButtonBackend`], debounces
/// them and posts [`Event::ButtonPressed`] and
/// [`Event::ButtonReleased`] to an event queue.
pub struct ButtonMonitor<B, const NUM_BUTTONS: usize> {
    backend: B,
    config: ButtonConfig,
    states: [ButtonState; NUM_BUTTONS],
    last_call: Option<Ticks>,
}

impl<B: ButtonBackend, const NUM_BUTTONS: usize> ButtonMonitor<B, NUM_BUTTONS> {
    pub fn new(backend: B, config: ButtonConfig) -> Self {
        let threshold = threshold_of(&config);
        Self {
            backend,
            config,
            states: [ButtonState::released(threshold); NUM_BUTTONS],
            last_call: None,
        }
    }

    /// Samples every button and posts events for debounced edges.
    /// Call this at regular intervals with the current time.
    pub fn process<const N: usize>(&mut self, now: Ticks, queue: &EventQueue<N>) {
        let elapsed = match self.last_call {
            Some(last) => now.wrapping_sub(last),
            None => 0,
        };
        self.last_call = Some(now);

        let step = elapsed.min(i32::MAX as u32) as i32;
        let threshold = threshold_of(&self.config);
        let window = self.config.double_click_window;

        for index in 0..NUM_BUTTONS {
            let raw = self.backend.is_pressed(index as ButtonId);
            update_button(
                &mut self.states[index],
                index as ButtonId,
                raw,
                step,
                threshold,
                window,
                now,
                queue,
            );
        }
    }

    /// Whether a button is currently pressed, as settled by debouncing.
    /// Unknown IDs read as released.
    pub fn is_button_pressed(&self, button: ButtonId) -> bool {
        self.states
            .get(usize::from(button))
            .map_or(false, |state| state.pressed)
    }

    /// Number of buttons this monitor watches.
    pub const fn num_buttons(&self) -> usize {
        NUM_BUTTONS
    }

    /// The backend supplying raw levels.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the backend.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

/// The integrator travel needed to settle an edge. One more than the
/// configured ticks so a fresh edge never settles in the same instant
/// it was sampled, except with debouncing disabled.
fn threshold_of(config: &ButtonConfig) -> i32 {
    i32::from(config.debounce_ticks) + 1
}

#[allow(clippy::too_many_arguments)]
fn update_button<const N: usize>(
    state: &mut ButtonState,
    button: ButtonId,
    raw: bool,
    step: i32,
    threshold: i32,
    window: Ticks,
    now: Ticks,
    queue: &EventQueue<N>,
) {
    if state.integrator < 0 {
        // Released, or on the way there.
        if raw {
            state.integrator = 1;
            if state.integrator >= threshold {
                post_press(state, button, window, now, queue);
            }
        } else if state.integrator > -threshold {
            state.integrator = state.integrator.saturating_sub(step).max(-threshold);
            if state.integrator <= -threshold {
                state.pressed = false;
                queue.push(Event::ButtonReleased { button });
            }
        }
    } else {
        // Pressed, or on the way there.
        if raw {
            if state.integrator < threshold {
                state.integrator = state.integrator.saturating_add(step).min(threshold);
                if state.integrator >= threshold {
                    post_press(state, button, window, now, queue);
                }
            }
        } else {
            state.integrator = -1;
            if state.integrator <= -threshold {
                state.pressed = false;
                queue.push(Event::ButtonReleased { button });
            }
        }
    }
}

fn post_press<const N: usize>(
    state: &mut ButtonState,
    button: ButtonId,
    window: Ticks,
    now: Ticks,
    queue: &EventQueue<N>,
) {
    state.presses = match state.last_press {
        Some(last) if now.wrapping_sub(last) <= window => state.presses.saturating_add(1),
        _ => 1,
    };
    state.last_press = Some(now);
    state.pressed = true;
    queue.push(Event::ButtonPressed {
        button,
        presses: state.presses,
    });
}
