//! Typed input events
//!
//! Every physical control is addressed by a small integer ID. IDs are
//! per class: button 3 and potentiometer 3 are unrelated controls. The
//! mapping from IDs to actual hardware is owned by the board layer that
//! feeds the monitors.

/// Identifies a push button or switch.
pub type ButtonId = u16;

/// Identifies a rotary encoder.
pub type EncoderId = u16;

/// Identifies a potentiometer or another absolute analog control.
pub type PotId = u16;

/// A single user action on a front panel control.
///
/// Events are small and `Copy`. They are built close to the hardware,
/// usually in interrupt context, and travel through an
/// [`EventQueue`](crate::queue::EventQueue) to the UI code.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A button settled in the pressed state.
    ButtonPressed {
        button: ButtonId,
        /// Number of successive presses in a quick sequence, starting
        /// at 1. A double click arrives as `presses == 2`.
        presses: u8,
    },
    /// A button settled in the released state.
    ButtonReleased { button: ButtonId },
    /// An encoder accumulated movement since the last scan.
    EncoderTurned {
        encoder: EncoderId,
        /// Signed detent count, positive is clockwise.
        increments: i16,
        /// Detents per full revolution, or `0` if unknown.
        steps_per_rev: u16,
    },
    /// The user started or stopped turning an encoder.
    EncoderActivityChanged { encoder: EncoderId, active: bool },
    /// A potentiometer moved past its dead band.
    PotMoved {
        pot: PotId,
        /// Absolute position in `0.0..=1.0`.
        position: f32,
    },
    /// The user started or stopped moving a potentiometer.
    PotActivityChanged { pot: PotId, active: bool },
}

impl Event {
    /// Whether this event was produced by a button.
    pub fn is_button(&self) -> bool {
        matches!(
            self,
            Event::ButtonPressed { .. } | Event::ButtonReleased { .. }
        )
    }

    /// Whether this event was produced by an encoder.
    pub fn is_encoder(&self) -> bool {
        matches!(
            self,
            Event::EncoderTurned { .. } | Event::EncoderActivityChanged { .. }
        )
    }

    /// Whether this event was produced by a potentiometer.
    pub fn is_pot(&self) -> bool {
        matches!(
            self,
            Event::PotMoved { .. } | Event::PotActivityChanged { .. }
        )
    }
}
