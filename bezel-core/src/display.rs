//! Display abstraction for the page stack
//!
//! A display can be a graphics screen, a character LCD, a ring of LEDs
//! or anything else that is redrawn as a whole. The UI only needs to
//! wipe it, push the finished frame out and know how often to do so;
//! all actual drawing happens in the pages, which know the concrete
//! display type.

use crate::Ticks;

/// Broad classification of a display, for pages that render onto
/// several kinds of output at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayKind {
    Other,
    /// Individual LEDs or LED rings.
    Led,
    /// Character-cell displays.
    Character,
    /// Monochrome pixel displays.
    Graphics1Bit,
    /// Greyscale pixel displays, 16 levels.
    Graphics4Bit,
    /// Greyscale pixel displays, 256 levels.
    Graphics8Bit,
}

/// A complete output device that is redrawn frame by frame.
///
/// Pages receive the concrete display type and use whatever drawing API
/// it offers. The UI itself only clears, presents and schedules; when
/// one UI drives several displays behind a shared enum, pages can tell
/// them apart through [`kind`](Display::kind) and [`id`](Display::id).
pub trait Display {
    /// Wipes the frame that is currently being built.
    fn clear(&mut self);

    /// Makes the finished frame visible, for example by swapping
    /// buffers or transmitting over a bus.
    fn present(&mut self);

    /// Ticks between redraws. The UI repaints the display whenever
    /// more than this many ticks have passed since the last frame.
    fn update_interval(&self) -> Ticks;

    /// What kind of display this is.
    fn kind(&self) -> DisplayKind {
        DisplayKind::Other
    }

    /// Distinguishes displays of the same kind on one front panel.
    fn id(&self) -> u8 {
        0
    }
}
