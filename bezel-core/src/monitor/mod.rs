//! Input monitors
//!
//! Monitors poll raw hardware through small backend traits and post
//! events to an [`EventQueue`](bezel_events::EventQueue) when something
//! actually happened: buttons are debounced, pots are filtered through
//! dead bands and an idle timeout.

pub mod button;
pub mod pot;

pub use button::{ButtonBackend, ButtonConfig, ButtonMonitor};
pub use pot::{PotBackend, PotConfig, PotMonitor};
