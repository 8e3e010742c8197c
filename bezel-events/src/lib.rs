//! Input event vocabulary for the Bezel front panel runtime
//!
//! This crate defines the shared language between interrupt-driven input
//! sources and the UI code that consumes them:
//!
//! - Control identifiers for buttons, encoders and potentiometers
//! - The [`Event`] type that carries a single user action
//! - A fixed-capacity, interrupt-safe [`EventQueue`]
//!
//! Everything here is `no_std` and allocation-free so it can sit between
//! an interrupt handler and the main loop on the smallest targets.

#![no_std]
#![deny(unsafe_code)]

pub mod event;
pub mod queue;

pub use event::{ButtonId, EncoderId, Event, PotId};
pub use queue::{EventQueue, DEFAULT_QUEUE_CAPACITY};
