//! Board-agnostic front panel runtime
//!
//! This crate contains the input and UI logic that does not depend on
//! specific hardware:
//!
//! - Monitors that debounce buttons and filter potentiometer noise
//! - A display abstraction that works for LEDs, character and graphics
//!   displays alike
//! - A page stack with top-down event routing and bottom-up drawing
//! - A menu engine assembled from reusable item and value types
//!
//! Hardware access stays behind small backend traits, and time is passed
//! in as integer ticks, so everything here runs unchanged on any target
//! and in host tests.

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod menu;
pub mod monitor;
pub mod page;
pub mod ui;

/// Monotonic time in system ticks.
///
/// The tick length is up to the caller (milliseconds are typical). Tick
/// counts wrap around; durations are always computed with wrapping
/// subtraction, so wrap-over is harmless as long as intervals stay below
/// half the counter range.
pub type Ticks = u32;
