//! Bound values for menu entries
//!
//! A value item in a menu does not store its value, it edits one that
//! lives elsewhere in the application. [`MenuValue`] is the contract
//! between the menu and that external value: step it, set it from an
//! absolute control position, and print it for the renderer. The stock
//! implementations below cover integers, floats and picking from a
//! fixed list of labels.

use core::cell::Cell;
use core::fmt;

/// A value that can be edited from a menu.
///
/// Methods take `&self` and mutate through interior mutability so the
/// value can be shared between the menu and the code that uses it.
/// Everything runs on the single main-loop thread.
pub trait MenuValue {
    /// Changes the value by whole steps. `increments` is the detent or
    /// button count, signed. `steps_per_rev` is the encoder resolution,
    /// or `0` when the steps come from buttons. `coarse` is set while
    /// the function button is held and requests bigger steps.
    fn step(&self, increments: i16, steps_per_rev: u16, coarse: bool);

    /// Sets the value from an absolute control position in `0.0..=1.0`.
    fn set_from_fraction(&self, fraction: f32);

    /// Writes the current value, unit included, for display.
    fn write_value(&self, out: &mut dyn fmt::Write) -> fmt::Result;
}

fn clamp_fraction(fraction: f32) -> f32 {
    fraction.clamp(0.0, 1.0)
}

/// An integer in `min..=max` with a unit suffix.
pub struct IntValue<'a> {
    value: Cell<i32>,
    min: i32,
    max: i32,
    step: i32,
    coarse_step: i32,
    unit: &'a str,
}

impl<'a> IntValue<'a> {
    /// Creates a value clamped to `min..=max`, stepping by 1, or by 5
    /// with the function button held.
    pub fn new(initial: i32, min: i32, max: i32) -> Self {
        let value = Cell::new(initial.clamp(min, max));
        Self {
            value,
            min,
            max,
            step: 1,
            coarse_step: 5,
            unit: "",
        }
    }

    /// Replaces the fine and coarse step sizes.
    pub fn with_steps(mut self, step: i32, coarse_step: i32) -> Self {
        self.step = step;
        self.coarse_step = coarse_step;
        self
    }

    /// Sets the unit suffix printed after the number.
    pub fn with_unit(mut self, unit: &'a str) -> Self {
        self.unit = unit;
        self
    }

    pub fn get(&self) -> i32 {
        self.value.get()
    }

    /// Sets the value, clamped to the configured range.
    pub fn set(&self, value: i32) {
        self.value.set(value.clamp(self.min, self.max));
    }
}

impl MenuValue for IntValue<'_> {
    fn step(&self, increments: i16, _steps_per_rev: u16, coarse: bool) {
        let size = if coarse { self.coarse_step } else { self.step };
        let delta = i32::from(increments).saturating_mul(size);
        self.set(self.value.get().saturating_add(delta));
    }

    fn set_from_fraction(&self, fraction: f32) {
        let span = (self.max - self.min) as f32;
        self.set(self.min + (clamp_fraction(fraction) * span + 0.5) as i32);
    }

    fn write_value(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{}{}", self.value.get(), self.unit)
    }
}

/// A float in `min..=max` with fixed decimals and a unit suffix.
pub struct FloatValue<'a> {
    value: Cell<f32>,
    min: f32,
    max: f32,
    step: f32,
    coarse_step: f32,
    decimals: usize,
    unit: &'a str,
}

impl<'a> FloatValue<'a> {
    /// Creates a value clamped to `min..=max`. Button steps default to
    /// 1% of the range, or 5% with the function button held; one
    /// decimal is printed.
    pub fn new(initial: f32, min: f32, max: f32) -> Self {
        let span = max - min;
        Self {
            value: Cell::new(initial.clamp(min, max)),
            min,
            max,
            step: span / 100.0,
            coarse_step: span / 20.0,
            decimals: 1,
            unit: "",
        }
    }

    /// Replaces the fine and coarse step sizes.
    pub fn with_steps(mut self, step: f32, coarse_step: f32) -> Self {
        self.step = step;
        self.coarse_step = coarse_step;
        self
    }

    /// Sets the number of decimals printed.
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// Sets the unit suffix printed after the number.
    pub fn with_unit(mut self, unit: &'a str) -> Self {
        self.unit = unit;
        self
    }

    pub fn get(&self) -> f32 {
        self.value.get()
    }

    /// Sets the value, clamped to the configured range.
    pub fn set(&self, value: f32) {
        self.value.set(value.clamp(self.min, self.max));
    }
}

impl MenuValue for FloatValue<'_> {
    fn step(&self, increments: i16, steps_per_rev: u16, coarse: bool) {
        // A full encoder revolution sweeps the whole range; buttons
        // (steps_per_rev == 0) use the fixed step sizes.
        let delta = if steps_per_rev > 0 {
            f32::from(increments) * (self.max - self.min) / f32::from(steps_per_rev)
        } else {
            f32::from(increments) * if coarse { self.coarse_step } else { self.step }
        };
        self.set(self.value.get() + delta);
    }

    fn set_from_fraction(&self, fraction: f32) {
        self.set(self.min + clamp_fraction(fraction) * (self.max - self.min));
    }

    fn write_value(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{:.*}{}", self.decimals, self.value.get(), self.unit)
    }
}

/// A choice from a fixed list of labels, held as an index.
pub struct ListValue<'a> {
    labels: &'a [&'a str],
    index: Cell<usize>,
}

impl<'a> ListValue<'a> {
    pub fn new(labels: &'a [&'a str], initial: usize) -> Self {
        let top = labels.len().saturating_sub(1);
        Self {
            labels,
            index: Cell::new(initial.min(top)),
        }
    }

    pub fn index(&self) -> usize {
        self.index.get()
    }

    /// Selects an entry by index; out-of-range indices do nothing.
    pub fn set_index(&self, index: usize) {
        if index < self.labels.len() {
            self.index.set(index);
        }
    }

    /// The currently selected label, or `""` for an empty list.
    pub fn current(&self) -> &'a str {
        self.labels.get(self.index.get()).copied().unwrap_or("")
    }
}

impl MenuValue for ListValue<'_> {
    fn step(&self, increments: i16, _steps_per_rev: u16, _coarse: bool) {
        if self.labels.is_empty() {
            return;
        }
        let top = (self.labels.len() - 1) as i32;
        let index = (self.index.get() as i32 + i32::from(increments)).clamp(0, top);
        self.index.set(index as usize);
    }

    fn set_from_fraction(&self, fraction: f32) {
        if self.labels.is_empty() {
            return;
        }
        let top = (self.labels.len() - 1) as f32;
        self.index
            .set((clamp_fraction(fraction) * top + 0.5) as usize);
    }

    fn write_value(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_str(self.current())
    }
}
