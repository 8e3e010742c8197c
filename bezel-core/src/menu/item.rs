//! Menu item descriptors
//!
//! A menu is assembled from small `Copy` descriptors that point at the
//! state they control: a flag cell, a bound value, a page handle. The
//! menu never owns that state, it only reaches through the references,
//! so the same flag can back a checkbox in two different menus.

use core::cell::Cell;

use crate::menu::value::MenuValue;
use crate::page::PageId;

/// A user-defined menu entry.
///
/// Custom items take over everything the menu would otherwise decide
/// from the item type: whether the entry is directly editable, what
/// the edit controls do, and what the okay button does. Drawing is up
/// to the menu renderer, which can downcast through
/// [`MenuItemKind::Custom`].
///
/// All methods take `&self`; items mutate their state through interior
/// mutability, which is sound because the whole UI runs on the single
/// main-loop thread.
pub trait CustomItem {
    /// Whether the edit controls act on this item. When this returns
    /// `false` the okay button triggers [`on_enter`](Self::on_enter)
    /// instead of entering edit mode.
    fn can_modify(&self) -> bool {
        false
    }

    /// An encoder or a modify button changed the value by whole steps.
    /// `steps_per_rev` is `0` for button presses.
    fn modify_by_steps(&self, increments: i16, steps_per_rev: u16, function_held: bool) {
        let _ = (increments, steps_per_rev, function_held);
    }

    /// A fader or pot set the value to an absolute position in
    /// `0.0..=1.0`.
    fn modify_by_fraction(&self, fraction: f32, function_held: bool) {
        let _ = (fraction, function_held);
    }

    /// The okay button was pressed while [`can_modify`](Self::can_modify)
    /// returns `false`.
    fn on_enter(&self) {}
}

/// What a menu entry does when selected, entered or edited.
#[derive(Clone, Copy)]
pub enum MenuItemKind<'a> {
    /// Fires a callback when entered. Never editable.
    Action(&'a dyn Fn()),
    /// A boolean bound to an external flag. The okay button toggles
    /// it; the modify controls set it directly.
    Checkbox(&'a Cell<bool>),
    /// A bound numeric or enumerated value. Editable through the
    /// modify controls and through entered mode.
    Value(&'a dyn MenuValue),
    /// Opens another page when entered. Never editable.
    OpenPage(PageId),
    /// Closes the menu page when entered. Never editable.
    CloseMenu,
    /// Delegates everything to a [`CustomItem`].
    Custom(&'a dyn CustomItem),
}

/// One entry of a menu: a label plus the behavior behind it.
#[derive(Clone, Copy)]
pub struct MenuItem<'a> {
    pub label: &'a str,
    pub kind: MenuItemKind<'a>,
}

impl<'a> MenuItem<'a> {
    pub const fn new(label: &'a str, kind: MenuItemKind<'a>) -> Self {
        Self { label, kind }
    }

    /// Whether the modify controls act on this item without entering
    /// it first.
    pub fn can_modify(&self) -> bool {
        match self.kind {
            MenuItemKind::Value(_) => true,
            MenuItemKind::Custom(item) => item.can_modify(),
            MenuItemKind::Action(_) | MenuItemKind::Checkbox(_) => false,
            MenuItemKind::OpenPage(_) | MenuItemKind::CloseMenu => false,
        }
    }
}
