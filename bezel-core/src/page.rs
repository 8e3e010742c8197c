//! UI pages and the context passed to their event handlers
//!
//! A page is one layer of the UI: a main screen, a menu, a confirmation
//! overlay. Pages are registered with a [`Ui`](crate::ui::Ui) once and
//! then opened and closed by handle, never by reference, so the page
//! stack stays free of dangling borrows.

use bezel_events::{ButtonId, EncoderId, PotId};
use heapless::Vec;

use crate::ui::MAX_TRACKED_BUTTONS;

/// The four arrow buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArrowButton {
    Left,
    Right,
    Up,
    Down,
}

/// Handle to a page registered with a [`Ui`](crate::ui::Ui).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PageId(pub(crate) u8);

/// Maps button, encoder and pot IDs to the roles the UI understands.
///
/// Buttons with a role here are delivered through the dedicated `Page`
/// callbacks; everything else arrives via
/// [`Page::on_button`]. When one button carries several roles, the
/// first match in field order wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlBindings {
    pub okay: Option<ButtonId>,
    pub cancel: Option<ButtonId>,
    pub function: Option<ButtonId>,
    pub left: Option<ButtonId>,
    pub right: Option<ButtonId>,
    pub up: Option<ButtonId>,
    pub down: Option<ButtonId>,
    /// Encoder that scrolls through menus.
    pub menu_encoder: Option<EncoderId>,
    /// Encoder that edits the selected menu value.
    pub value_encoder: Option<EncoderId>,
    /// Pot that edits the selected menu value.
    pub value_pot: Option<PotId>,
}

/// A stack operation requested from inside an event handler.
///
/// Handlers run while the UI iterates its page stack, so requests are
/// collected here and applied once the event is fully routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StackRequest {
    Open(PageId),
    Close(PageId),
}

pub(crate) const MAX_STACK_REQUESTS: usize = 8;

/// Context handed to every [`Page`] event handler.
///
/// It exposes the control bindings, the current button states and the
/// two stack operations a handler may request. Stack changes take
/// effect after the current event has finished routing.
pub struct EventContext<'a> {
    pub(crate) page: PageId,
    pub(crate) bindings: &'a ControlBindings,
    pub(crate) buttons_down: u64,
    pub(crate) requests: &'a mut Vec<StackRequest, MAX_STACK_REQUESTS>,
}

impl EventContext<'_> {
    /// Handle of the page this event is being delivered to.
    pub fn page(&self) -> PageId {
        self.page
    }

    /// The control bindings of the owning UI.
    pub fn bindings(&self) -> &ControlBindings {
        self.bindings
    }

    /// Whether a button is currently held, as seen through the event
    /// stream. Buttons with IDs at or above
    /// [`MAX_TRACKED_BUTTONS`](crate::ui::MAX_TRACKED_BUTTONS) always
    /// read as released.
    pub fn is_button_down(&self, button: ButtonId) -> bool {
        button < MAX_TRACKED_BUTTONS && (self.buttons_down >> button) & 1 != 0
    }

    /// Whether the bound function button is currently held.
    pub fn is_function_button_down(&self) -> bool {
        match self.bindings.function {
            Some(button) => self.is_button_down(button),
            None => false,
        }
    }

    /// Requests that a page is pushed onto the stack once the current
    /// event has finished routing. Opening a page that is already open
    /// does nothing.
    pub fn open_page(&mut self, page: PageId) {
        let _ = self.requests.push(StackRequest::Open(page));
    }

    /// Requests that a page is removed from the stack once the current
    /// event has finished routing.
    pub fn close_page(&mut self, page: PageId) {
        let _ = self.requests.push(StackRequest::Close(page));
    }

    /// Requests that the page receiving this event closes itself.
    pub fn close_self(&mut self) {
        self.close_page(self.page);
    }
}

/// One layer of the UI.
///
/// All input callbacks return `true` when the event is consumed and
/// `false` to let it fall through to the page below. The defaults
/// consume everything, so a page that only cares about drawing blocks
/// input from reaching pages it covers.
///
/// Button callbacks report the number of successive presses: `1` for
/// the first press, `2` for the second press of a double click, and so
/// on. A release is signaled by `presses == 0`.
pub trait Page<D> {
    /// Whether this page fills the entire display. Transparent pages
    /// let the pages below them show through; the UI then draws those
    /// first.
    fn is_opaque(&self, display: &D) -> bool {
        let _ = display;
        true
    }

    /// The okay button was pressed or released.
    fn on_okay_button(&mut self, presses: u8, cx: &mut EventContext<'_>) -> bool {
        let _ = (presses, cx);
        true
    }

    /// The cancel button was pressed or released.
    fn on_cancel_button(&mut self, presses: u8, cx: &mut EventContext<'_>) -> bool {
        let _ = (presses, cx);
        true
    }

    /// An arrow button was pressed or released.
    fn on_arrow_button(
        &mut self,
        arrow: ArrowButton,
        presses: u8,
        cx: &mut EventContext<'_>,
    ) -> bool {
        let _ = (arrow, presses, cx);
        true
    }

    /// The function button was pressed or released.
    fn on_function_button(&mut self, presses: u8, cx: &mut EventContext<'_>) -> bool {
        let _ = (presses, cx);
        true
    }

    /// A button without a bound role was pressed or released.
    fn on_button(&mut self, button: ButtonId, presses: u8, cx: &mut EventContext<'_>) -> bool {
        let _ = (button, presses, cx);
        true
    }

    /// An encoder was turned. `increments` is the detent count since
    /// the last scan, positive is clockwise; `steps_per_rev` is `0`
    /// when unknown.
    fn on_encoder_turned(
        &mut self,
        encoder: EncoderId,
        increments: i16,
        steps_per_rev: u16,
        cx: &mut EventContext<'_>,
    ) -> bool {
        let _ = (encoder, increments, steps_per_rev, cx);
        true
    }

    /// The user started or stopped turning an encoder.
    fn on_encoder_activity_changed(
        &mut self,
        encoder: EncoderId,
        active: bool,
        cx: &mut EventContext<'_>,
    ) -> bool {
        let _ = (encoder, active, cx);
        true
    }

    /// A pot moved past its dead band. `position` is absolute in
    /// `0.0..=1.0`.
    fn on_pot_moved(&mut self, pot: PotId, position: f32, cx: &mut EventContext<'_>) -> bool {
        let _ = (pot, position, cx);
        true
    }

    /// The user started or stopped moving a pot.
    fn on_pot_activity_changed(
        &mut self,
        pot: PotId,
        active: bool,
        cx: &mut EventContext<'_>,
    ) -> bool {
        let _ = (pot, active, cx);
        true
    }

    /// The page was pushed onto the stack.
    fn on_show(&mut self) {}

    /// The page was removed from the stack.
    fn on_hide(&mut self) {}

    /// Repaints this page onto a display.
    fn draw(&mut self, display: &mut D);
}
