//! Page stack dispatcher
//!
//! [`Ui`] owns the page stack, drains an event queue, routes each event
//! from the topmost page downward until one consumes it, and redraws
//! displays at their configured rate. Pages register once and are
//! addressed by [`PageId`] afterwards, so event handlers can open and
//! close pages without holding references into the stack.

use bezel_events::{ButtonId, Event, EventQueue};
use heapless::Vec;

use crate::display::Display;
use crate::page::{
    ArrowButton, ControlBindings, EventContext, Page, PageId, StackRequest, MAX_STACK_REQUESTS,
};
use crate::Ticks;

/// Maximum number of pages a [`Ui`] can hold.
pub const MAX_PAGES: usize = 32;

/// Maximum number of displays a [`Ui`] can drive.
pub const MAX_DISPLAYS: usize = 8;

/// Highest button ID (exclusive) tracked by the held-button state.
///
/// Events from buttons at or above this ID are still routed, they just
/// never show up in [`Ui::is_button_down`].
pub const MAX_TRACKED_BUTTONS: ButtonId = 64;

struct DisplaySlot<'a, D> {
    display: &'a mut D,
    redraw_interval: Ticks,
    last_redraw: Ticks,
}

enum ButtonRole {
    Okay,
    Cancel,
    Function,
    Arrow(ArrowButton),
    Plain,
}

fn button_role(bindings: &ControlBindings, button: ButtonId) -> ButtonRole {
    if bindings.okay == Some(button) {
        ButtonRole::Okay
    } else if bindings.cancel == Some(button) {
        ButtonRole::Cancel
    } else if bindings.function == Some(button) {
        ButtonRole::Function
    } else if bindings.left == Some(button) {
        ButtonRole::Arrow(ArrowButton::Left)
    } else if bindings.right == Some(button) {
        ButtonRole::Arrow(ArrowButton::Right)
    } else if bindings.up == Some(button) {
        ButtonRole::Arrow(ArrowButton::Up)
    } else if bindings.down == Some(button) {
        ButtonRole::Arrow(ArrowButton::Down)
    } else {
        ButtonRole::Plain
    }
}

/// A stack of pages displayed on a set of abstract displays.
///
/// Events are taken from an [`EventQueue`] in [`Ui::process`] and
/// offered to the topmost page first; pages that return `false` from a
/// handler pass the event on downward. Pages are painted bottom-up,
/// starting at the topmost opaque page, so transparent overlays compose
/// over whatever they cover.
///
/// The `'a` lifetime ties the UI to the pages and displays it borrows.
/// Registered pages are exclusively borrowed until the UI is dropped.
pub struct Ui<'a, D> {
    pages: Vec<&'a mut dyn Page<D>, MAX_PAGES>,
    stack: Vec<PageId, MAX_PAGES>,
    displays: Vec<DisplaySlot<'a, D>, MAX_DISPLAYS>,
    bindings: ControlBindings,
    buttons_down: u64,
    muted: bool,
    queue_while_muted: bool,
}

impl<'a, D: Display> Ui<'a, D> {
    /// Creates a UI with an empty page stack and no bindings.
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            stack: Vec::new(),
            displays: Vec::new(),
            bindings: ControlBindings::default(),
            buttons_down: 0,
            muted: false,
            queue_while_muted: false,
        }
    }

    /// Sets the control role bindings.
    pub fn set_bindings(&mut self, bindings: ControlBindings) {
        self.bindings = bindings;
    }

    /// The current control role bindings.
    pub fn bindings(&self) -> &ControlBindings {
        &self.bindings
    }

    /// Registers a page and returns its handle, or `None` when the
    /// page table is full. Registering does not open the page.
    pub fn register_page(&mut self, page: &'a mut dyn Page<D>) -> Option<PageId> {
        let id = PageId(self.pages.len() as u8);
        self.pages.push(page).ok()?;
        Some(id)
    }

    /// Adds a display that is redrawn whenever more than its own
    /// [`update_interval`](Display::update_interval) has passed since
    /// its last redraw. Returns `false` when the display table is full.
    pub fn add_display(&mut self, display: &'a mut D) -> bool {
        let redraw_interval = display.update_interval();
        self.displays
            .push(DisplaySlot {
                display,
                redraw_interval,
                last_redraw: 0,
            })
            .is_ok()
    }

    /// Pushes a page onto the top of the stack and calls its
    /// [`on_show`](Page::on_show) hook. Does nothing if the page is
    /// already open, the handle is unknown or the stack is full.
    pub fn open_page(&mut self, page: PageId) {
        if usize::from(page.0) >= self.pages.len() {
            return;
        }
        if self.stack.contains(&page) {
            return;
        }
        if self.stack.push(page).is_err() {
            return;
        }
        if let Some(opened) = self.pages.get_mut(usize::from(page.0)) {
            opened.on_show();
        }
    }

    /// Removes a page from the stack, wherever it sits, and calls its
    /// [`on_hide`](Page::on_hide) hook. Pages above it stay in order.
    /// Does nothing if the page is not open.
    pub fn close_page(&mut self, page: PageId) {
        let Some(position) = self.stack.iter().position(|&open| open == page) else {
            return;
        };
        self.stack.remove(position);
        if let Some(closed) = self.pages.get_mut(usize::from(page.0)) {
            closed.on_hide();
        }
    }

    /// Whether a page is currently somewhere on the stack.
    pub fn is_open(&self, page: PageId) -> bool {
        self.stack.contains(&page)
    }

    /// Number of pages currently on the stack.
    pub fn open_pages(&self) -> usize {
        self.stack.len()
    }

    /// Stops forwarding input to pages. With `queue_events` set, input
    /// piles up in the queue and is delivered after unmuting; without
    /// it, input is discarded as it arrives.
    pub fn mute(&mut self, muted: bool, queue_events: bool) {
        self.muted = muted;
        self.queue_while_muted = queue_events;
    }

    /// Whether input forwarding is currently suspended.
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Whether a button is currently held, as seen through the events
    /// this UI has processed.
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

    /// Drains the event queue and redraws any display whose interval
    /// has elapsed. Call this regularly from the main loop with the
    /// current time.
    pub fn process<const N: usize>(&mut self, now: Ticks, queue: &EventQueue<N>) {
        if !self.muted {
            while let Some(event) = queue.pop() {
                self.dispatch(event);
            }
        } else if !self.queue_while_muted {
            queue.clear();
        }

        for index in 0..self.displays.len() {
            let due = match self.displays.get(index) {
                Some(slot) => now.wrapping_sub(slot.last_redraw) > slot.redraw_interval,
                None => false,
            };
            if due {
                self.redraw_display(index, now);
            }
        }
    }

    fn dispatch(&mut self, event: Event) {
        match event {
            Event::ButtonPressed { button, presses } => {
                self.set_button_down(button, true);
                self.route_button(button, presses);
            }
            Event::ButtonReleased { button } => {
                self.set_button_down(button, false);
                self.route_button(button, 0);
            }
            Event::EncoderTurned {
                encoder,
                increments,
                steps_per_rev,
            } => {
                self.route(|page, cx| page.on_encoder_turned(encoder, increments, steps_per_rev, cx));
            }
            Event::EncoderActivityChanged { encoder, active } => {
                self.route(|page, cx| page.on_encoder_activity_changed(encoder, active, cx));
            }
            Event::PotMoved { pot, position } => {
                self.route(|page, cx| page.on_pot_moved(pot, position, cx));
            }
            Event::PotActivityChanged { pot, active } => {
                self.route(|page, cx| page.on_pot_activity_changed(pot, active, cx));
            }
        }
    }

    fn route_button(&mut self, button: ButtonId, presses: u8) {
        match button_role(&self.bindings, button) {
            ButtonRole::Okay => self.route(|page, cx| page.on_okay_button(presses, cx)),
            ButtonRole::Cancel => self.route(|page, cx| page.on_cancel_button(presses, cx)),
            ButtonRole::Function => self.route(|page, cx| page.on_function_button(presses, cx)),
            ButtonRole::Arrow(arrow) => {
                self.route(|page, cx| page.on_arrow_button(arrow, presses, cx))
            }
            ButtonRole::Plain => self.route(|page, cx| page.on_button(button, presses, cx)),
        }
    }

    /// Offers one event to the stack from the top down, then applies
    /// any stack changes the handlers requested.
    fn route(&mut self, mut handler: impl FnMut(&mut dyn Page<D>, &mut EventContext<'_>) -> bool) {
        let mut requests: Vec<StackRequest, MAX_STACK_REQUESTS> = Vec::new();
        {
            let Self {
                pages,
                stack,
                bindings,
                buttons_down,
                ..
            } = self;
            for id in stack.iter().rev() {
                let Some(page) = pages.get_mut(usize::from(id.0)) else {
                    continue;
                };
                let mut cx = EventContext {
                    page: *id,
                    bindings: &*bindings,
                    buttons_down: *buttons_down,
                    requests: &mut requests,
                };
                if handler(&mut **page, &mut cx) {
                    break;
                }
            }
        }
        for request in &requests {
            match *request {
                StackRequest::Open(page) => self.open_page(page),
                StackRequest::Close(page) => self.close_page(page),
            }
        }
    }

    fn set_button_down(&mut self, button: ButtonId, down: bool) {
        if button >= MAX_TRACKED_BUTTONS {
            return;
        }
        let bit = 1u64 << button;
        if down {
            self.buttons_down |= bit;
        } else {
            self.buttons_down &= !bit;
        }
    }

    /// Redraws one display: clear, draw every page from the topmost
    /// opaque one upward, then present.
    fn redraw_display(&mut self, index: usize, now: Ticks) {
        let Self {
            pages,
            stack,
            displays,
            ..
        } = self;
        let Some(slot) = displays.get_mut(index) else {
            return;
        };

        let mut first_to_draw = 0;
        for (position, id) in stack.iter().enumerate().rev() {
            if let Some(page) = pages.get(usize::from(id.0)) {
                if page.is_opaque(slot.display) {
                    first_to_draw = position;
                    break;
                }
            }
        }

        slot.display.clear();
        for id in stack.iter().skip(first_to_draw) {
            if let Some(page) = pages.get_mut(usize::from(id.0)) {
                page.draw(slot.display);
            }
        }
        slot.display.present();
        slot.last_redraw = now;
    }
}

impl<'a, D: Display> Default for Ui<'a, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, D> Drop for Ui<'a, D> {
    fn drop(&mut self) {
        // Open pages get their hide hook even when the UI goes away first.
        while let Some(id) = self.stack.pop() {
            if let Some(page) = self.pages.get_mut(usize::from(id.0)) {
                page.on_hide();
            }
        }
    }
}
