//! Generic menu engine
//!
//! [`Menu`] holds a list of [`MenuItem`]s and runs the interaction
//! logic behind any list menu: moving the selection, entering an item
//! to edit it, stepping values with buttons and encoders, setting them
//! from a pot. It knows nothing about drawing; [`MenuPage`] pairs an
//! engine with a [`MenuRenderer`] to form a complete page.
//!
//! Two button layouts are supported. With
//! [`MenuOrientation::UpDownSelect`] the up/down arrows move the
//! selection and left/right step the selected value; with
//! [`MenuOrientation::LeftRightSelect`] the axes swap. The axis that
//! normally moves the selection edits the value instead while an item
//! is entered.

pub mod item;
pub mod value;

pub use item::{CustomItem, MenuItem, MenuItemKind};
pub use value::{FloatValue, IntValue, ListValue, MenuValue};

use heapless::Vec;

use crate::page::{ArrowButton, EventContext, Page};
use bezel_events::{EncoderId, PotId};

/// Maximum number of items one menu can hold.
pub const MAX_MENU_ITEMS: usize = 32;

/// Which arrow axis moves the selection. The other axis steps the
/// selected item's value directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuOrientation {
    /// Left/right select, up/down modify.
    LeftRightSelect,
    /// Up/down select, left/right modify.
    UpDownSelect,
}

/// The interaction state machine of a list menu.
///
/// All handlers return `true`: a visible menu consumes its input.
/// Indices out of range and an empty item list make every operation a
/// no-op rather than an error.
pub struct Menu<'a> {
    items: Vec<MenuItem<'a>, MAX_MENU_ITEMS>,
    orientation: MenuOrientation,
    selected: usize,
    entered: bool,
    allow_entering: bool,
    function_down: bool,
}

impl<'a> Menu<'a> {
    pub fn new(orientation: MenuOrientation) -> Self {
        Self {
            items: Vec::new(),
            orientation,
            selected: 0,
            entered: false,
            allow_entering: true,
            function_down: false,
        }
    }

    /// When disabled, the okay button never toggles entered mode; the
    /// modify axis and a bound value control still edit items.
    pub fn set_allow_entering(&mut self, allow: bool) {
        self.allow_entering = allow;
        if !allow {
            self.entered = false;
        }
    }

    /// Appends an item. Items beyond [`MAX_MENU_ITEMS`] are dropped.
    pub fn add_item(&mut self, item: MenuItem<'a>) {
        let _ = self.items.push(item);
    }

    /// Replaces all items and resets the selection to the first one.
    /// Items beyond [`MAX_MENU_ITEMS`] are dropped.
    pub fn set_items(&mut self, items: &[MenuItem<'a>]) {
        self.items.clear();
        for item in items.iter().take(MAX_MENU_ITEMS) {
            let _ = self.items.push(*item);
        }
        self.selected = 0;
        self.entered = false;
    }

    /// Removes all items.
    pub fn clear_items(&mut self) {
        self.items.clear();
        self.selected = 0;
        self.entered = false;
    }

    /// Moves the selection to `index` and leaves entered mode. Indices
    /// out of range do nothing.
    pub fn select(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        self.selected = index;
        self.entered = false;
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, index: usize) -> Option<&MenuItem<'a>> {
        self.items.get(index)
    }

    pub fn orientation(&self) -> MenuOrientation {
        self.orientation
    }

    /// Whether the selected item is entered for editing.
    pub fn is_entered(&self) -> bool {
        self.entered
    }

    /// Whether the function button is held, as seen by this menu.
    pub fn is_function_button_down(&self) -> bool {
        self.function_down
    }

    /// Okay enters or leaves edit mode on editable items and triggers
    /// everything else: callbacks fire, checkboxes toggle, links open
    /// their page, close items close the menu.
    pub fn handle_okay_button(&mut self, presses: u8, cx: &mut EventContext<'_>) -> bool {
        if presses < 1 {
            return true;
        }
        let modifiable = self.item(self.selected).is_some_and(MenuItem::can_modify);
        if self.allow_entering && modifiable {
            self.entered = !self.entered;
        } else {
            self.entered = false;
            self.enter_item(self.selected, cx);
        }
        true
    }

    /// Cancel closes the menu page.
    pub fn handle_cancel_button(&mut self, presses: u8, cx: &mut EventContext<'_>) -> bool {
        if presses < 1 {
            return true;
        }
        cx.close_self();
        true
    }

    /// Arrows move the selection on one axis and step the value on the
    /// other, as set by the orientation. While entered, the selection
    /// axis steps the value too.
    pub fn handle_arrow_button(&mut self, arrow: ArrowButton, presses: u8) -> bool {
        if presses < 1 {
            return true;
        }
        match self.orientation {
            MenuOrientation::LeftRightSelect => match arrow {
                ArrowButton::Down => self.step_selected(-1, 0),
                ArrowButton::Up => self.step_selected(1, 0),
                ArrowButton::Left if self.entered => self.step_selected(-1, 0),
                ArrowButton::Right if self.entered => self.step_selected(1, 0),
                ArrowButton::Left => self.move_selection(-1),
                ArrowButton::Right => self.move_selection(1),
            },
            MenuOrientation::UpDownSelect => match arrow {
                ArrowButton::Left => self.step_selected(-1, 0),
                ArrowButton::Right => self.step_selected(1, 0),
                ArrowButton::Down if self.entered => self.step_selected(-1, 0),
                ArrowButton::Up if self.entered => self.step_selected(1, 0),
                ArrowButton::Up => self.move_selection(-1),
                ArrowButton::Down => self.move_selection(1),
            },
        }
        true
    }

    /// The function button acts as a held modifier: values step
    /// coarsely while it is down.
    pub fn handle_function_button(&mut self, presses: u8) -> bool {
        self.function_down = presses > 0;
        true
    }

    /// The menu encoder scrolls the selection, or steps the value while
    /// entered; the value encoder always steps the value.
    pub fn handle_encoder_turned(
        &mut self,
        encoder: EncoderId,
        increments: i16,
        steps_per_rev: u16,
        cx: &mut EventContext<'_>,
    ) -> bool {
        let bindings = *cx.bindings();
        if bindings.menu_encoder == Some(encoder) {
            if self.entered {
                self.step_selected(increments, steps_per_rev);
            } else {
                self.move_selection(i32::from(increments));
            }
        }
        if bindings.value_encoder == Some(encoder) {
            self.step_selected(increments, steps_per_rev);
        }
        true
    }

    /// The value pot writes the entered item's value from its absolute
    /// position.
    pub fn handle_pot_moved(
        &mut self,
        pot: PotId,
        position: f32,
        cx: &mut EventContext<'_>,
    ) -> bool {
        if cx.bindings().value_pot == Some(pot) && self.entered {
            self.set_selected_from_fraction(position);
        }
        true
    }

    /// Resets to browsing mode. Call when the menu becomes visible.
    pub fn handle_show(&mut self) {
        self.entered = false;
        self.function_down = false;
    }

    fn move_selection(&mut self, delta: i32) {
        if self.items.is_empty() {
            return;
        }
        let top = (self.items.len() - 1) as i32;
        self.selected = (self.selected as i32 + delta).clamp(0, top) as usize;
    }

    fn step_selected(&mut self, increments: i16, steps_per_rev: u16) {
        let function_down = self.function_down;
        let Some(item) = self.item(self.selected) else {
            return;
        };
        match item.kind {
            MenuItemKind::Checkbox(flag) => flag.set(increments > 0),
            MenuItemKind::Value(value) => value.step(increments, steps_per_rev, function_down),
            MenuItemKind::Custom(custom) => {
                custom.modify_by_steps(increments, steps_per_rev, function_down)
            }
            MenuItemKind::Action(_) | MenuItemKind::OpenPage(_) | MenuItemKind::CloseMenu => {}
        }
    }

    fn set_selected_from_fraction(&mut self, fraction: f32) {
        let function_down = self.function_down;
        let Some(item) = self.item(self.selected) else {
            return;
        };
        match item.kind {
            MenuItemKind::Checkbox(flag) => flag.set(fraction > 0.5),
            MenuItemKind::Value(value) => value.set_from_fraction(fraction),
            MenuItemKind::Custom(custom) => custom.modify_by_fraction(fraction, function_down),
            MenuItemKind::Action(_) | MenuItemKind::OpenPage(_) | MenuItemKind::CloseMenu => {}
        }
    }

    fn enter_item(&mut self, index: usize, cx: &mut EventContext<'_>) {
        let Some(item) = self.item(index) else {
            return;
        };
        match item.kind {
            MenuItemKind::Action(callback) => callback(),
            MenuItemKind::Checkbox(flag) => flag.set(!flag.get()),
            MenuItemKind::OpenPage(page) => cx.open_page(page),
            MenuItemKind::CloseMenu => cx.close_self(),
            MenuItemKind::Custom(custom) => custom.on_enter(),
            MenuItemKind::Value(_) => {}
        }
    }
}

/// Turns menu state into pixels. This is the look-and-feel seam: the
/// engine and [`MenuPage`] stay generic over it.
pub trait MenuRenderer<D> {
    /// Draws the whole menu onto a display.
    fn draw_menu(&mut self, display: &mut D, menu: &Menu<'_>);

    /// Whether the rendered menu covers the whole display. Defaults to
    /// opaque, which suits full-screen menus.
    fn is_opaque(&self, display: &D, menu: &Menu<'_>) -> bool {
        let _ = (display, menu);
        true
    }
}

/// A [`Menu`] engine wired up as a [`Page`].
///
/// Input callbacks forward to the engine, drawing goes through the
/// renderer, and showing the page resets the menu to browsing mode.
pub struct MenuPage<'a, R> {
    menu: Menu<'a>,
    renderer: R,
}

impl<'a, R> MenuPage<'a, R> {
    pub fn new(orientation: MenuOrientation, renderer: R) -> Self {
        Self {
            menu: Menu::new(orientation),
            renderer,
        }
    }

    pub fn menu(&self) -> &Menu<'a> {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut Menu<'a> {
        &mut self.menu
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

impl<'a, D, R: MenuRenderer<D>> Page<D> for MenuPage<'a, R> {
    fn is_opaque(&self, display: &D) -> bool {
        self.renderer.is_opaque(display, &self.menu)
    }

    fn on_okay_button(&mut self, presses: u8, cx: &mut EventContext<'_>) -> bool {
        self.menu.handle_okay_button(presses, cx)
    }

    fn on_cancel_button(&mut self, presses: u8, cx: &mut EventContext<'_>) -> bool {
        self.menu.handle_cancel_button(presses, cx)
    }

    fn on_arrow_button(
        &mut self,
        arrow: ArrowButton,
        presses: u8,
        _cx: &mut EventContext<'_>,
    ) -> bool {
        self.menu.handle_arrow_button(arrow, presses)
    }

    fn on_function_button(&mut self, presses: u8, _cx: &mut EventContext<'_>) -> bool {
        self.menu.handle_function_button(presses)
    }

    fn on_encoder_turned(
        &mut self,
        encoder: EncoderId,
        increments: i16,
        steps_per_rev: u16,
        cx: &mut EventContext<'_>,
    ) -> bool {
        self.menu
            .handle_encoder_turned(encoder, increments, steps_per_rev, cx)
    }

    fn on_pot_moved(&mut self, pot: PotId, position: f32, cx: &mut EventContext<'_>) -> bool {
        self.menu.handle_pot_moved(pot, position, cx)
    }

    fn on_show(&mut self) {
        self.menu.handle_show();
    }

    fn draw(&mut self, display: &mut D) {
        self.renderer.draw_menu(display, &self.menu);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::cell::Cell;

    use super::*;
    use crate::page::{ControlBindings, PageId, StackRequest, MAX_STACK_REQUESTS};

    struct Harness {
        bindings: ControlBindings,
        requests: Vec<StackRequest, MAX_STACK_REQUESTS>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                bindings: ControlBindings {
                    menu_encoder: Some(0),
                    value_encoder: Some(1),
                    value_pot: Some(0),
                    ..Default::default()
                },
                requests: Vec::new(),
            }
        }

        fn cx(&mut self) -> EventContext<'_> {
            EventContext {
                page: PageId(7),
                bindings: &self.bindings,
                buttons_down: 0,
                requests: &mut self.requests,
            }
        }
    }

    fn labels<'a>(menu: &'a Menu<'a>) -> std::vec::Vec<&'a str> {
        (0..menu.len())
            .filter_map(|index| menu.item(index).map(|item| item.label))
            .collect()
    }

    #[test]
    fn test_items_are_stored_in_order_and_capped() {
        let mut menu = Menu::new(MenuOrientation::UpDownSelect);
        menu.add_item(MenuItem::new("a", MenuItemKind::CloseMenu));
        menu.add_item(MenuItem::new("b", MenuItemKind::CloseMenu));
        assert_eq!(labels(&menu), ["a", "b"]);

        for _ in 0..MAX_MENU_ITEMS {
            menu.add_item(MenuItem::new("filler", MenuItemKind::CloseMenu));
        }
        assert_eq!(menu.len(), MAX_MENU_ITEMS);

        menu.clear_items();
        assert!(menu.is_empty());
        assert_eq!(menu.selected(), 0);
    }

    #[test]
    fn test_selection_clamps_at_both_ends() {
        let mut menu = Menu::new(MenuOrientation::UpDownSelect);
        menu.set_items(&[
            MenuItem::new("one", MenuItemKind::CloseMenu),
            MenuItem::new("two", MenuItemKind::CloseMenu),
            MenuItem::new("three", MenuItemKind::CloseMenu),
            MenuItem::new("four", MenuItemKind::CloseMenu),
        ]);

        menu.select(2);
        assert_eq!(menu.selected(), 2);

        menu.handle_arrow_button(ArrowButton::Down, 1);
        assert_eq!(menu.selected(), 3);

        // Already at the last item: stays put.
        menu.handle_arrow_button(ArrowButton::Down, 1);
        assert_eq!(menu.selected(), 3);

        for _ in 0..10 {
            menu.handle_arrow_button(ArrowButton::Up, 1);
        }
        assert_eq!(menu.selected(), 0);

        // Out-of-range select is a no-op.
        menu.select(17);
        assert_eq!(menu.selected(), 0);
    }

    #[test]
    fn test_releases_are_consumed_without_effect() {
        let mut harness = Harness::new();
        let mut menu = Menu::new(MenuOrientation::UpDownSelect);
        menu.set_items(&[
            MenuItem::new("one", MenuItemKind::CloseMenu),
            MenuItem::new("two", MenuItemKind::CloseMenu),
        ]);
        menu.select(1);

        assert!(menu.handle_arrow_button(ArrowButton::Up, 0));
        assert_eq!(menu.selected(), 1);
        assert!(menu.handle_okay_button(0, &mut harness.cx()));
        assert!(menu.handle_cancel_button(0, &mut harness.cx()));
        assert!(harness.requests.is_empty());
    }

    #[test]
    fn test_okay_toggles_a_checkbox() {
        let mut harness = Harness::new();
        let flag = Cell::new(false);
        let mut menu = Menu::new(MenuOrientation::UpDownSelect);
        menu.add_item(MenuItem::new("enabled", MenuItemKind::Checkbox(&flag)));

        menu.handle_okay_button(1, &mut harness.cx());
        assert!(flag.get());
        menu.handle_okay_button(1, &mut harness.cx());
        assert!(!flag.get());
        // Checkboxes are not enterable.
        assert!(!menu.is_entered());
    }

    #[test]
    fn test_modify_axis_sets_a_checkbox_directly() {
        let flag = Cell::new(false);
        let mut menu = Menu::new(MenuOrientation::UpDownSelect);
        menu.add_item(MenuItem::new("enabled", MenuItemKind::Checkbox(&flag)));

        menu.handle_arrow_button(ArrowButton::Right, 1);
        assert!(flag.get());
        menu.handle_arrow_button(ArrowButton::Left, 1);
        assert!(!flag.get());
    }

    #[test]
    fn test_okay_fires_an_action() {
        let mut harness = Harness::new();
        let calls = Cell::new(0u32);
        let bump = || calls.set(calls.get() + 1);
        let mut menu = Menu::new(MenuOrientation::UpDownSelect);
        menu.add_item(MenuItem::new("save", MenuItemKind::Action(&bump)));

        menu.handle_okay_button(1, &mut harness.cx());
        menu.handle_okay_button(1, &mut harness.cx());
        assert_eq!(calls.get(), 2);
        assert!(!menu.is_entered());
    }

    #[test]
    fn test_okay_enters_and_leaves_a_value_item() {
        let mut harness = Harness::new();
        let value = IntValue::new(5, 0, 10);
        let mut menu = Menu::new(MenuOrientation::UpDownSelect);
        menu.add_item(MenuItem::new("gain", MenuItemKind::Value(&value)));

        menu.handle_okay_button(1, &mut harness.cx());
        assert!(menu.is_entered());

        // Entered: the selection axis steps the value instead.
        menu.handle_arrow_button(ArrowButton::Up, 1);
        assert_eq!(value.get(), 6);
        menu.handle_arrow_button(ArrowButton::Down, 1);
        assert_eq!(value.get(), 5);

        menu.handle_okay_button(1, &mut harness.cx());
        assert!(!menu.is_entered());

        // Browsing again: the selection axis selects, the value stays.
        menu.handle_arrow_button(ArrowButton::Up, 1);
        assert_eq!(value.get(), 5);
    }

    #[test]
    fn test_modify_axis_works_without_entering() {
        let value = IntValue::new(5, 0, 10);
        let mut menu = Menu::new(MenuOrientation::LeftRightSelect);
        menu.add_item(MenuItem::new("gain", MenuItemKind::Value(&value)));

        // LeftRightSelect: up/down are the modify axis.
        menu.handle_arrow_button(ArrowButton::Up, 1);
        assert_eq!(value.get(), 6);
        menu.handle_arrow_button(ArrowButton::Down, 1);
        assert_eq!(value.get(), 5);
        assert!(!menu.is_entered());
    }

    #[test]
    fn test_function_button_requests_coarse_steps() {
        let value = IntValue::new(50, 0, 100);
        let mut menu = Menu::new(MenuOrientation::UpDownSelect);
        menu.add_item(MenuItem::new("gain", MenuItemKind::Value(&value)));

        menu.handle_function_button(1);
        assert!(menu.is_function_button_down());
        menu.handle_arrow_button(ArrowButton::Right, 1);
        assert_eq!(value.get(), 55);

        menu.handle_function_button(0);
        assert!(!menu.is_function_button_down());
        menu.handle_arrow_button(ArrowButton::Right, 1);
        assert_eq!(value.get(), 56);
    }

    #[test]
    fn test_allow_entering_off_keeps_okay_inert_on_values() {
        let mut harness = Harness::new();
        let value = IntValue::new(5, 0, 10);
        let mut menu = Menu::new(MenuOrientation::UpDownSelect);
        menu.set_allow_entering(false);
        menu.add_item(MenuItem::new("gain", MenuItemKind::Value(&value)));

        menu.handle_okay_button(1, &mut harness.cx());
        assert!(!menu.is_entered());
        assert_eq!(value.get(), 5);
    }

    #[test]
    fn test_cancel_closes_the_menu_page() {
        let mut harness = Harness::new();
        let mut menu = Menu::new(MenuOrientation::UpDownSelect);
        menu.add_item(MenuItem::new("one", MenuItemKind::CloseMenu));

        menu.handle_cancel_button(1, &mut harness.cx());
        assert_eq!(harness.requests.as_slice(), [StackRequest::Close(PageId(7))]);
    }

    #[test]
    fn test_close_and_open_items_request_stack_changes() {
        let mut harness = Harness::new();
        let mut menu = Menu::new(MenuOrientation::UpDownSelect);
        menu.set_items(&[
            MenuItem::new("sub", MenuItemKind::OpenPage(PageId(3))),
            MenuItem::new("back", MenuItemKind::CloseMenu),
        ]);

        menu.handle_okay_button(1, &mut harness.cx());
        menu.select(1);
        menu.handle_okay_button(1, &mut harness.cx());

        assert_eq!(
            harness.requests.as_slice(),
            [
                StackRequest::Open(PageId(3)),
                StackRequest::Close(PageId(7)),
            ]
        );
    }

    #[test]
    fn test_menu_encoder_scrolls_and_edits() {
        let mut harness = Harness::new();
        let value = IntValue::new(5, 0, 10);
        let mut menu = Menu::new(MenuOrientation::UpDownSelect);
        menu.set_items(&[
            MenuItem::new("one", MenuItemKind::CloseMenu),
            MenuItem::new("two", MenuItemKind::CloseMenu),
            MenuItem::new("gain", MenuItemKind::Value(&value)),
        ]);

        // Browsing: encoder 0 scrolls, clamped.
        menu.handle_encoder_turned(0, 5, 24, &mut harness.cx());
        assert_eq!(menu.selected(), 2);
        menu.handle_encoder_turned(0, -10, 24, &mut harness.cx());
        assert_eq!(menu.selected(), 0);

        // Entered: the same encoder edits instead.
        menu.select(2);
        menu.handle_okay_button(1, &mut harness.cx());
        menu.handle_encoder_turned(0, 1, 0, &mut harness.cx());
        assert_eq!(value.get(), 6);
        assert_eq!(menu.selected(), 2);

        // Unbound encoders are consumed but change nothing.
        menu.handle_encoder_turned(9, 1, 0, &mut harness.cx());
        assert_eq!(value.get(), 6);
    }

    #[test]
    fn test_value_encoder_edits_while_browsing() {
        let mut harness = Harness::new();
        let value = IntValue::new(5, 0, 10);
        let mut menu = Menu::new(MenuOrientation::UpDownSelect);
        menu.add_item(MenuItem::new("gain", MenuItemKind::Value(&value)));

        menu.handle_encoder_turned(1, 2, 0, &mut harness.cx());
        assert_eq!(value.get(), 7);
        assert!(!menu.is_entered());
    }

    #[test]
    fn test_value_pot_edits_only_while_entered() {
        let mut harness = Harness::new();
        let value = IntValue::new(0, 0, 100);
        let mut menu = Menu::new(MenuOrientation::UpDownSelect);
        menu.add_item(MenuItem::new("gain", MenuItemKind::Value(&value)));

        menu.handle_pot_moved(0, 0.75, &mut harness.cx());
        assert_eq!(value.get(), 0);

        menu.handle_okay_button(1, &mut harness.cx());
        menu.handle_pot_moved(0, 0.75, &mut harness.cx());
        assert_eq!(value.get(), 75);

        // A pot without the value role is ignored.
        menu.handle_pot_moved(3, 0.1, &mut harness.cx());
        assert_eq!(value.get(), 75);
    }

    #[test]
    fn test_custom_item_gets_every_operation() {
        struct Recorder {
            steps: Cell<i16>,
            fraction: Cell<f32>,
            entered: Cell<u32>,
            modifiable: Cell<bool>,
        }

        impl CustomItem for Recorder {
            fn can_modify(&self) -> bool {
                self.modifiable.get()
            }

            fn modify_by_steps(&self, increments: i16, _steps_per_rev: u16, _function: bool) {
                self.steps.set(self.steps.get() + increments);
            }

            fn modify_by_fraction(&self, fraction: f32, _function: bool) {
                self.fraction.set(fraction);
            }

            fn on_enter(&self) {
                self.entered.set(self.entered.get() + 1);
            }
        }

        let mut harness = Harness::new();
        let recorder = Recorder {
            steps: Cell::new(0),
            fraction: Cell::new(0.0),
            entered: Cell::new(0),
            modifiable: Cell::new(false),
        };
        let mut menu = Menu::new(MenuOrientation::UpDownSelect);
        menu.add_item(MenuItem::new("fx", MenuItemKind::Custom(&recorder)));

        // Not modifiable: okay triggers the enter hook.
        menu.handle_okay_button(1, &mut harness.cx());
        assert_eq!(recorder.entered.get(), 1);

        // Modifiable: okay enters, the controls delegate.
        recorder.modifiable.set(true);
        menu.handle_okay_button(1, &mut harness.cx());
        assert!(menu.is_entered());
        menu.handle_arrow_button(ArrowButton::Up, 1);
        assert_eq!(recorder.steps.get(), 1);
        menu.handle_pot_moved(0, 0.25, &mut harness.cx());
        assert_eq!(recorder.fraction.get(), 0.25);
        assert_eq!(recorder.entered.get(), 1);
    }

    #[test]
    fn test_show_resets_to_browsing() {
        let mut harness = Harness::new();
        let value = IntValue::new(5, 0, 10);
        let mut menu = Menu::new(MenuOrientation::UpDownSelect);
        menu.add_item(MenuItem::new("gain", MenuItemKind::Value(&value)));

        menu.handle_okay_button(1, &mut harness.cx());
        menu.handle_function_button(1);
        assert!(menu.is_entered());

        menu.handle_show();
        assert!(!menu.is_entered());
        assert!(!menu.is_function_button_down());
        // The selection itself is kept across show calls.
        assert_eq!(menu.selected(), 0);
    }

    #[test]
    fn test_empty_menu_consumes_input_without_effect() {
        let mut harness = Harness::new();
        let mut menu = Menu::new(MenuOrientation::UpDownSelect);

        assert!(menu.handle_okay_button(1, &mut harness.cx()));
        assert!(menu.handle_arrow_button(ArrowButton::Down, 1));
        assert!(menu.handle_encoder_turned(0, 3, 24, &mut harness.cx()));
        assert!(menu.handle_pot_moved(0, 0.5, &mut harness.cx()));
        assert_eq!(menu.selected(), 0);
        assert!(harness.requests.is_empty());
    }
}
