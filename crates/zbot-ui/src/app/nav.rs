//! Primary navigation toggle and hover dropdowns.
//!
//! # Design
//! - Each dropdown owns one slot holding its state machine and at most one
//!   close timer. Effects from the machine are executed here.
//! - Timer callbacks hold a weak reference to their slot and never drop the
//!   timeout that is running them; a fired timeout stays in the slot until
//!   the next schedule or cancel replaces it.
//! - Dropping [`NavBindings`] detaches every listener and cancels timers.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::window;
use gloo_timers::callback::Timeout;
use tracing::{debug, trace};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, FocusEvent, KeyboardEvent, Node};
use zbot_core::nav::{
    DropdownEffect, DropdownEvent, DropdownMachine, NavEvent, PointerMode, PrimaryNav,
};

use super::dom::{elements, event_node, inside, set_attribute, set_class};
use super::markup::{
    DROPDOWN, DROPDOWN_MENU, DROPDOWN_TOGGLE, HOVER_QUERY, NAV_LINKS, NAV_TOGGLE_ID, OPEN_CLASS,
    PRIMARY_NAV_ID,
};

/// Listeners and dropdown slots for one page.
pub(crate) struct NavBindings {
    listeners: Vec<EventListener>,
    slots: Vec<Rc<RefCell<DropdownSlot>>>,
}

impl NavBindings {
    pub(crate) fn bind(document: &Document, close_delay: Duration) -> Self {
        let mut listeners = Vec::new();
        bind_primary(document, &mut listeners);

        let mode = pointer_mode();
        let mut slots = Vec::new();
        for root in elements(document.query_selector_all(DROPDOWN)) {
            let toggle = root.query_selector(DROPDOWN_TOGGLE).ok().flatten();
            let menu = root.query_selector(DROPDOWN_MENU).ok().flatten();
            let (Some(toggle), Some(menu)) = (toggle, menu) else {
                continue;
            };
            let slot = Rc::new(RefCell::new(DropdownSlot {
                machine: DropdownMachine::new(mode, close_delay),
                timer: None,
                root: root.clone(),
                toggle: toggle.clone(),
            }));
            bind_dropdown(document, &slot, &root, &toggle, &menu, &mut listeners);
            slots.push(slot);
        }
        debug!(dropdowns = slots.len(), mode = ?mode, "navigation bound");

        Self { listeners, slots }
    }
}

impl Drop for NavBindings {
    fn drop(&mut self) {
        self.listeners.clear();
        for slot in &self.slots {
            let mut slot = slot.borrow_mut();
            let effects = slot.machine.teardown();
            slot.execute(&effects, Weak::new());
        }
    }
}

struct DropdownSlot {
    machine: DropdownMachine,
    timer: Option<Timeout>,
    root: Element,
    toggle: Element,
}

impl DropdownSlot {
    fn execute(&mut self, effects: &[DropdownEffect], this: Weak<RefCell<Self>>) {
        for effect in effects {
            match *effect {
                DropdownEffect::SetOpen(open) => {
                    set_class(&self.root, OPEN_CLASS, open);
                    set_attribute(&self.toggle, "aria-expanded", self.machine.aria_expanded());
                }
                DropdownEffect::ScheduleClose { token, delay } => {
                    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
                    let this = this.clone();
                    self.timer = Some(Timeout::new(millis, move || {
                        if let Some(slot) = this.upgrade() {
                            let mut slot = slot.borrow_mut();
                            let effects = slot.machine.handle(DropdownEvent::CloseElapsed(token));
                            slot.execute(&effects, Weak::new());
                        }
                    }));
                }
                DropdownEffect::CancelClose => self.timer = None,
                DropdownEffect::PreventDefault => {}
            }
        }
    }
}

fn dispatch(slot: &Rc<RefCell<DropdownSlot>>, event: DropdownEvent) -> bool {
    trace!(event = ?event, "dropdown event");
    let weak = Rc::downgrade(slot);
    let mut slot = slot.borrow_mut();
    let effects = slot.machine.handle(event);
    slot.execute(&effects, weak);
    effects.contains(&DropdownEffect::PreventDefault)
}

fn bind_dropdown(
    document: &Document,
    slot: &Rc<RefCell<DropdownSlot>>,
    root: &Element,
    toggle: &Element,
    menu: &Element,
    listeners: &mut Vec<EventListener>,
) {
    let hover = slot.borrow().machine.mode() == PointerMode::Hover;

    listeners.push(EventListener::new_with_options(
        toggle,
        "click",
        EventListenerOptions::enable_prevent_default(),
        {
            let slot = Rc::clone(slot);
            move |event| {
                if dispatch(&slot, DropdownEvent::TriggerClick) {
                    event.prevent_default();
                }
            }
        },
    ));

    if hover {
        for target in [toggle, menu] {
            for (name, event) in [
                ("mouseenter", DropdownEvent::PointerEnter),
                ("mouseleave", DropdownEvent::PointerLeave),
            ] {
                let slot = Rc::clone(slot);
                listeners.push(EventListener::new(target, name, move |_| {
                    dispatch(&slot, event);
                }));
            }
        }
        listeners.push(EventListener::new(toggle, "focus", {
            let slot = Rc::clone(slot);
            move |_| {
                dispatch(&slot, DropdownEvent::FocusIn);
            }
        }));
        listeners.push(EventListener::new(root, "focusout", {
            let slot = Rc::clone(slot);
            let root = root.clone();
            move |event| {
                let next = event
                    .dyn_ref::<FocusEvent>()
                    .and_then(FocusEvent::related_target)
                    .and_then(|target| target.dyn_into::<Node>().ok());
                let still_inside = inside(next.as_ref(), &[&root]);
                dispatch(&slot, DropdownEvent::FocusOut { still_inside });
            }
        }));
    }

    listeners.push(EventListener::new(menu, "click", {
        let slot = Rc::clone(slot);
        move |event| {
            let on_item = event_node(event)
                .and_then(|node| node.dyn_into::<Element>().ok())
                .and_then(|element| element.closest("a, button").ok().flatten())
                .is_some();
            if on_item {
                dispatch(&slot, DropdownEvent::ItemClick);
            }
        }
    }));

    listeners.push(EventListener::new(document, "click", {
        let slot = Rc::clone(slot);
        let root = root.clone();
        move |event| {
            if !inside(event_node(event).as_ref(), &[&root]) {
                dispatch(&slot, DropdownEvent::OutsideClick);
            }
        }
    }));

    listeners.push(EventListener::new(document, "keydown", {
        let slot = Rc::clone(slot);
        move |event| {
            let escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|key| key.key() == "Escape");
            if escape {
                dispatch(&slot, DropdownEvent::Escape);
            }
        }
    }));
}

fn bind_primary(document: &Document, listeners: &mut Vec<EventListener>) {
    let (Some(toggle), Some(nav)) = (
        document.get_element_by_id(NAV_TOGGLE_ID),
        document.get_element_by_id(PRIMARY_NAV_ID),
    ) else {
        return;
    };
    let state = Rc::new(Cell::new(PrimaryNav::new()));
    let update: Rc<dyn Fn(NavEvent)> = Rc::new({
        let toggle = toggle.clone();
        let nav = nav.clone();
        move |event| {
            let mut current = state.get();
            if current.handle(event) {
                state.set(current);
                set_class(&nav, OPEN_CLASS, current.is_open());
                let expanded = if current.is_open() { "true" } else { "false" };
                set_attribute(&toggle, "aria-expanded", expanded);
                toggle.set_inner_html(current.icon().markup());
            }
        }
    });

    listeners.push(EventListener::new(&toggle, "click", {
        let update = Rc::clone(&update);
        move |_| update(NavEvent::ToggleClick)
    }));

    listeners.push(EventListener::new_with_options(
        document,
        "click",
        EventListenerOptions::run_in_capture_phase(),
        {
            let update = Rc::clone(&update);
            move |event| {
                if !inside(event_node(event).as_ref(), &[&toggle, &nav]) {
                    update(NavEvent::OutsideClick);
                }
            }
        },
    ));

    for link in elements(document.query_selector_all(NAV_LINKS)) {
        let update = Rc::clone(&update);
        listeners.push(EventListener::new(&link, "click", move |_| {
            update(NavEvent::LinkClick);
        }));
    }
}

fn pointer_mode() -> PointerMode {
    let hover = window()
        .match_media(HOVER_QUERY)
        .ok()
        .flatten()
        .is_some_and(|query| query.matches());
    if hover {
        PointerMode::Hover
    } else {
        PointerMode::Touch
    }
}
