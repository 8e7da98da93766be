//! Language menu and inline locale buttons.

use std::cell::Cell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use web_sys::{Document, Element};
use zbot_core::nav::{LanguageMenu, MenuEvent, MenuResponse};

use super::dom::{elements, set_class};
use super::markup::{
    HIDDEN_CLASS, INLINE_SWITCHER_ID, LANG_ATTR, LANGUAGE_MENU_ID, LANGUAGE_TRIGGER_ID,
};

/// Called with the raw `data-lang` value of the chosen control.
pub(crate) type SelectLocale = Rc<dyn Fn(String)>;

/// Wire both switcher surfaces. Missing elements are skipped.
pub(crate) fn bind(document: &Document, select: &SelectLocale) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    bind_menu(document, select, &mut listeners);
    bind_inline(document, select, &mut listeners);
    listeners
}

fn bind_menu(document: &Document, select: &SelectLocale, listeners: &mut Vec<EventListener>) {
    let (Some(trigger), Some(menu)) = (
        document.get_element_by_id(LANGUAGE_TRIGGER_ID),
        document.get_element_by_id(LANGUAGE_MENU_ID),
    ) else {
        return;
    };
    let open = !menu.class_list().contains(HIDDEN_CLASS);
    let state = Rc::new(Cell::new(LanguageMenu::new(open)));

    listeners.push(EventListener::new(&trigger, "click", {
        let state = Rc::clone(&state);
        let menu = menu.clone();
        move |event| {
            let response = respond(&state, &menu, MenuEvent::TriggerClick);
            if response.stop_propagation {
                event.stop_propagation();
            }
        }
    }));

    for item in elements(menu.query_selector_all(&format!("[{LANG_ATTR}]"))) {
        listeners.push(EventListener::new_with_options(
            &item,
            "click",
            EventListenerOptions::enable_prevent_default(),
            {
                let item = item.clone();
                let menu = menu.clone();
                let state = Rc::clone(&state);
                let select = Rc::clone(select);
                move |event| {
                    if let Some(lang) = item.get_attribute(LANG_ATTR) {
                        select(lang);
                    }
                    let response = respond(&state, &menu, MenuEvent::ItemClick);
                    if response.prevent_default {
                        event.prevent_default();
                    }
                }
            },
        ));
    }

    listeners.push(EventListener::new(document, "click", move |_| {
        respond(&state, &menu, MenuEvent::DocumentClick);
    }));
}

fn bind_inline(document: &Document, select: &SelectLocale, listeners: &mut Vec<EventListener>) {
    let Some(container) = document.get_element_by_id(INLINE_SWITCHER_ID) else {
        return;
    };
    for button in elements(container.query_selector_all(&format!("[{LANG_ATTR}]"))) {
        listeners.push(EventListener::new(&button, "click", {
            let button = button.clone();
            let select = Rc::clone(select);
            move |_| {
                if let Some(lang) = button.get_attribute(LANG_ATTR) {
                    select(lang);
                }
            }
        }));
    }
}

fn respond(state: &Cell<LanguageMenu>, menu: &Element, event: MenuEvent) -> MenuResponse {
    let mut current = state.get();
    let response = current.handle(event);
    state.set(current);
    if response.changed {
        set_class(menu, HIDDEN_CLASS, !current.is_open());
    }
    response
}
