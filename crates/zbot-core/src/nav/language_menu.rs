//! Click-driven language menu.

use super::Disclosure;

/// Clicks the language menu reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// The menu button was clicked.
    TriggerClick,
    /// A locale entry inside the menu was clicked.
    ItemClick,
    /// A click reached the document.
    DocumentClick,
}

/// What the DOM layer does with one click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuResponse {
    /// The open state changed and must be repainted.
    pub changed: bool,
    /// Keep the click from reaching document listeners.
    pub stop_propagation: bool,
    /// Suppress the entry's default navigation.
    pub prevent_default: bool,
}

/// Language menu state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LanguageMenu {
    state: Disclosure,
}

impl LanguageMenu {
    /// Menu in the state the markup was authored with.
    #[must_use]
    pub const fn new(open: bool) -> Self {
        let mut state = Disclosure::new();
        if open {
            state.open();
        }
        Self { state }
    }

    /// Whether the menu is shown.
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.state.is_open()
    }

    /// Apply `event`.
    ///
    /// Only the trigger click is kept from bubbling; the document listener
    /// would otherwise close the menu it just opened. Item clicks bubble so
    /// other open menus on the page are dismissed too.
    pub const fn handle(&mut self, event: MenuEvent) -> MenuResponse {
        match event {
            MenuEvent::TriggerClick => {
                self.state.toggle();
                MenuResponse {
                    changed: true,
                    stop_propagation: true,
                    prevent_default: false,
                }
            }
            MenuEvent::ItemClick => MenuResponse {
                changed: self.state.close(),
                stop_propagation: false,
                prevent_default: true,
            },
            MenuEvent::DocumentClick => MenuResponse {
                changed: self.state.close(),
                stop_propagation: false,
                prevent_default: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_toggles_without_bubbling() {
        let mut menu = LanguageMenu::new(false);
        let response = menu.handle(MenuEvent::TriggerClick);
        assert!(menu.is_open());
        assert!(response.changed);
        assert!(response.stop_propagation);

        menu.handle(MenuEvent::TriggerClick);
        assert!(!menu.is_open());
    }

    #[test]
    fn item_click_closes_and_keeps_bubbling() {
        let mut menu = LanguageMenu::new(true);
        let response = menu.handle(MenuEvent::ItemClick);
        assert!(!menu.is_open());
        assert_eq!(
            response,
            MenuResponse {
                changed: true,
                stop_propagation: false,
                prevent_default: true,
            }
        );
    }

    #[test]
    fn document_click_closes_only_an_open_menu() {
        let mut menu = LanguageMenu::new(false);
        assert!(!menu.handle(MenuEvent::DocumentClick).changed);

        let mut menu = LanguageMenu::new(true);
        let response = menu.handle(MenuEvent::DocumentClick);
        assert!(response.changed);
        assert!(!response.stop_propagation);
        assert!(!menu.is_open());
    }
}
