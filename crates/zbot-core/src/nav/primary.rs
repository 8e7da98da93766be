//! Responsive primary navigation (hamburger menu).

use super::Disclosure;

/// Icon shown in the menu toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    /// Menu closed: hamburger.
    Bars,
    /// Menu open: close cross.
    Xmark,
}

impl NavIcon {
    /// Markup for the toggle's inner HTML.
    #[must_use]
    pub const fn markup(self) -> &'static str {
        match self {
            Self::Bars => r#"<i class="fa-solid fa-bars"></i>"#,
            Self::Xmark => r#"<i class="fa-solid fa-xmark"></i>"#,
        }
    }
}

/// Events the primary nav reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    /// Toggle button clicked.
    ToggleClick,
    /// Click landed outside both the toggle and the menu.
    OutsideClick,
    /// A navigation link was followed.
    LinkClick,
}

/// State of the collapsible primary navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrimaryNav {
    state: Disclosure,
}

impl PrimaryNav {
    /// Closed navigation.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: Disclosure::new(),
        }
    }

    /// Whether the menu is open.
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.state.is_open()
    }

    /// Icon matching the current state.
    #[must_use]
    pub const fn icon(self) -> NavIcon {
        if self.state.is_open() {
            NavIcon::Xmark
        } else {
            NavIcon::Bars
        }
    }

    /// Apply `event`. Returns `true` when the page must be repainted.
    pub const fn handle(&mut self, event: NavEvent) -> bool {
        match event {
            NavEvent::ToggleClick => {
                self.state.toggle();
                true
            }
            NavEvent::OutsideClick | NavEvent::LinkClick => self.state.close(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_swaps_icon() {
        let mut nav = PrimaryNav::new();
        assert_eq!(nav.icon(), NavIcon::Bars);
        assert!(nav.handle(NavEvent::ToggleClick));
        assert!(nav.is_open());
        assert_eq!(nav.icon(), NavIcon::Xmark);
        assert!(nav.icon().markup().contains("fa-xmark"));
    }

    #[test]
    fn outside_and_link_clicks_close() {
        let mut nav = PrimaryNav::new();
        nav.handle(NavEvent::ToggleClick);
        assert!(nav.handle(NavEvent::OutsideClick));
        assert!(!nav.is_open());
        assert!(!nav.handle(NavEvent::LinkClick));

        nav.handle(NavEvent::ToggleClick);
        assert!(nav.handle(NavEvent::LinkClick));
        assert_eq!(nav.icon(), NavIcon::Bars);
    }
}
