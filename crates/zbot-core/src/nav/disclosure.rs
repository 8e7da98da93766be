//! Two-state open/closed toggle.

/// Open/closed state for one collapsible element. Starts closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Disclosure {
    open: bool,
}

impl Disclosure {
    /// Closed disclosure.
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    /// Whether the element is open.
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Flip the state and return the new one.
    pub const fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Open. Returns `true` when the state changed.
    pub const fn open(&mut self) -> bool {
        let changed = !self.open;
        self.open = true;
        changed
    }

    /// Close. Returns `true` when the state changed.
    pub const fn close(&mut self) -> bool {
        let changed = self.open;
        self.open = false;
        changed
    }

    /// Value for the trigger's `aria-expanded` attribute.
    #[must_use]
    pub const fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let state = Disclosure::new();
        assert!(!state.is_open());
        assert_eq!(state.aria_expanded(), "false");
    }

    #[test]
    fn transitions_report_changes() {
        let mut state = Disclosure::new();
        assert!(state.open());
        assert!(!state.open());
        assert_eq!(state.aria_expanded(), "true");
        assert!(state.close());
        assert!(!state.close());
        assert!(state.toggle());
        assert!(!state.toggle());
    }
}
