//! Hover/focus/click dropdown with a debounced close.
//!
//! # Design
//! - The machine is pure: it consumes events and returns effects for the
//!   DOM layer to perform (class/ARIA updates, timer scheduling).
//! - At most one close is pending. Every schedule cancels the previous one,
//!   and an elapsed timer only closes when its token is still current.

use std::time::Duration;

use super::Disclosure;

/// Whether the device can hover, decided once at wiring time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerMode {
    /// `(hover: hover)` matched: pointer and focus open the menu.
    Hover,
    /// Touch or no-hover device: the trigger click toggles the menu.
    Touch,
}

/// Identifies one scheduled close.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// Input events for the dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownEvent {
    /// The trigger was clicked.
    TriggerClick,
    /// The pointer entered the trigger or the menu.
    PointerEnter,
    /// The pointer left the trigger or the menu.
    PointerLeave,
    /// Keyboard focus reached the trigger.
    FocusIn,
    /// Focus left an element of the dropdown.
    FocusOut {
        /// Whether focus moved to another element inside the dropdown.
        still_inside: bool,
    },
    /// Escape was pressed anywhere in the document.
    Escape,
    /// A click landed outside the dropdown.
    OutsideClick,
    /// An item inside the menu was clicked.
    ItemClick,
    /// A scheduled close fired.
    CloseElapsed(TimerToken),
}

/// Work for the DOM layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownEffect {
    /// Mirror the state into the `is-open` class and `aria-expanded`.
    SetOpen(bool),
    /// Start a close timer; replaces any previous one.
    ScheduleClose {
        /// Token to hand back in [`DropdownEvent::CloseElapsed`].
        token: TimerToken,
        /// Debounce delay.
        delay: Duration,
    },
    /// Drop the pending close timer.
    CancelClose,
    /// Suppress the trigger's default navigation.
    PreventDefault,
}

/// Dropdown state plus its pending close.
#[derive(Clone, Debug)]
pub struct DropdownMachine {
    state: Disclosure,
    mode: PointerMode,
    close_delay: Duration,
    pending: Option<TimerToken>,
    next_token: u64,
}

impl DropdownMachine {
    /// Closed dropdown for `mode` with the given debounce delay.
    #[must_use]
    pub const fn new(mode: PointerMode, close_delay: Duration) -> Self {
        Self {
            state: Disclosure::new(),
            mode,
            close_delay,
            pending: None,
            next_token: 0,
        }
    }

    /// Whether the menu is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Pointer mode chosen at construction.
    #[must_use]
    pub const fn mode(&self) -> PointerMode {
        self.mode
    }

    /// Token of the pending close, if any.
    #[must_use]
    pub const fn pending_close(&self) -> Option<TimerToken> {
        self.pending
    }

    /// `aria-expanded` value for the trigger.
    #[must_use]
    pub const fn aria_expanded(&self) -> &'static str {
        self.state.aria_expanded()
    }

    /// Consume `event` and return the effects to perform, in order.
    pub fn handle(&mut self, event: DropdownEvent) -> Vec<DropdownEffect> {
        let mut effects = Vec::new();
        match (event, self.mode) {
            (DropdownEvent::TriggerClick, PointerMode::Touch) => {
                effects.push(DropdownEffect::PreventDefault);
                self.cancel_pending(&mut effects);
                let open = self.state.toggle();
                effects.push(DropdownEffect::SetOpen(open));
            }
            (
                DropdownEvent::PointerEnter
                | DropdownEvent::PointerLeave
                | DropdownEvent::FocusIn
                | DropdownEvent::FocusOut { .. },
                PointerMode::Touch,
            )
            | (DropdownEvent::TriggerClick, PointerMode::Hover)
            | (DropdownEvent::FocusOut { still_inside: true }, PointerMode::Hover) => {}
            (DropdownEvent::PointerEnter | DropdownEvent::FocusIn, PointerMode::Hover) => {
                self.cancel_pending(&mut effects);
                self.open(&mut effects);
            }
            (
                DropdownEvent::PointerLeave | DropdownEvent::FocusOut { still_inside: false },
                PointerMode::Hover,
            ) => self.schedule_close(&mut effects),
            (
                DropdownEvent::Escape | DropdownEvent::OutsideClick | DropdownEvent::ItemClick,
                _,
            ) => {
                self.cancel_pending(&mut effects);
                self.close(&mut effects);
            }
            (DropdownEvent::CloseElapsed(token), _) => {
                if self.pending == Some(token) {
                    self.pending = None;
                    self.close(&mut effects);
                }
            }
        }
        effects
    }

    /// Cancel any pending close before the element goes away.
    pub fn teardown(&mut self) -> Vec<DropdownEffect> {
        let mut effects = Vec::new();
        self.cancel_pending(&mut effects);
        effects
    }

    fn open(&mut self, effects: &mut Vec<DropdownEffect>) {
        if self.state.open() {
            effects.push(DropdownEffect::SetOpen(true));
        }
    }

    fn close(&mut self, effects: &mut Vec<DropdownEffect>) {
        if self.state.close() {
            effects.push(DropdownEffect::SetOpen(false));
        }
    }

    fn cancel_pending(&mut self, effects: &mut Vec<DropdownEffect>) {
        if self.pending.take().is_some() {
            effects.push(DropdownEffect::CancelClose);
        }
    }

    fn schedule_close(&mut self, effects: &mut Vec<DropdownEffect>) {
        self.cancel_pending(effects);
        if !self.state.is_open() {
            return;
        }
        self.next_token += 1;
        let token = TimerToken(self.next_token);
        self.pending = Some(token);
        effects.push(DropdownEffect::ScheduleClose {
            token,
            delay: self.close_delay,
        });
    }
}
