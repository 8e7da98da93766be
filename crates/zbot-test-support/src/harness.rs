//! Virtual-clock driver for [`DropdownMachine`].

use std::time::Duration;

use zbot_core::nav::{DropdownEffect, DropdownEvent, DropdownMachine, PointerMode, TimerToken};

/// Runs a dropdown machine against a fake clock, performing its effects the
/// way the DOM layer does: one replaceable timer, one rendered open flag.
#[derive(Debug)]
pub struct DropdownHarness {
    machine: DropdownMachine,
    now: Duration,
    timer: Option<(TimerToken, Duration)>,
    rendered_open: bool,
    prevented: usize,
    scheduled: usize,
}

impl DropdownHarness {
    /// Closed dropdown in `mode` with `delay_ms` debounce.
    #[must_use]
    pub const fn new(mode: PointerMode, delay_ms: u64) -> Self {
        Self {
            machine: DropdownMachine::new(mode, Duration::from_millis(delay_ms)),
            now: Duration::ZERO,
            timer: None,
            rendered_open: false,
            prevented: 0,
            scheduled: 0,
        }
    }

    /// Deliver `event` and perform the resulting effects.
    pub fn send(&mut self, event: DropdownEvent) {
        for effect in self.machine.handle(event) {
            match effect {
                DropdownEffect::SetOpen(open) => self.rendered_open = open,
                DropdownEffect::ScheduleClose { token, delay } => {
                    self.timer = Some((token, self.now + delay));
                    self.scheduled += 1;
                }
                DropdownEffect::CancelClose => self.timer = None,
                DropdownEffect::PreventDefault => self.prevented += 1,
            }
        }
    }

    /// Move the clock forward, firing the timer if its deadline passes.
    pub fn advance_ms(&mut self, ms: u64) {
        self.now += Duration::from_millis(ms);
        if let Some((token, deadline)) = self.timer {
            if deadline <= self.now {
                self.timer = None;
                self.send(DropdownEvent::CloseElapsed(token));
            }
        }
    }

    /// Open state as last rendered.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.rendered_open
    }

    /// Whether a close timer is pending.
    #[must_use]
    pub const fn timer_pending(&self) -> bool {
        self.timer.is_some()
    }

    /// How many close timers were scheduled in total.
    #[must_use]
    pub const fn scheduled(&self) -> usize {
        self.scheduled
    }

    /// How many default actions were suppressed.
    #[must_use]
    pub const fn prevented(&self) -> usize {
        self.prevented
    }

    /// Machine under test.
    #[must_use]
    pub const fn machine(&self) -> &DropdownMachine {
        &self.machine
    }
}
