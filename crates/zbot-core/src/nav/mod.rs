//! Open/closed state machines for the navigation menu, the hover dropdown
//! and the language menu. DOM wiring lives in `zbot-ui`.

mod disclosure;
mod dropdown;
mod language_menu;
mod primary;

pub use disclosure::Disclosure;
pub use dropdown::{DropdownEffect, DropdownEvent, DropdownMachine, PointerMode, TimerToken};
pub use language_menu::{LanguageMenu, MenuEvent, MenuResponse};
pub use primary::{NavEvent, NavIcon, PrimaryNav};
