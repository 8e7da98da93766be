#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! DOM-free core of the Zbot marketing site front-end.
//!
//! Layout: `i18n` (locales, mappings, store, loader, switch session, applier
//! registry, switcher model), `nav` (disclosure and dropdown state machines),
//! `config` (site configuration with validation), `error` (typed failures).
//! The wasm glue in `zbot-ui` drives these types from DOM events.

pub mod config;
pub mod error;
pub mod i18n;
pub mod nav;

pub use config::SiteConfig;
pub use error::{ConfigError, LoadError, LocaleError, PreferenceError};
