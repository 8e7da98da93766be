//! wasm32 entry point: configuration, logging, and page wiring.
//!
//! # Design
//! - One [`Site`] per page lives in a thread-local; `teardown` drops it and
//!   with it every listener and timer.
//! - Locale switches run on the microtask queue; the session discards stale
//!   results itself.

mod dom;
mod markup;
mod nav;
mod preferences;
mod surface;
mod switcher;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::anyhow;
use gloo::events::EventListener;
use gloo::utils::document;
use tracing::{debug, error, info};
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen_futures::spawn_local;
use zbot_core::SiteConfig;
use zbot_core::i18n::I18nSession;
use zbot_telemetry::{LogFormat, LoggingConfig, init_logging};

use crate::services::translations::HttpTranslationSource;
use markup::CONFIG_SCRIPT_ID;
use nav::NavBindings;
use preferences::{LocalStoragePreferences, browser_language};
use surface::DomSurface;

type SiteSession = I18nSession<HttpTranslationSource, LocalStoragePreferences, DomSurface>;

struct Site {
    session: Rc<SiteSession>,
    _switcher: Vec<EventListener>,
    _nav: NavBindings,
}

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
    static READY: RefCell<Option<EventListener>> = const { RefCell::new(None) };
}

/// Entrypoint invoked by the wasm binary.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let (config, config_error) = match load_config() {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };

    let logging = LoggingConfig {
        level: &config.log_level,
        format: LogFormat::Compact,
        ..LoggingConfig::default()
    };
    if let Err(err) = init_logging(&logging) {
        gloo::console::warn!(format!("logging unavailable: {err:#}"));
    }
    if let Some(err) = config_error {
        error!(error = %err, "invalid site configuration; using defaults");
    }

    let document = document();
    if document.ready_state() == "loading" {
        let listener = EventListener::once(&document, "DOMContentLoaded", move |_| start(&config));
        READY.with(|slot| *slot.borrow_mut() = Some(listener));
    } else {
        start(&config);
    }
}

/// Switch the page language; exported for inline `onclick` handlers.
#[wasm_bindgen(js_name = switchLanguage)]
pub fn switch_language(lang: String) {
    let session = SITE.with(|site| site.borrow().as_ref().map(|site| Rc::clone(&site.session)));
    match session {
        Some(session) => request_switch(session, lang),
        None => debug!(locale = %lang, "switch requested before startup"),
    }
}

/// Detach every listener and cancel pending timers.
#[wasm_bindgen]
pub fn teardown() {
    READY.with(|slot| slot.borrow_mut().take());
    if SITE.with(|site| site.borrow_mut().take()).is_some() {
        info!("site controllers detached");
    }
}

fn start(config: &SiteConfig) {
    let document = document();
    let surface = DomSurface::scan(document.clone(), config.busy_opacity);
    let session = Rc::new(I18nSession::new(
        HttpTranslationSource::new(config),
        LocalStoragePreferences::new(&config.storage_key),
        surface,
        config.default_locale,
    ));

    spawn_local({
        let session = Rc::clone(&session);
        async move {
            let outcome = session.init(browser_language().as_deref()).await;
            debug!(outcome = ?outcome, "initial locale resolved");
        }
    });

    let select: switcher::SelectLocale = Rc::new({
        let session = Rc::clone(&session);
        move |lang| request_switch(Rc::clone(&session), lang)
    });
    let site = Site {
        _switcher: switcher::bind(&document, &select),
        _nav: NavBindings::bind(&document, config.close_delay()),
        session,
    };
    SITE.with(|slot| *slot.borrow_mut() = Some(site));
}

fn request_switch(session: Rc<SiteSession>, lang: String) {
    spawn_local(async move {
        let outcome = session.switch_lang(&lang).await;
        debug!(requested = %lang, outcome = ?outcome, "locale switch finished");
    });
}

fn load_config() -> anyhow::Result<SiteConfig> {
    let Some(script) = document().get_element_by_id(CONFIG_SCRIPT_ID) else {
        return Ok(SiteConfig::default());
    };
    let raw = script
        .text_content()
        .ok_or_else(|| anyhow!("#{CONFIG_SCRIPT_ID} has no content"))?;
    Ok(SiteConfig::from_json_str(&raw)?)
}
