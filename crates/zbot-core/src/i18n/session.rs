//! Page-level translation session: initial load and on-demand locale switches.
//!
//! # Design
//! - The session is constructed explicitly and owns its store; nothing global.
//! - Each `init`/`switch_lang` call takes a new generation. A load that
//!   resolves after a newer call started is discarded untouched.
//! - A failed load keeps the previous mapping and locale; only the busy
//!   state is cleared.
//! - A fallback load activates the default locale but never persists it.

use std::cell::{Cell, Ref, RefCell};

use tracing::{debug, error, info, warn};

use super::loader::{TranslationSource, load_with_fallback};
use super::locale::resolve_initial;
use super::{LangInfo, LocaleCode, TranslationStore};
use crate::error::PreferenceError;

/// Persisted locale preference (one key in page storage).
pub trait PreferenceStore {
    /// Read the stored code, if any. The value is not validated.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError`] when the backend cannot be read.
    fn load(&self) -> Result<Option<String>, PreferenceError>;

    /// Persist `locale` as the preferred code.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError`] when the backend rejects the write.
    fn save(&self, locale: LocaleCode) -> Result<(), PreferenceError>;
}

/// Document metadata resolved from the active mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageMeta {
    /// `meta.title`, when it resolves.
    pub title: Option<String>,
    /// `meta.description`, when it resolves.
    pub description: Option<String>,
}

impl PageMeta {
    /// Resolve both entries from `store`.
    #[must_use]
    pub fn from_store(store: &TranslationStore) -> Self {
        Self {
            title: store.resolve("meta.title"),
            description: store.resolve("meta.description"),
        }
    }
}

/// Everything the session paints onto the page.
pub trait PageSurface {
    /// Toggle the loading treatment.
    fn set_busy(&self, busy: bool);
    /// Repaint every translatable element from `store`.
    fn apply_translations(&self, store: &TranslationStore);
    /// Reflect `locale` in the switcher surfaces.
    fn refresh_switcher(&self, locale: LocaleCode);
    /// Set the root element's `lang` attribute.
    fn set_document_lang(&self, lang: &str);
    /// Update the document title and description meta tag.
    fn set_meta(&self, meta: &PageMeta);
}

/// Result of an `init` or `switch_lang` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// Code was outside the supported set; nothing changed.
    Unsupported,
    /// Locale already active or already being loaded; nothing fetched.
    Unchanged,
    /// Requested locale loaded and is now active.
    Switched(LocaleCode),
    /// Requested locale failed; the default locale loaded instead.
    FellBack {
        /// Locale the caller asked for.
        requested: LocaleCode,
        /// Locale now active.
        active: LocaleCode,
    },
    /// Neither the requested nor the default locale loaded.
    Failed,
    /// A newer call started before this one finished; its result was dropped.
    Superseded,
}

/// Owns the translation store and drives loads onto a page surface.
pub struct I18nSession<S, P, U> {
    source: S,
    preferences: P,
    surface: U,
    default_locale: LocaleCode,
    store: RefCell<TranslationStore>,
    generation: Cell<u64>,
    in_flight: Cell<Option<LocaleCode>>,
}

impl<S, P, U> I18nSession<S, P, U>
where
    S: TranslationSource,
    P: PreferenceStore,
    U: PageSurface,
{
    /// Build a session with an empty store on `default_locale`.
    pub fn new(source: S, preferences: P, surface: U, default_locale: LocaleCode) -> Self {
        Self {
            source,
            preferences,
            surface,
            default_locale,
            store: RefCell::new(TranslationStore::new(default_locale)),
            generation: Cell::new(0),
            in_flight: Cell::new(None),
        }
    }

    /// Active locale.
    #[must_use]
    pub fn locale(&self) -> LocaleCode {
        self.store.borrow().locale()
    }

    /// Borrow the store. Do not hold the guard across an await.
    #[must_use]
    pub fn store(&self) -> Ref<'_, TranslationStore> {
        self.store.borrow()
    }

    /// Translate `path`, falling back to the path itself.
    #[must_use]
    pub fn t(&self, path: &str) -> String {
        self.store.borrow().t(path)
    }

    /// Summary of the active language.
    #[must_use]
    pub fn lang_info(&self) -> LangInfo {
        self.store.borrow().lang_info()
    }

    /// Page surface this session paints onto.
    #[must_use]
    pub const fn surface(&self) -> &U {
        &self.surface
    }

    /// Preference backend.
    #[must_use]
    pub const fn preferences(&self) -> &P {
        &self.preferences
    }

    /// Translation source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Locale targeted by the newest unfinished call, if any.
    #[must_use]
    pub fn pending(&self) -> Option<LocaleCode> {
        self.in_flight.get()
    }

    /// Resolve the startup locale, load it and paint the page.
    ///
    /// `browser_lang` is the runtime's reported locale tag. The preference is
    /// read but never written here.
    pub async fn init(&self, browser_lang: Option<&str>) -> SwitchOutcome {
        let stored = self.preferences.load().unwrap_or_else(|err| {
            error!(error = %err, "failed to read locale preference");
            None
        });
        let locale = resolve_initial(stored.as_deref(), browser_lang, self.default_locale);
        let generation = self.begin(locale);

        let result = load_with_fallback(&self.source, locale, self.default_locale).await;
        if !self.is_current(generation) {
            debug!(locale = %locale, "initial load superseded");
            return SwitchOutcome::Superseded;
        }
        self.in_flight.set(None);

        match result {
            Ok(loaded) => {
                let outcome = if loaded.fell_back() {
                    SwitchOutcome::FellBack {
                        requested: locale,
                        active: loaded.locale,
                    }
                } else {
                    SwitchOutcome::Switched(loaded.locale)
                };
                self.store.borrow_mut().commit(loaded.locale, loaded.mapping);
                self.paint();
                info!(locale = %self.locale(), "translations initialized");
                outcome
            }
            Err(_) => {
                self.surface.refresh_switcher(self.locale());
                error!(locale = %locale, "no translations available; showing authored text");
                SwitchOutcome::Failed
            }
        }
    }

    /// Switch the page to `requested`.
    ///
    /// Unsupported codes and the active locale are no-ops once a mapping is
    /// loaded. Choosing the active locale while another switch is loading
    /// cancels that switch. Before anything is loaded, the active locale is
    /// fetched like any other and supersedes a pending `init`.
    pub async fn switch_lang(&self, requested: &str) -> SwitchOutcome {
        let Ok(locale) = requested.parse::<LocaleCode>() else {
            warn!(locale = requested, "unsupported locale requested");
            return SwitchOutcome::Unsupported;
        };

        if self.in_flight.get() == Some(locale) {
            return SwitchOutcome::Unchanged;
        }
        // Before the first commit the active locale has no mapping, so it must load.
        if locale == self.locale() && self.store.borrow().is_loaded() {
            if self.in_flight.get().is_some() {
                self.generation.set(self.generation.get() + 1);
                self.in_flight.set(None);
                self.surface.set_busy(false);
                debug!(locale = %locale, "pending switch cancelled");
            }
            return SwitchOutcome::Unchanged;
        }

        let generation = self.begin(locale);
        self.surface.set_busy(true);

        let result = load_with_fallback(&self.source, locale, self.default_locale).await;
        if !self.is_current(generation) {
            debug!(locale = %locale, "switch superseded by a newer request");
            return SwitchOutcome::Superseded;
        }
        self.in_flight.set(None);

        let outcome = match result {
            Ok(loaded) => {
                let active = loaded.locale;
                let fell_back = loaded.fell_back();
                self.store.borrow_mut().commit(active, loaded.mapping);
                if !fell_back {
                    if let Err(err) = self.preferences.save(active) {
                        error!(locale = %active, error = %err, "failed to persist locale preference");
                    }
                }
                self.paint();
                if fell_back {
                    warn!(requested = %locale, active = %active, "switched to fallback locale");
                    SwitchOutcome::FellBack {
                        requested: locale,
                        active,
                    }
                } else {
                    info!(locale = %active, "switched locale");
                    SwitchOutcome::Switched(active)
                }
            }
            Err(_) => {
                error!(
                    requested = %locale,
                    active = %self.locale(),
                    "locale switch failed; keeping previous translations"
                );
                SwitchOutcome::Failed
            }
        };
        self.surface.set_busy(false);
        outcome
    }

    fn begin(&self, locale: LocaleCode) -> u64 {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.in_flight.set(Some(locale));
        generation
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }

    fn paint(&self) {
        let store = self.store.borrow();
        self.surface.apply_translations(&store);
        self.surface.refresh_switcher(store.locale());
        self.surface.set_document_lang(&store.document_lang());
        self.surface.set_meta(&PageMeta::from_store(&store));
    }
}
