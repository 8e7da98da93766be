//! Scripted collaborators for driving an `I18nSession` in tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use tokio::sync::Notify;
use zbot_core::error::{LoadError, PreferenceError};
use zbot_core::i18n::{
    ButtonState, LocaleCode, PageMeta, PageSurface, PreferenceStore, TranslationMap,
    TranslationSource, TranslationStore, bundled, button_states, display_name,
};

use crate::fixtures::FakeDocument;

/// Translation source answering from a fixed script and recording every fetch.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    responses: RefCell<HashMap<LocaleCode, Result<TranslationMap, LoadError>>>,
    gates: RefCell<HashMap<LocaleCode, Rc<Notify>>>,
    calls: RefCell<Vec<LocaleCode>>,
}

impl ScriptedSource {
    /// Source with no scripted responses; every fetch answers HTTP 404.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Source serving the bundled documents for every locale.
    #[must_use]
    pub fn bundled() -> Self {
        let source = Self::new();
        for locale in LocaleCode::all() {
            source.responses.borrow_mut().insert(locale, bundled(locale));
        }
        source
    }

    /// Serve `mapping` for `locale`.
    #[must_use]
    pub fn with_mapping(self, locale: LocaleCode, mapping: TranslationMap) -> Self {
        self.responses.borrow_mut().insert(locale, Ok(mapping));
        self
    }

    /// Answer `locale` with an HTTP error.
    #[must_use]
    pub fn failing(self, locale: LocaleCode, status: u16) -> Self {
        self.set_failing(locale, status);
        self
    }

    /// Answer `locale` with an HTTP error from now on.
    pub fn set_failing(&self, locale: LocaleCode, status: u16) {
        self.responses
            .borrow_mut()
            .insert(locale, Err(LoadError::Status { locale, status }));
    }

    /// Hold the next fetch of `locale` until the returned gate is notified.
    #[must_use]
    pub fn gate(&self, locale: LocaleCode) -> Rc<Notify> {
        let gate = Rc::new(Notify::new());
        self.gates.borrow_mut().insert(locale, Rc::clone(&gate));
        gate
    }

    /// Locales fetched so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<LocaleCode> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl TranslationSource for ScriptedSource {
    async fn fetch(&self, locale: LocaleCode) -> Result<TranslationMap, LoadError> {
        self.calls.borrow_mut().push(locale);
        let gate = self.gates.borrow_mut().remove(&locale);
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.responses
            .borrow()
            .get(&locale)
            .cloned()
            .unwrap_or(Err(LoadError::Status { locale, status: 404 }))
    }
}

/// Preference store kept in memory, recording every write.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    stored: RefCell<Option<String>>,
    writes: RefCell<Vec<LocaleCode>>,
    fail_writes: Cell<bool>,
}

impl MemoryPreferences {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a raw value.
    #[must_use]
    pub fn with_stored(value: &str) -> Self {
        let prefs = Self::new();
        prefs.stored.replace(Some(value.to_string()));
        prefs
    }

    /// Make every write fail.
    pub fn fail_writes(&self) {
        self.fail_writes.set(true);
    }

    /// Currently stored raw value.
    #[must_use]
    pub fn stored(&self) -> Option<String> {
        self.stored.borrow().clone()
    }

    /// Every successful write, in order.
    #[must_use]
    pub fn writes(&self) -> Vec<LocaleCode> {
        self.writes.borrow().clone()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self) -> Result<Option<String>, PreferenceError> {
        Ok(self.stored.borrow().clone())
    }

    fn save(&self, locale: LocaleCode) -> Result<(), PreferenceError> {
        if self.fail_writes.get() {
            return Err(PreferenceError {
                operation: "set",
                detail: "quota exceeded".to_string(),
            });
        }
        self.stored.replace(Some(locale.code().to_string()));
        self.writes.borrow_mut().push(locale);
        Ok(())
    }
}

/// One call made on a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceCall {
    /// `set_busy`.
    Busy(bool),
    /// `apply_translations` with the store on this locale.
    Applied(LocaleCode),
    /// `refresh_switcher`.
    Switcher(LocaleCode),
    /// `set_document_lang`.
    DocumentLang(String),
    /// `set_meta`.
    Meta(PageMeta),
}

/// Page surface that records calls and keeps switcher state like the page would.
#[derive(Debug)]
pub struct RecordingSurface {
    calls: RefCell<Vec<SurfaceCall>>,
    document: FakeDocument,
    button_tags: Vec<&'static str>,
    buttons: RefCell<Vec<ButtonState>>,
    label: RefCell<String>,
    busy: Cell<bool>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::with_document(FakeDocument::new())
    }
}

impl RecordingSurface {
    /// Surface with an empty document and one button per supported locale.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface painting into `document`.
    #[must_use]
    pub fn with_document(document: FakeDocument) -> Self {
        let button_tags: Vec<&'static str> =
            LocaleCode::all().iter().map(|locale| locale.code()).collect();
        let buttons = vec![ButtonState::Inactive; button_tags.len()];
        Self {
            calls: RefCell::new(Vec::new()),
            document,
            button_tags,
            buttons: RefCell::new(buttons),
            label: RefCell::new(String::new()),
            busy: Cell::new(false),
        }
    }

    /// Every call so far.
    #[must_use]
    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.borrow().clone()
    }

    /// Whether the busy treatment is showing.
    #[must_use]
    pub fn busy(&self) -> bool {
        self.busy.get()
    }

    /// The fake document.
    #[must_use]
    pub const fn document(&self) -> &FakeDocument {
        &self.document
    }

    /// Locale codes of the buttons currently marked active.
    #[must_use]
    pub fn active_buttons(&self) -> Vec<&'static str> {
        self.button_tags
            .iter()
            .zip(self.buttons.borrow().iter())
            .filter(|(_, state)| **state == ButtonState::Active)
            .map(|(tag, _)| *tag)
            .collect()
    }

    /// Text of the single-label switcher.
    #[must_use]
    pub fn label(&self) -> String {
        self.label.borrow().clone()
    }

    fn record(&self, call: SurfaceCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl PageSurface for RecordingSurface {
    fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
        self.record(SurfaceCall::Busy(busy));
    }

    fn apply_translations(&self, store: &TranslationStore) {
        self.document.apply(store);
        self.record(SurfaceCall::Applied(store.locale()));
    }

    fn refresh_switcher(&self, locale: LocaleCode) {
        self.label.replace(display_name(locale.code()).to_string());
        self.buttons
            .replace(button_states(self.button_tags.iter().copied(), locale));
        self.record(SurfaceCall::Switcher(locale));
    }

    fn set_document_lang(&self, lang: &str) {
        self.record(SurfaceCall::DocumentLang(lang.to_string()));
    }

    fn set_meta(&self, meta: &PageMeta) {
        self.record(SurfaceCall::Meta(meta.clone()));
    }
}
