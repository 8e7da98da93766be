//! In-memory page elements and mapping builders.

use std::cell::{Cell, RefCell};

use serde_json::Value;
use zbot_core::i18n::{
    ApplyReport, LocaleCode, MarkerKind, TranslationMap, TranslationRegistry, TranslationStore,
    TranslationTarget,
};

/// Build a mapping from a `json!` literal. Non-object roots give an empty mapping.
#[must_use]
pub fn mapping(locale: LocaleCode, value: Value) -> TranslationMap {
    TranslationMap::from_value(locale, value).unwrap_or_default()
}

/// One fake element with the three translatable parts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FakeElement {
    /// Inner content.
    pub content: String,
    /// `placeholder` attribute.
    pub placeholder: Option<String>,
    /// `title` attribute.
    pub title: Option<String>,
}

/// A page of fake elements bound through a real [`TranslationRegistry`].
#[derive(Debug, Default)]
pub struct FakeDocument {
    registry: TranslationRegistry<usize>,
    elements: RefCell<Vec<FakeElement>>,
    icon_scans: Cell<usize>,
}

impl FakeDocument {
    /// Empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element with authored `content`, bound to `key` for `kind`. Returns its id.
    pub fn element(&mut self, kind: MarkerKind, key: &str, content: &str) -> usize {
        let mut elements = self.elements.borrow_mut();
        let id = elements.len();
        elements.push(FakeElement {
            content: content.to_string(),
            ..FakeElement::default()
        });
        drop(elements);
        self.registry.register(id, kind, key);
        id
    }

    /// Snapshot of element `id`.
    ///
    /// # Panics
    ///
    /// Panics when `id` was not returned by [`FakeDocument::element`].
    #[must_use]
    pub fn get(&self, id: usize) -> FakeElement {
        self.elements.borrow()[id].clone()
    }

    /// Number of icon re-scans requested.
    #[must_use]
    pub fn icon_scans(&self) -> usize {
        self.icon_scans.get()
    }

    /// Paint the document from `store`.
    pub fn apply(&self, store: &TranslationStore) -> ApplyReport {
        self.registry.apply(store, self)
    }
}

impl TranslationTarget<usize> for FakeDocument {
    fn write(&self, handle: &usize, kind: MarkerKind, text: &str) {
        let mut elements = self.elements.borrow_mut();
        let Some(element) = elements.get_mut(*handle) else {
            return;
        };
        match kind {
            MarkerKind::Content => element.content = text.to_string(),
            MarkerKind::Placeholder => element.placeholder = Some(text.to_string()),
            MarkerKind::Title => element.title = Some(text.to_string()),
        }
    }

    fn after_apply(&self) {
        self.icon_scans.set(self.icon_scans.get() + 1);
    }
}
