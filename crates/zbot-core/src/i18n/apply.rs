//! Registry of translatable elements and the pass that paints them.
//!
//! # Design
//! - Elements are collected once into (handle, marker, key) bindings.
//! - Each locale change revisits the registry instead of re-querying the page.
//! - A binding is only written when its key resolves; misses leave the
//!   authored markup untouched.

use super::TranslationStore;

/// Which part of an element a marker attribute targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// Inner content (`data-i18n`).
    Content,
    /// `placeholder` attribute (`data-i18n-placeholder`).
    Placeholder,
    /// `title` attribute (`data-i18n-title`).
    Title,
}

impl MarkerKind {
    /// All marker kinds.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Content, Self::Placeholder, Self::Title]
    }

    /// Attribute that opts an element into this kind of translation.
    #[must_use]
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::Content => "data-i18n",
            Self::Placeholder => "data-i18n-placeholder",
            Self::Title => "data-i18n-title",
        }
    }
}

/// One element bound to one translation key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding<H> {
    /// Opaque element handle.
    pub handle: H,
    /// What the key fills in.
    pub kind: MarkerKind,
    /// Dotted key path.
    pub key: String,
}

/// Writes resolved text into elements.
pub trait TranslationTarget<H> {
    /// Replace the targeted part of `handle` with `text`.
    fn write(&self, handle: &H, kind: MarkerKind, text: &str);

    /// Called once after every pass (icon library re-scan on the page).
    fn after_apply(&self) {}
}

/// Counts from one apply pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Bindings whose key resolved and were written.
    pub applied: usize,
    /// Bindings whose key did not resolve and were left alone.
    pub missing: usize,
}

/// Collected bindings, revisited on every locale change.
#[derive(Clone, Debug)]
pub struct TranslationRegistry<H> {
    bindings: Vec<Binding<H>>,
}

impl<H> Default for TranslationRegistry<H> {
    fn default() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }
}

impl<H> TranslationRegistry<H> {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handle` to `key`. Blank keys are ignored.
    pub fn register(&mut self, handle: H, kind: MarkerKind, key: impl Into<String>) {
        let key = key.into();
        let key = key.trim();
        if key.is_empty() {
            return;
        }
        self.bindings.push(Binding {
            handle,
            kind,
            key: key.to_string(),
        });
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Registered bindings in registration order.
    #[must_use]
    pub fn bindings(&self) -> &[Binding<H>] {
        &self.bindings
    }

    /// Paint every binding whose key resolves in `store`.
    pub fn apply<T>(&self, store: &TranslationStore, target: &T) -> ApplyReport
    where
        T: TranslationTarget<H> + ?Sized,
    {
        let mut report = ApplyReport::default();
        for binding in &self.bindings {
            if let Some(text) = store.resolve(&binding.key) {
                target.write(&binding.handle, binding.kind, &text);
                report.applied += 1;
            } else {
                report.missing += 1;
            }
        }
        target.after_apply();
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_attributes_match_markup_contract() {
        assert_eq!(MarkerKind::Content.attribute(), "data-i18n");
        assert_eq!(MarkerKind::Placeholder.attribute(), "data-i18n-placeholder");
        assert_eq!(MarkerKind::Title.attribute(), "data-i18n-title");
    }

    #[test]
    fn blank_keys_are_not_registered() {
        let mut registry = TranslationRegistry::new();
        registry.register(1_u32, MarkerKind::Content, "  ");
        registry.register(2_u32, MarkerKind::Title, " nav.home ");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.bindings()[0].key, "nav.home");
    }
}
