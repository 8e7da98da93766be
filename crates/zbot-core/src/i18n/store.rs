//! Active locale plus its loaded mapping.

use tracing::warn;

use super::{LocaleCode, TranslationMap};

const DEFAULT_CURRENCY: &str = "CNY";
const DEFAULT_CURRENCY_SYMBOL: &str = "¥";

/// Summary of the active language, read from top-level mapping keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LangInfo {
    /// Active locale code.
    pub code: LocaleCode,
    /// `langName`, or the code when absent.
    pub name: String,
    /// `currency`, or `CNY` when absent.
    pub currency: String,
    /// `currencySymbol`, or `¥` when absent.
    pub symbol: String,
}

/// Holds the active locale and its mapping. Replaced in full on commit.
#[derive(Clone, Debug, PartialEq)]
pub struct TranslationStore {
    locale: LocaleCode,
    mapping: TranslationMap,
    loaded: bool,
}

impl TranslationStore {
    /// Store for `locale` with nothing loaded yet.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        Self {
            locale,
            mapping: TranslationMap::empty(),
            loaded: false,
        }
    }

    /// Active locale.
    #[must_use]
    pub const fn locale(&self) -> LocaleCode {
        self.locale
    }

    /// Active mapping.
    #[must_use]
    pub const fn mapping(&self) -> &TranslationMap {
        &self.mapping
    }

    /// Whether any mapping has been committed yet.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Swap in a freshly loaded mapping and mark its locale active.
    pub fn commit(&mut self, locale: LocaleCode, mapping: TranslationMap) {
        self.locale = locale;
        self.mapping = mapping;
        self.loaded = true;
    }

    /// Look up `path`, returning the path itself when it does not resolve.
    #[must_use]
    pub fn t(&self, path: &str) -> String {
        self.resolve(path).unwrap_or_else(|| path.to_string())
    }

    /// Look up `path`, logging a diagnostic on a miss.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<String> {
        let resolved = self.mapping.resolve(path).map(|text| text.into_owned());
        if resolved.is_none() {
            warn!(key = path, locale = %self.locale, "missing translation");
        }
        resolved
    }

    /// Value for the document `lang` attribute.
    #[must_use]
    pub fn document_lang(&self) -> String {
        self.mapping
            .top_level_str("lang")
            .map_or_else(|| self.locale.code().to_string(), ToString::to_string)
    }

    /// Language summary with currency defaults applied.
    #[must_use]
    pub fn lang_info(&self) -> LangInfo {
        let read = |key: &str, fallback: &str| {
            self.mapping
                .top_level_str(key)
                .unwrap_or(fallback)
                .to_string()
        };
        LangInfo {
            code: self.locale,
            name: read("langName", self.locale.code()),
            currency: read("currency", DEFAULT_CURRENCY),
            symbol: read("currencySymbol", DEFAULT_CURRENCY_SYMBOL),
        }
    }
}
