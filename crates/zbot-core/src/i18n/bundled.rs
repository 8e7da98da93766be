//! Translation documents shipped with the site.

use super::{LocaleCode, TranslationMap};
use crate::error::LoadError;

/// Raw JSON shipped for `locale`.
#[must_use]
pub const fn bundled_json(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::Zh => include_str!("../../i18n/zh.json"),
        LocaleCode::Vi => include_str!("../../i18n/vi.json"),
        LocaleCode::En => include_str!("../../i18n/en.json"),
    }
}

/// Decoded mapping shipped for `locale`.
///
/// # Errors
///
/// Returns [`LoadError::Decode`] if the shipped document is malformed.
pub fn bundled(locale: LocaleCode) -> Result<TranslationMap, LoadError> {
    TranslationMap::from_json_str(locale, bundled_json(locale))
}
