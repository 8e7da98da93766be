//! Supported locale codes and initial-locale resolution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LocaleError;

/// Supported locale codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    /// Chinese (Simplified).
    Zh,
    /// Vietnamese.
    Vi,
    /// English.
    En,
}

/// Locale used when neither a stored preference nor the browser locale match.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::Zh;

impl LocaleCode {
    /// All supported locales in display order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Zh, Self::Vi, Self::En]
    }

    /// Two-letter code used in resource paths, storage and `lang` attributes.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::Vi => "vi",
            Self::En => "en",
        }
    }

    /// Human-friendly label for switcher surfaces.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Zh => "中文",
            Self::Vi => "Tiếng Việt",
            Self::En => "English",
        }
    }

    /// Map an arbitrary language tag to a supported locale using its primary subtag.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.trim().to_ascii_lowercase();
        let base = lowered.split(['-', '_']).next().unwrap_or_default();
        Self::all()
            .iter()
            .copied()
            .find(|locale| locale.code() == base)
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LocaleCode {
    type Err = LocaleError;

    /// Strict parse: only an exact supported code is accepted.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|locale| locale.code() == value)
            .ok_or_else(|| LocaleError {
                code: value.to_string(),
            })
    }
}

/// Pick the startup locale.
///
/// Resolution order (highest to lowest priority):
/// 1. Stored preference, when it is an exact supported code
/// 2. Primary subtag of the browser locale, when supported
/// 3. `default`
#[must_use]
pub fn resolve_initial(
    stored: Option<&str>,
    browser: Option<&str>,
    default: LocaleCode,
) -> LocaleCode {
    if let Some(locale) = stored.and_then(|value| value.parse::<LocaleCode>().ok()) {
        return locale;
    }
    if let Some(locale) = browser.and_then(LocaleCode::from_lang_tag) {
        return locale;
    }
    default
}
