//! Fetching mappings with a single fallback to the default locale.

use async_trait::async_trait;
use tracing::{error, warn};

use super::{LocaleCode, TranslationMap};
use crate::error::LoadError;

/// Where translation mappings come from (HTTP on wasm, fixtures in tests).
#[async_trait(?Send)]
pub trait TranslationSource {
    /// Fetch and decode the mapping for `locale`.
    async fn fetch(&self, locale: LocaleCode) -> Result<TranslationMap, LoadError>;
}

/// A mapping that loaded, possibly for the fallback locale instead of the requested one.
#[derive(Clone, Debug, PartialEq)]
pub struct Loaded {
    /// Locale the caller asked for.
    pub requested: LocaleCode,
    /// Locale whose mapping was actually loaded.
    pub locale: LocaleCode,
    /// The mapping itself.
    pub mapping: TranslationMap,
}

impl Loaded {
    /// Whether the default locale stood in for the requested one.
    #[must_use]
    pub fn fell_back(&self) -> bool {
        self.requested != self.locale
    }
}

/// Load `locale`, retrying once against `default` when it fails.
///
/// A failure on `default` itself is not retried.
///
/// # Errors
///
/// Returns the last [`LoadError`] when neither attempt succeeds.
pub async fn load_with_fallback<S>(
    source: &S,
    locale: LocaleCode,
    default: LocaleCode,
) -> Result<Loaded, LoadError>
where
    S: TranslationSource + ?Sized,
{
    match source.fetch(locale).await {
        Ok(mapping) => Ok(Loaded {
            requested: locale,
            locale,
            mapping,
        }),
        Err(err) => {
            error!(locale = %locale, error = %err, "failed to load translations");
            if locale == default {
                return Err(err);
            }
            warn!(locale = %locale, fallback = %default, "falling back to default locale");
            match source.fetch(default).await {
                Ok(mapping) => Ok(Loaded {
                    requested: locale,
                    locale: default,
                    mapping,
                }),
                Err(fallback_err) => {
                    error!(locale = %default, error = %fallback_err, "failed to load translations");
                    Err(fallback_err)
                }
            }
        }
    }
}
