//! Site configuration, optionally supplied by the page as inline JSON.
//!
//! # Design
//! - Every field has a default so an absent or partial document still works.
//! - Validation collects the first offending field into a [`ConfigError`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};

/// Placeholder substituted with the locale code in resource paths.
pub const LANG_PLACEHOLDER: &str = "{lang}";

const MAX_CLOSE_DELAY_MS: u64 = 2_000;
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Runtime settings for translations and navigation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Locale used when nothing else matches, and the load fallback.
    pub default_locale: LocaleCode,
    /// Storage key holding the preferred locale.
    pub storage_key: String,
    /// Resource path with a `{lang}` placeholder.
    pub resource_template: String,
    /// Dropdown close debounce in milliseconds.
    pub close_delay_ms: u64,
    /// Body opacity while a switch is loading.
    pub busy_opacity: f32,
    /// Minimum log level.
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE,
            storage_key: "zbot-lang".to_string(),
            resource_template: "js/i18n/{lang}.json".to_string(),
            close_delay_ms: 150,
            busy_opacity: 0.7,
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] for unparsable input and
    /// [`ConfigError::InvalidField`] for values that fail validation.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|err| ConfigError::Malformed {
            detail: err.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] naming the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(invalid("storage_key", "must not be empty"));
        }
        if !self.resource_template.contains(LANG_PLACEHOLDER) {
            return Err(invalid(
                "resource_template",
                format!("must contain {LANG_PLACEHOLDER}"),
            ));
        }
        if !(1..=MAX_CLOSE_DELAY_MS).contains(&self.close_delay_ms) {
            return Err(invalid(
                "close_delay_ms",
                format!("must be between 1 and {MAX_CLOSE_DELAY_MS}"),
            ));
        }
        if !(0.0..=1.0).contains(&self.busy_opacity) {
            return Err(invalid("busy_opacity", "must be between 0.0 and 1.0"));
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(invalid(
                "log_level",
                format!("must be one of {}", LOG_LEVELS.join(", ")),
            ));
        }
        Ok(())
    }

    /// Resource path for `locale`.
    #[must_use]
    pub fn resource_path(&self, locale: LocaleCode) -> String {
        self.resource_template
            .replace(LANG_PLACEHOLDER, locale.code())
    }

    /// Dropdown close debounce.
    #[must_use]
    pub const fn close_delay(&self) -> Duration {
        Duration::from_millis(self.close_delay_ms)
    }
}

fn invalid(field: &'static str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidField {
        field,
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SiteConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.resource_path(LocaleCode::Vi), "js/i18n/vi.json");
        assert_eq!(config.close_delay(), Duration::from_millis(150));
    }

    #[test]
    fn partial_documents_keep_defaults() -> Result<(), ConfigError> {
        let config = SiteConfig::from_json_str(r#"{ "default_locale": "en" }"#)?;
        assert_eq!(config.default_locale, LocaleCode::En);
        assert_eq!(config.storage_key, "zbot-lang");
        Ok(())
    }

    #[test]
    fn template_without_placeholder_is_rejected() {
        let err = SiteConfig::from_json_str(r#"{ "resource_template": "i18n/all.json" }"#);
        assert!(matches!(
            err,
            Err(ConfigError::InvalidField {
                field: "resource_template",
                ..
            })
        ));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let delay = SiteConfig::from_json_str(r#"{ "close_delay_ms": 0 }"#);
        assert!(matches!(
            delay,
            Err(ConfigError::InvalidField { field: "close_delay_ms", .. })
        ));
        let opacity = SiteConfig::from_json_str(r#"{ "busy_opacity": 1.5 }"#);
        assert!(matches!(
            opacity,
            Err(ConfigError::InvalidField { field: "busy_opacity", .. })
        ));
        let level = SiteConfig::from_json_str(r#"{ "log_level": "loud" }"#);
        assert!(matches!(level, Err(ConfigError::InvalidField { field: "log_level", .. })));
    }

    #[test]
    fn unknown_fields_and_bad_locales_are_malformed() {
        assert!(matches!(
            SiteConfig::from_json_str(r#"{ "colour": "red" }"#),
            Err(ConfigError::Malformed { .. })
        ));
        assert!(matches!(
            SiteConfig::from_json_str(r#"{ "default_locale": "fr" }"#),
            Err(ConfigError::Malformed { .. })
        ));
    }
}
