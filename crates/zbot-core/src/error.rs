//! Error types shared across the core crate.
//!
//! None of these surface to the page as a thrown fault; the session turns
//! each one into a log line and a degraded-but-responsive view.

use thiserror::Error;

use crate::i18n::LocaleCode;

/// A locale code outside the supported set was requested.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale '{code}'")]
pub struct LocaleError {
    /// The raw code as supplied by the caller.
    pub code: String,
}

/// Failure fetching or decoding a translation mapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The resource answered with a non-success status.
    #[error("translation resource for '{locale}' returned HTTP {status}")]
    Status {
        /// Locale whose resource was requested.
        locale: LocaleCode,
        /// HTTP status code returned.
        status: u16,
    },
    /// The request never produced a response.
    #[error("translation resource for '{locale}' could not be fetched: {detail}")]
    Network {
        /// Locale whose resource was requested.
        locale: LocaleCode,
        /// Transport error detail.
        detail: String,
    },
    /// The body was not a JSON object.
    #[error("translation resource for '{locale}' is malformed: {detail}")]
    Decode {
        /// Locale whose resource was requested.
        locale: LocaleCode,
        /// Parser error detail.
        detail: String,
    },
}

impl LoadError {
    /// Locale whose load failed.
    #[must_use]
    pub const fn locale(&self) -> LocaleCode {
        match self {
            Self::Status { locale, .. }
            | Self::Network { locale, .. }
            | Self::Decode { locale, .. } => *locale,
        }
    }
}

/// Failure persisting or reading the stored locale preference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("preference storage failed during {operation}: {detail}")]
pub struct PreferenceError {
    /// Storage operation that failed (`get`/`set`).
    pub operation: &'static str,
    /// Backend error detail.
    pub detail: String,
}

/// Structured errors emitted while validating the site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Field contained an invalid value.
    #[error("invalid value for '{field}': {message}")]
    InvalidField {
        /// Field that failed validation.
        field: &'static str,
        /// Human-readable error description.
        message: String,
    },
    /// The configuration document could not be parsed.
    #[error("configuration document is malformed: {detail}")]
    Malformed {
        /// Parser error detail.
        detail: String,
    },
}
