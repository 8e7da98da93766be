//! Locale preference in `localStorage` and the browser's reported locale.
//!
//! The value is stored as the bare code (not JSON-encoded) so pages that
//! wrote it with `localStorage.setItem` keep working.

use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use zbot_core::error::PreferenceError;
use zbot_core::i18n::{LocaleCode, PreferenceStore};

pub(crate) struct LocalStoragePreferences {
    key: String,
}

impl LocalStoragePreferences {
    pub(crate) fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }
}

impl PreferenceStore for LocalStoragePreferences {
    fn load(&self) -> Result<Option<String>, PreferenceError> {
        LocalStorage::raw()
            .get_item(&self.key)
            .map_err(|err| storage_error("get", &err))
    }

    fn save(&self, locale: LocaleCode) -> Result<(), PreferenceError> {
        LocalStorage::raw()
            .set_item(&self.key, locale.code())
            .map_err(|err| storage_error("set", &err))
    }
}

pub(crate) fn browser_language() -> Option<String> {
    window().navigator().language()
}

fn storage_error(operation: &'static str, err: &wasm_bindgen::JsValue) -> PreferenceError {
    PreferenceError {
        operation,
        detail: err
            .as_string()
            .unwrap_or_else(|| format!("{err:?}")),
    }
}
