//! Nested key/value translation documents.

use std::borrow::Cow;

use serde_json::{Map, Value};

use super::LocaleCode;
use crate::error::LoadError;

/// One locale's translation tree, replaced wholesale on every switch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TranslationMap {
    root: Map<String, Value>,
}

impl TranslationMap {
    /// Mapping with no entries; every lookup misses.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap an already-parsed JSON object.
    #[must_use]
    pub const fn from_object(root: Map<String, Value>) -> Self {
        Self { root }
    }

    /// Decode a response body for `locale`. The root must be a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Decode`] when the body is not valid JSON or its
    /// root is not an object.
    pub fn from_json_str(locale: LocaleCode, body: &str) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_str(body).map_err(|err| LoadError::Decode {
            locale,
            detail: err.to_string(),
        })?;
        Self::from_value(locale, value)
    }

    /// Accept a parsed JSON value for `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Decode`] when the root is not an object.
    pub fn from_value(locale: LocaleCode, value: Value) -> Result<Self, LoadError> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(LoadError::Decode {
                locale,
                detail: format!("expected an object at the root, found {}", kind_of(&other)),
            }),
        }
    }

    /// Whether the mapping has no top-level entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Walk a dotted path. Fails on a missing segment or on descending into a
    /// non-object.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut node = self.root.get(first)?;
        for segment in segments {
            node = node.as_object()?.get(segment)?;
        }
        Some(node)
    }

    /// Render the leaf at `path` as text. Strings render verbatim, numbers and
    /// booleans via their JSON text; objects, arrays and null do not render.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<Cow<'_, str>> {
        match self.lookup(path)? {
            Value::String(text) => Some(Cow::Borrowed(text.as_str())),
            Value::Number(number) => Some(Cow::Owned(number.to_string())),
            Value::Bool(flag) => Some(Cow::Owned(flag.to_string())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Top-level string entry, used for document metadata keys like `lang`.
    #[must_use]
    pub fn top_level_str(&self, key: &str) -> Option<&str> {
        self.root.get(key).and_then(Value::as_str)
    }

    /// Every dotted path that ends on a renderable leaf, sorted.
    #[must_use]
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_paths(&self.root, "", &mut paths);
        paths.sort();
        paths
    }
}

fn collect_paths(node: &Map<String, Value>, prefix: &str, out: &mut Vec<String>) {
    for (key, value) in node {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(child) => collect_paths(child, &path, out),
            Value::String(_) | Value::Number(_) | Value::Bool(_) => out.push(path),
            Value::Null | Value::Array(_) => {}
        }
    }
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
