//! Flat translation bundles.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DescriptorError, DescriptorResult};

/// Translation messages for one locale, keyed by dot-separated message key
/// (`menu.calendar`). Keys are relative to the module namespace; the host
/// prefixes them with the module id when merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleBundle {
    messages: BTreeMap<String, String>,
}

impl LocaleBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            messages: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Builds a bundle from a JSON document, flattening nested objects into
    /// dot-joined keys. Numbers and booleans are stored as their text;
    /// arrays and nulls are rejected.
    pub fn from_json_str(locale: &str, json: &str) -> DescriptorResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(locale, &value)
    }

    pub fn from_json_value(locale: &str, value: &Value) -> DescriptorResult<Self> {
        let Value::Object(_) = value else {
            return Err(invalid(locale, "top-level value must be an object"));
        };
        let mut messages = BTreeMap::new();
        flatten(locale, "", value, &mut messages)?;
        Ok(Self { messages })
    }

    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(key.into(), message.into());
    }

    pub fn with(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.insert(key, message);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.messages.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn flatten(
    locale: &str,
    prefix: &str,
    value: &Value,
    out: &mut BTreeMap<String, String>,
) -> DescriptorResult<()> {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                if key.is_empty() || key.contains('.') {
                    return Err(invalid(locale, &format!("illegal message key '{key}'")));
                }
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(locale, &path, nested, out)?;
            }
        }
        Value::String(text) => {
            out.insert(prefix.to_string(), text.clone());
        }
        Value::Number(n) => {
            out.insert(prefix.to_string(), n.to_string());
        }
        Value::Bool(b) => {
            out.insert(prefix.to_string(), b.to_string());
        }
        Value::Array(_) | Value::Null => {
            return Err(invalid(locale, &format!("'{prefix}' must be a string or object")));
        }
    }
    Ok(())
}

fn invalid(locale: &str, reason: &str) -> DescriptorError {
    DescriptorError::InvalidLocale {
        locale: locale.to_string(),
        reason: reason.to_string(),
    }
}
