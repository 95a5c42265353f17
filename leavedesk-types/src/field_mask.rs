//! Field masks for partial updates.
//!
//! An update carries a partial record plus the list of field names the
//! server is allowed to touch. Fields outside the mask are left alone
//! server-side even when present in the payload. The mask is joined with
//! `,` for transport.

use serde::Serialize;

/// Ordered, duplicate-free list of field names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMask {
    fields: Vec<String>,
}

impl FieldMask {
    /// Creates an empty mask.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field, ignoring empty names and repeats.
    pub fn push(&mut self, field: impl Into<String>) {
        let field = field.into();
        if field.is_empty() || self.contains(&field) {
            return;
        }
        self.fields.push(field);
    }

    /// Builder-style variant of [`FieldMask::push`].
    #[must_use]
    pub fn with(mut self, field: impl Into<String>) -> Self {
        self.push(field);
        self
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    /// Wire form: entries joined with a single comma.
    #[must_use]
    pub fn join(&self) -> String {
        self.fields.join(",")
    }

    /// Mask entries that are absent (or null) in the serialized partial
    /// record.
    ///
    /// This is informational only; the update contract is enforced by the
    /// server, never locally.
    pub fn missing_from<T: Serialize>(&self, partial: &T) -> crate::Result<Vec<String>> {
        let value = serde_json::to_value(partial)?;
        let object = value.as_object();
        Ok(self
            .fields
            .iter()
            .filter(|field| {
                object
                    .and_then(|o| o.get(field.as_str()))
                    .is_none_or(serde_json::Value::is_null)
            })
            .cloned()
            .collect())
    }
}

impl<S: Into<String>> FromIterator<S> for FieldMask {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut mask = FieldMask::new();
        for field in iter {
            mask.push(field);
        }
        mask
    }
}

impl From<&[&str]> for FieldMask {
    fn from(fields: &[&str]) -> Self {
        fields.iter().copied().collect()
    }
}

impl<const N: usize> From<[&str; N]> for FieldMask {
    fn from(fields: [&str; N]) -> Self {
        fields.into_iter().collect()
    }
}

impl std::fmt::Display for FieldMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.join())
    }
}
