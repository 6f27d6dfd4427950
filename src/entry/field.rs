use serde_json::Value;

use super::{Entry, Visibility};

/// Key used by [`hint`].
pub const HINT_KEY: &str = "hint";

/// Replaces the hidden part of a [`redacted`] value.
pub const REDACTION_PLACEHOLDER: &str = "****";

/// Scalar leaf entry. Same-key fields merge by replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    key: String,
    value: Value,
    visibility: Visibility,
    received: bool,
}

impl Field {
    /// Creates a public field.
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { key: key.into(), value: value.into(), visibility: Visibility::Public, received: false }
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub(crate) fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    /// Keeps this field out of DTOs.
    #[must_use]
    pub fn restricted(self) -> Self {
        self.with_visibility(Visibility::Restrict)
    }

    /// Marks a field rebuilt from another process's DTO.
    pub(crate) fn received(mut self) -> Self {
        self.received = true;
        self
    }

    /// Whether this field was rebuilt from a received DTO.
    #[inline]
    pub fn is_received(&self) -> bool {
        self.received
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    #[inline]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }
}

/// Public field entry.
#[inline]
pub fn field(key: impl Into<String>, value: impl Into<Value>) -> Entry {
    Field::new(key, value).into()
}

/// Field entry that never leaves the process.
#[inline]
pub fn restricted_field(key: impl Into<String>, value: impl Into<Value>) -> Entry {
    Field::new(key, value).restricted().into()
}

/// Public, caller-facing advice on how to fix the failure.
#[inline]
pub fn hint(message: impl Into<String>) -> Entry {
    let message: String = message.into();
    field(HINT_KEY, message)
}

/// Field showing roughly a third of `value`, split between its ends.
///
/// Values shorter than five characters are replaced entirely.
///
/// ```
/// use error_kind::entry::redacted;
///
/// let entry = redacted("token", "abcdefghijkl");
/// assert_eq!(entry.public_value().unwrap(), "ab****kl");
/// ```
pub fn redacted(key: impl Into<String>, value: &str) -> Entry {
    let chars: Vec<char> = value.chars().collect();
    let length = chars.len();
    if length < 5 {
        return field(key, REDACTION_PLACEHOLDER);
    }

    let visible = (length / 6).max(1);
    let mut masked = String::with_capacity(visible * 2 + REDACTION_PLACEHOLDER.len());
    masked.extend(&chars[..visible]);
    masked.push_str(REDACTION_PLACEHOLDER);
    masked.extend(&chars[length - visible..]);

    field(key, masked)
}
