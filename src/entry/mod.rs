//! Mergeable units of contextual and diagnostic data.
//!
//! Every [`Entry`] has a key, a [`Visibility`] and a structured value. An
//! [`Error`](crate::Error) holds at most one entry per key: when a second entry
//! with the same key arrives, the two are combined with [`Entry::insert`]:
//!
//! | variant | rule |
//! |---|---|
//! | [`Field`] | latest wins |
//! | [`StackTrace`] | first wins |
//! | [`ReverseTrace`] | hops accumulate |
//! | [`Dict`] (scopes) | recursive union, children merged by the same rules |
//!
//! ```
//! use error_kind::entry::{field, user_scope};
//!
//! let mut scope = user_scope([field("email", "missing")]);
//! scope.insert(user_scope([field("email", "invalid"), field("name", "too long")]));
//!
//! let details = scope.public_value().unwrap();
//! assert_eq!(details["email"], "invalid");
//! assert_eq!(details["name"], "too long");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod diagnostics;
mod dict;
mod field;
mod set;

pub use diagnostics::{ReverseTrace, StackTrace};
pub use dict::{
    dict, system_scope, user_scope, validation, Dict, SYSTEM_SCOPE_KEY, USER_SCOPE_KEY,
    VALIDATION_KEY,
};
pub use field::{
    field, hint, redacted, restricted_field, Field, HINT_KEY, REDACTION_PLACEHOLDER,
};
pub use set::{EntrySet, ErrorVec};

/// Whether an entry may cross the external trust boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Visibility {
    /// Rendered in DTOs and logs.
    #[default]
    Public,
    /// Rendered in logs only.
    Restrict,
}

/// A mergeable piece of error context.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Field(Field),
    StackTrace(StackTrace),
    ReverseTrace(ReverseTrace),
    Dict(Dict),
}

impl Entry {
    #[inline]
    pub fn key(&self) -> &str {
        match self {
            Self::Field(field) => field.key(),
            Self::StackTrace(_) => StackTrace::KEY,
            Self::ReverseTrace(_) => ReverseTrace::KEY,
            Self::Dict(dict) => dict.key(),
        }
    }

    #[inline]
    pub fn visibility(&self) -> Visibility {
        match self {
            Self::Field(field) => field.visibility(),
            Self::StackTrace(_) | Self::ReverseTrace(_) => Visibility::Restrict,
            Self::Dict(dict) => dict.visibility(),
        }
    }

    #[inline]
    pub fn is_public(&self) -> bool {
        self.visibility() == Visibility::Public
    }

    /// Whether this entry was rebuilt from a received DTO.
    #[inline]
    pub fn is_received(&self) -> bool {
        match self {
            Self::Field(field) => field.is_received(),
            Self::Dict(dict) => dict.is_received(),
            Self::StackTrace(_) | Self::ReverseTrace(_) => false,
        }
    }

    /// Same entry with [`Visibility::Restrict`]. Diagnostics are already restricted.
    #[must_use]
    pub fn into_restricted(mut self) -> Self {
        match &mut self {
            Self::Field(field) => field.set_visibility(Visibility::Restrict),
            Self::Dict(dict) => dict.set_visibility(Visibility::Restrict),
            Self::StackTrace(_) | Self::ReverseTrace(_) => {},
        }
        self
    }

    /// Name of the variant, used in contract-violation messages.
    pub fn variant(&self) -> &'static str {
        match self {
            Self::Field(_) => "field",
            Self::StackTrace(_) => "stack trace",
            Self::ReverseTrace(_) => "reverse trace",
            Self::Dict(_) => "dict",
        }
    }

    /// Merges `other` into `self` following the per-variant rule.
    ///
    /// A clash with an entry rebuilt from a received DTO resolves by
    /// replacement: its shape was chosen by another process.
    ///
    /// # Panics
    ///
    /// Panics when `other` is a different variant and neither entry was
    /// received. Mixing variants under one key is a programming error.
    pub fn insert(&mut self, other: Entry) {
        match (self, other) {
            (Self::Field(current), Self::Field(incoming)) => *current = incoming,
            (Self::StackTrace(_), Self::StackTrace(_)) => {},
            (Self::ReverseTrace(current), Self::ReverseTrace(incoming)) => {
                current.append(incoming)
            },
            (Self::Dict(current), Self::Dict(incoming)) => current.merge(incoming),
            (current, incoming) if current.is_received() || incoming.is_received() => {
                *current = incoming
            },
            (current, incoming) => panic!(
                "trying to insert unmatching entry: {} `{}` into {} `{}`",
                incoming.variant(),
                incoming.key(),
                current.variant(),
                current.key()
            ),
        }
    }

    /// Value rendered across the trust boundary.
    ///
    /// `None` for restricted entries and for dicts without public content.
    pub fn public_value(&self) -> Option<Value> {
        if !self.is_public() {
            return None;
        }

        match self {
            Self::Field(field) => Some(field.value().clone()),
            Self::Dict(dict) => dict.public_value(),
            Self::StackTrace(_) | Self::ReverseTrace(_) => None,
        }
    }

    /// Value rendered for internal structured logs, restricted data included.
    pub fn log_value(&self) -> Value {
        match self {
            Self::Field(field) => field.value().clone(),
            Self::StackTrace(trace) => Value::String(trace.as_str().to_owned()),
            Self::ReverseTrace(trace) => trace.hops().iter().cloned().map(Value::String).collect(),
            Self::Dict(dict) => Value::Object(dict.entries().log_values()),
        }
    }

    /// `(key, value)` pair for a structured logger.
    #[inline]
    pub fn log_pair(&self) -> (&str, Value) {
        (self.key(), self.log_value())
    }
}

impl From<Field> for Entry {
    #[inline]
    fn from(field: Field) -> Self {
        Self::Field(field)
    }
}

impl From<StackTrace> for Entry {
    #[inline]
    fn from(trace: StackTrace) -> Self {
        Self::StackTrace(trace)
    }
}

impl From<ReverseTrace> for Entry {
    #[inline]
    fn from(trace: ReverseTrace) -> Self {
        Self::ReverseTrace(trace)
    }
}

impl From<Dict> for Entry {
    #[inline]
    fn from(dict: Dict) -> Self {
        Self::Dict(dict)
    }
}
