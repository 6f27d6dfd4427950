//! Wire form of an [`Error`].
//!
//! A [`Dto`] is the only projection of an error that may leave the process:
//! the message of the outermost layer, the kind hierarchy and the public
//! details. Causes, stack traces, reverse traces and restricted scopes are
//! never encoded.
//!
//! ```
//! use error_kind::entry::{field, restricted_field};
//! use error_kind::kind::VALIDATION_ERROR;
//! use error_kind::{Dto, Error};
//!
//! let err = Error::new(
//!     &VALIDATION_ERROR,
//!     "bad field",
//!     [field("email", "invalid"), restricted_field("query", "SELECT 1")],
//! );
//!
//! let json = err.dto().to_json().unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"error":"bad field","kind":"ValidationError::UserError::Error","details":{"email":"invalid"}}"#
//! );
//!
//! let received = Dto::from_json(&json).unwrap().decode();
//! assert_eq!(received.to_string(), "bad field");
//! assert!(received.is(&VALIDATION_ERROR));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entry::{Dict, Entry, Field};
use crate::error::Error;
use crate::kind::{self, Kind, Registry, EXTERNAL_UNKNOWN_ERROR, KIND_SEPARATOR, SYSTEM_ERROR};

/// Message returned to callers instead of non-user failures.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// Hint attached to [`Dto::for_response`] replacements.
pub const INTERNAL_ERROR_HINT: &str = "retry later; if the problem persists, contact support and quote the time of the request";

/// Data-transfer object: `{"error": ..., "kind": ..., "details"?: {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dto {
    pub error: String,
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Map<String, Value>>,
}

impl Dto {
    /// Encodes the public view of `err`.
    pub fn encode(err: &Error) -> Self {
        Self { error: err.message().to_owned(), kind: err.kind().hierarchy(), details: err.details() }
    }

    /// Chooses the status and body an external boundary should answer with.
    ///
    /// Failures classified under [`USER_ERROR`](crate::kind::USER_ERROR) are
    /// returned as-is with their own status. Anything else becomes a generic
    /// 500 so internal messages are never exposed.
    pub fn for_response(err: &Error) -> (u16, Self) {
        if err.is(&kind::USER_ERROR) {
            return (err.status_code(), Self::encode(err));
        }

        let replacement = Error::raw(
            &SYSTEM_ERROR,
            INTERNAL_ERROR_MESSAGE,
            [crate::entry::hint(INTERNAL_ERROR_HINT)],
        );
        (SYSTEM_ERROR.status_code(), Self::encode(&replacement))
    }

    /// Rebuilds an error using the process-wide registry.
    pub fn decode(&self) -> Error {
        self.decode_with(kind::registry())
    }

    /// Rebuilds an error using `registry` to resolve the kind.
    ///
    /// The result has no cause and no diagnostics from the sending process;
    /// its details become public entries again.
    pub fn decode_with(&self, registry: &Registry) -> Error {
        let kind = resolve_kind(&self.kind, registry);
        let entries = self.details.iter().flatten().map(|(key, value)| restore(key, value));
        Error::raw(kind, self.error.clone(), entries)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }
}

impl From<&Error> for Dto {
    #[inline]
    fn from(err: &Error) -> Self {
        Self::encode(err)
    }
}

impl From<Dto> for Error {
    #[inline]
    fn from(dto: Dto) -> Self {
        dto.decode()
    }
}

/// Resolves a wire `kind` tag against `registry`.
///
/// The tag is tried as a code first, then each hierarchy segment by name,
/// child first, so the nearest ancestor known locally wins. Unknown tags map to
/// [`EXTERNAL_UNKNOWN_ERROR`].
pub fn resolve_kind(tag: &str, registry: &Registry) -> &'static Kind {
    if let Some(kind) = registry.find_by_code(tag) {
        return kind;
    }

    let resolved = tag
        .split(KIND_SEPARATOR)
        .map(str::trim)
        .find_map(|name| registry.find_by_name(name));

    match resolved {
        Some(kind) => kind,
        None => {
            #[cfg(feature = "tracing")]
            tracing::debug!(kind = tag, "unknown remote kind, falling back to external unknown");
            &EXTERNAL_UNKNOWN_ERROR
        },
    }
}

fn restore(key: &str, value: &Value) -> Entry {
    match value {
        Value::Object(children) => {
            Dict::new(key, children.iter().map(|(child, value)| restore(child, value)))
                .received()
                .into()
        },
        other => Field::new(key, other.clone()).received().into(),
    }
}
