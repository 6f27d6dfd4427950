//! The concrete error value and its propagation API.
//!
//! An [`Error`] is a [`Kind`], a message, an optional cause and a set of
//! [`Entry`] values. Every layer that observes a failure wraps it with
//! [`Error::propagate`] (keeping the kind) or [`Error::propagate_as`]
//! (reclassifying it); the wrapper starts from the cause's entries and merges
//! its own on top, so nothing attached deeper in the stack is lost.
//!
//! ```
//! use error_kind::entry::{field, user_scope};
//! use error_kind::kind::{DATABASE_RECORD_NOT_FOUND_ERROR, NOT_FOUND_ERROR};
//! use error_kind::Error;
//!
//! let db = Error::new(&DATABASE_RECORD_NOT_FOUND_ERROR, "no rows", [field("table", "users")]);
//! let service = Error::propagate_as(
//!     &NOT_FOUND_ERROR,
//!     db,
//!     "user not found",
//!     [user_scope([field("id", 42)])],
//! );
//!
//! assert!(service.is(&NOT_FOUND_ERROR));
//! assert_eq!(service.status_code(), 404);
//! assert_eq!(service.to_string(), "user not found");
//! assert_eq!(format!("{service:#}"), "user not found: no rows");
//! ```

use core::panic::Location;
use std::error::Error as StdError;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::dto::Dto;
use crate::entry::diagnostics::{self, Caller};
use crate::entry::{Entry, EntrySet, ReverseTrace};
use crate::kind::{Kind, UNKNOWN_ERROR};

mod chain;
mod propagation;
mod traits;

pub use chain::{classify, find_kind, is_kind, Chain};
pub(crate) use propagation::Propagation;

/// Shared, thread-safe cause of an [`Error`].
pub type Cause = Arc<dyn StdError + Send + Sync + 'static>;

/// Result alias defaulting to [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// A classified failure with mergeable context.
///
/// Clones are independent snapshots; combinators consume `self` and return
/// the updated value.
#[must_use]
#[derive(Clone)]
pub struct Error {
    kind: &'static Kind,
    message: String,
    cause: Option<Cause>,
    entries: EntrySet,
}

impl Error {
    /// Creates an error, attaching a stack trace and a reverse-trace hop.
    #[track_caller]
    pub fn new(
        kind: &'static Kind,
        message: impl Into<String>,
        entries: impl IntoIterator<Item = Entry>,
    ) -> Self {
        Self::new_at(kind, message.into(), entries, Location::caller())
    }

    pub(crate) fn new_at(
        kind: &'static Kind,
        message: String,
        entries: impl IntoIterator<Item = Entry>,
        location: &'static Location<'static>,
    ) -> Self {
        let (stack, hop) = diagnostics::capture_origin(location);
        Self::raw(kind, message, entries).with([stack.into(), hop.into()])
    }

    /// Creates an error without automatic diagnostics.
    ///
    /// Used when the failure happened elsewhere, e.g. when decoding a DTO.
    pub fn raw(
        kind: &'static Kind,
        message: impl Into<String>,
        entries: impl IntoIterator<Item = Entry>,
    ) -> Self {
        Self { kind, message: message.into(), cause: None, entries: entries.into_iter().collect() }
    }

    /// Wraps any error, reusing its text as the message.
    ///
    /// The kind is inherited when `err` is an [`Error`], otherwise it is
    /// [`UNKNOWN_ERROR`].
    #[track_caller]
    pub fn from_error<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        let message = err.to_string();
        Self::wrap(None, err, message, [], Location::caller())
    }

    /// Wraps `err` as the cause, keeping its classification.
    #[track_caller]
    pub fn propagate<E>(
        err: E,
        message: impl Into<String>,
        entries: impl IntoIterator<Item = Entry>,
    ) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::wrap(None, err, message.into(), entries, Location::caller())
    }

    /// Wraps `err` as the cause and reclassifies it as `kind`.
    #[track_caller]
    pub fn propagate_as<E>(
        kind: &'static Kind,
        err: E,
        message: impl Into<String>,
        entries: impl IntoIterator<Item = Entry>,
    ) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::wrap(Some(kind), err, message.into(), entries, Location::caller())
    }

    pub(crate) fn wrap<E>(
        kind: Option<&'static Kind>,
        err: E,
        message: String,
        entries: impl IntoIterator<Item = Entry>,
        location: &'static Location<'static>,
    ) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        let cause: Cause = Arc::new(err);

        let inner = cause.downcast_ref::<Error>();
        let foreign = inner.is_none();
        let (inherited, mut set) = match inner {
            Some(inner) => (inner.kind, inner.entries.clone()),
            None => (&UNKNOWN_ERROR, EntrySet::new()),
        };

        set.extend(entries);
        if foreign {
            // The failure starts here: this is the deepest point we can see.
            let (stack, hop) = diagnostics::capture_origin(location);
            set.add(stack.into());
            set.add(hop.into());
        } else {
            set.add(ReverseTrace::hop(&Caller::locate(location)).into());
        }

        Self { kind: kind.unwrap_or(inherited), message, cause: Some(cause), entries: set }
    }

    #[inline]
    pub fn kind(&self) -> &'static Kind {
        self.kind
    }

    /// This layer's message, without the cause chain.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    #[inline]
    pub fn entries(&self) -> &EntrySet {
        &self.entries
    }

    #[inline]
    pub fn entry(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Classification predicate, see [`Kind::is`].
    #[inline]
    pub fn is(&self, kind: &Kind) -> bool {
        self.kind.is(kind)
    }

    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// Replaces the kind, keeping message, cause and entries.
    #[inline]
    pub fn as_kind(mut self, kind: &'static Kind) -> Self {
        self.kind = kind;
        self
    }

    /// Merges additional entries.
    pub fn with(mut self, entries: impl IntoIterator<Item = Entry>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Merges one entry.
    #[inline]
    pub fn with_entry(mut self, entry: impl Into<Entry>) -> Self {
        self.entries.add(entry.into());
        self
    }

    /// Iterates over this error and every error below it.
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    /// Messages from this layer to the root cause joined by `": "`.
    ///
    /// Consecutive identical messages, such as those produced by
    /// [`Error::from_error`], are rendered once.
    pub fn error_chain(&self) -> String {
        let mut out = String::with_capacity(self.message.len() * 2);
        let mut previous: Option<String> = None;

        for err in self.chain() {
            let text = match err.downcast_ref::<Error>() {
                Some(inner) => inner.message.clone(),
                None => err.to_string(),
            };
            if previous.as_deref() == Some(text.as_str()) {
                continue;
            }
            if previous.is_some() {
                out.push_str(": ");
            }
            out.push_str(&text);
            previous = Some(text);
        }
        out
    }

    /// Public details as rendered in the DTO, `None` when nothing is public.
    pub fn details(&self) -> Option<Map<String, Value>> {
        let details = self.entries.public_values();
        (!details.is_empty()).then_some(details)
    }

    /// Projects this error onto its wire form.
    #[inline]
    pub fn dto(&self) -> Dto {
        Dto::encode(self)
    }
}
