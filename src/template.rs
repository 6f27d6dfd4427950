//! Reusable error definitions.
//!
//! A [`Template`] fixes the kind, message and entries of a failure that is
//! raised from several places. [`Using`] fixes only a bundle of entries, for a
//! block of code that attaches the same context to every error it builds.
//!
//! ```
//! use error_kind::entry::{field, hint};
//! use error_kind::kind::AUTH_ERROR;
//! use error_kind::template::{Template, Using};
//!
//! static EXPIRED: Template = Template::new(&AUTH_ERROR, "session expired");
//!
//! let err = EXPIRED.raise([hint("sign in again")]);
//! assert!(err.is(&AUTH_ERROR));
//! assert_eq!(err.details().unwrap()["hint"], "sign in again");
//!
//! let using = Using::new([field("tenant", "acme")]);
//! let err = using.raise(&AUTH_ERROR, "bad token", []);
//! assert_eq!(err.details().unwrap()["tenant"], "acme");
//! ```

use core::panic::Location;
use std::error::Error as StdError;

use crate::entry::Entry;
use crate::error::Error;
use crate::kind::Kind;

/// A kind and message raised from several call sites.
#[derive(Debug)]
pub struct Template {
    kind: &'static Kind,
    message: &'static str,
    entries: fn() -> Vec<Entry>,
}

impl Template {
    /// Creates a template without default entries.
    pub const fn new(kind: &'static Kind, message: &'static str) -> Self {
        Self { kind, message, entries: Vec::new }
    }

    /// Sets a constructor for entries attached to every error of this template.
    pub const fn with_entries(mut self, entries: fn() -> Vec<Entry>) -> Self {
        self.entries = entries;
        self
    }

    #[inline]
    pub fn kind(&self) -> &'static Kind {
        self.kind
    }

    #[inline]
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Creates a new error from the template. Call-site entries are merged
    /// after the template's, so they win on conflicting fields.
    #[track_caller]
    pub fn raise(&self, entries: impl IntoIterator<Item = Entry>) -> Error {
        let entries = (self.entries)().into_iter().chain(entries);
        Error::new_at(self.kind, self.message.to_owned(), entries, Location::caller())
    }

    /// Propagates `err`, reclassifying it with the template's kind and message.
    #[track_caller]
    pub fn propagate<E>(&self, err: E, entries: impl IntoIterator<Item = Entry>) -> Error
    where
        E: StdError + Send + Sync + 'static,
    {
        let entries = (self.entries)().into_iter().chain(entries);
        Error::wrap(Some(self.kind), err, self.message.to_owned(), entries, Location::caller())
    }
}

/// A bundle of entries merged into every error built through it.
#[derive(Debug, Clone, Default)]
pub struct Using {
    entries: Vec<Entry>,
}

impl Using {
    pub fn new(entries: impl IntoIterator<Item = Entry>) -> Self {
        Self { entries: entries.into_iter().collect() }
    }

    /// Adds more entries to the bundle.
    #[must_use]
    pub fn add(mut self, entries: impl IntoIterator<Item = Entry>) -> Self {
        self.entries.extend(entries);
        self
    }

    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// [`Error::new`] with the bundle merged after the call-site entries.
    #[track_caller]
    pub fn raise(
        &self,
        kind: &'static Kind,
        message: impl Into<String>,
        entries: impl IntoIterator<Item = Entry>,
    ) -> Error {
        Error::new_at(kind, message.into(), entries, Location::caller()).with(self.entries.clone())
    }

    /// [`Error::raw`] with the bundle merged after the call-site entries.
    pub fn raw(
        &self,
        kind: &'static Kind,
        message: impl Into<String>,
        entries: impl IntoIterator<Item = Entry>,
    ) -> Error {
        Error::raw(kind, message, entries).with(self.entries.clone())
    }

    /// [`Error::propagate`] with the bundle merged after the call-site entries.
    #[track_caller]
    pub fn propagate<E>(
        &self,
        err: E,
        message: impl Into<String>,
        entries: impl IntoIterator<Item = Entry>,
    ) -> Error
    where
        E: StdError + Send + Sync + 'static,
    {
        let entries = entries.into_iter().chain(self.entries.iter().cloned());
        Error::wrap(None, err, message.into(), entries, Location::caller())
    }

    /// [`Error::propagate_as`] with the bundle merged after the call-site entries.
    #[track_caller]
    pub fn propagate_as<E>(
        &self,
        kind: &'static Kind,
        err: E,
        message: impl Into<String>,
        entries: impl IntoIterator<Item = Entry>,
    ) -> Error
    where
        E: StdError + Send + Sync + 'static,
    {
        let entries = entries.into_iter().chain(self.entries.iter().cloned());
        Error::wrap(Some(kind), err, message.into(), entries, Location::caller())
    }
}
