use core::panic::Location;
use std::error::Error as StdError;

use super::Error;
use crate::entry::Entry;
use crate::kind::Kind;

/// A deferred [`Error::propagate`] / [`Error::propagate_as`] call.
///
/// Captured where the propagation is written and applied only if a failure
/// actually arrives, so extension traits, futures and services report the
/// location of the code that asked for the propagation.
#[derive(Debug, Clone)]
pub(crate) struct Propagation {
    kind: Option<&'static Kind>,
    message: String,
    entries: Vec<Entry>,
    location: &'static Location<'static>,
}

impl Propagation {
    #[track_caller]
    pub(crate) fn new(
        kind: Option<&'static Kind>,
        message: impl Into<String>,
        entries: impl IntoIterator<Item = Entry>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            entries: entries.into_iter().collect(),
            location: Location::caller(),
        }
    }

    #[cfg_attr(not(feature = "tower"), allow(dead_code))]
    pub(crate) fn extend(&mut self, entries: impl IntoIterator<Item = Entry>) {
        self.entries.extend(entries);
    }

    pub(crate) fn apply<E>(self, err: E) -> Error
    where
        E: StdError + Send + Sync + 'static,
    {
        Error::wrap(self.kind, err, self.message, self.entries, self.location)
    }
}
