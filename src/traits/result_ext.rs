//! Extension trait for propagating `Result` errors without `map_err` chains.
//!
//! # Examples
//!
//! ```
//! use error_kind::kind::{NOT_FOUND_ERROR, UNKNOWN_ERROR};
//! use error_kind::traits::ResultExt;
//!
//! fn load_config() -> error_kind::Result<String> {
//!     std::fs::read_to_string("/definitely/missing.toml").propagate("loading configuration")
//! }
//!
//! let err = load_config().unwrap_err();
//! assert!(err.is(&UNKNOWN_ERROR));
//!
//! let err = load_config().propagate_as(&NOT_FOUND_ERROR, "configuration missing").unwrap_err();
//! assert!(err.is(&NOT_FOUND_ERROR));
//! ```

use std::error::Error as StdError;

use crate::entry::Entry;
use crate::error::{Error, Propagation};
use crate::kind::Kind;

/// Propagation shortcuts for `Result<T, E>`.
///
/// Each method behaves like the [`Error`] constructor of the same name and
/// records the line that called it in the reverse trace.
pub trait ResultExt<T, E> {
    /// Wraps the error, keeping its kind.
    fn propagate(self, message: impl Into<String>) -> Result<T, Error>;

    /// Wraps the error with extra entries, keeping its kind.
    fn propagate_with(
        self,
        message: impl Into<String>,
        entries: impl IntoIterator<Item = Entry>,
    ) -> Result<T, Error>;

    /// Wraps the error and reclassifies it.
    fn propagate_as(self, kind: &'static Kind, message: impl Into<String>) -> Result<T, Error>;

    /// Wraps the error with a lazily built message, keeping its kind.
    ///
    /// The closure only runs on the error path.
    fn propagate_with_fn<F, M>(self, f: F) -> Result<T, Error>
    where
        F: FnOnce() -> M,
        M: Into<String>;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    #[inline]
    #[track_caller]
    fn propagate(self, message: impl Into<String>) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Propagation::new(None, message, []).apply(err)),
        }
    }

    #[inline]
    #[track_caller]
    fn propagate_with(
        self,
        message: impl Into<String>,
        entries: impl IntoIterator<Item = Entry>,
    ) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Propagation::new(None, message, entries).apply(err)),
        }
    }

    #[inline]
    #[track_caller]
    fn propagate_as(self, kind: &'static Kind, message: impl Into<String>) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Propagation::new(Some(kind), message, []).apply(err)),
        }
    }

    #[inline]
    #[track_caller]
    fn propagate_with_fn<F, M>(self, f: F) -> Result<T, Error>
    where
        F: FnOnce() -> M,
        M: Into<String>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Propagation::new(None, f(), []).apply(err)),
        }
    }
}

/// Entry and kind adjustments for results already carrying an [`Error`].
pub trait ErrorResultExt<T> {
    /// Merges entries into the error, see [`Error::with`].
    fn with_entries(self, entries: impl IntoIterator<Item = Entry>) -> Result<T, Error>;

    /// Reclassifies the error in place, see [`Error::as_kind`].
    fn or_kind(self, kind: &'static Kind) -> Result<T, Error>;
}

impl<T> ErrorResultExt<T> for Result<T, Error> {
    #[inline]
    fn with_entries(self, entries: impl IntoIterator<Item = Entry>) -> Result<T, Error> {
        self.map_err(|err| err.with(entries))
    }

    #[inline]
    fn or_kind(self, kind: &'static Kind) -> Result<T, Error> {
        self.map_err(|err| err.as_kind(kind))
    }
}
