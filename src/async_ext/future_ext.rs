//! Extension trait for `Future<Output = Result<T, E>>`.
//!
//! Provides `.propagate()` and `.propagate_as()` for futures, mirroring
//! the sync [`ResultExt`](crate::traits::ResultExt) trait.

use core::future::Future;

use crate::entry::Entry;
use crate::error::Propagation;
use crate::kind::Kind;

use super::propagate_future::PropagateFuture;

/// Propagation shortcuts for async `Result`-returning futures.
///
/// # Examples
///
/// ```rust
/// use error_kind::prelude_async::*;
/// use error_kind::kind::NOT_FOUND_ERROR;
///
/// async fn fetch_row(id: u64) -> Result<String, std::io::Error> {
///     Err(std::io::Error::other(format!("row {id} missing")))
/// }
///
/// async fn fetch_user(id: u64) -> error_kind::Result<String> {
///     fetch_row(id)
///         .propagate_as(&NOT_FOUND_ERROR, "user not found")
///         .await
/// }
/// ```
pub trait FutureResultExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Wraps the error, keeping its kind, once the future fails.
    #[track_caller]
    fn propagate(self, message: impl Into<String>) -> PropagateFuture<Self> {
        PropagateFuture::new(self, Propagation::new(None, message, []))
    }

    /// Wraps the error with extra entries, keeping its kind.
    #[track_caller]
    fn propagate_with(
        self,
        message: impl Into<String>,
        entries: impl IntoIterator<Item = Entry>,
    ) -> PropagateFuture<Self> {
        PropagateFuture::new(self, Propagation::new(None, message, entries))
    }

    /// Wraps and reclassifies the error once the future fails.
    #[track_caller]
    fn propagate_as(self, kind: &'static Kind, message: impl Into<String>) -> PropagateFuture<Self> {
        PropagateFuture::new(self, Propagation::new(Some(kind), message, []))
    }
}

impl<Fut, T, E> FutureResultExt<T, E> for Fut where Fut: Future<Output = Result<T, E>> {}
