//! Tower integration.
//!
//! [`PropagateLayer`] wraps every error of the inner service with
//! [`Error::propagate`](crate::Error::propagate) (or
//! [`Error::propagate_as`](crate::Error::propagate_as)), so a service boundary
//! adds its message, entries and reverse-trace hop in one place.
//!
//! # Feature Flag
//!
//! Requires the `tower` feature:
//!
//! ```toml
//! [dependencies]
//! error-kind = { version = "0.1", features = ["tower"] }
//! ```
//!
//! # Example
//!
//! ```rust
//! use error_kind::entry::field;
//! use error_kind::tower::PropagateLayer;
//! use tower::ServiceBuilder;
//!
//! let layer = PropagateLayer::new("user-service call failed")
//!     .with_entries([field("service", "users")]);
//!
//! let _svc = ServiceBuilder::new().layer(layer).service_fn(|req: u32| async move {
//!     Ok::<_, std::io::Error>(req * 2)
//! });
//! ```

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::error::Error as StdError;

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;
use tower::{Layer, Service};

use crate::entry::Entry;
use crate::error::{Error, Propagation};
use crate::kind::Kind;

/// A Tower [`Layer`] that propagates service errors into [`Error`].
///
/// The reverse-trace hop of every wrapped error points at the line that
/// built the layer.
#[derive(Clone, Debug)]
pub struct PropagateLayer {
    propagation: Propagation,
}

impl PropagateLayer {
    /// Keeps the inner error's kind.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self { propagation: Propagation::new(None, message, []) }
    }

    /// Reclassifies every inner error as `kind`.
    #[track_caller]
    pub fn new_as(kind: &'static Kind, message: impl Into<String>) -> Self {
        Self { propagation: Propagation::new(Some(kind), message, []) }
    }

    /// Entries merged into every wrapped error.
    #[must_use]
    pub fn with_entries(mut self, entries: impl IntoIterator<Item = Entry>) -> Self {
        self.propagation.extend(entries);
        self
    }
}

impl<S> Layer<S> for PropagateLayer {
    type Service = PropagateService<S>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        PropagateService { inner, propagation: self.propagation.clone() }
    }
}

/// A Tower [`Service`] whose errors are propagated into [`Error`].
///
/// Created by [`PropagateLayer`] or [`ServiceErrorExt`].
#[derive(Clone, Debug)]
pub struct PropagateService<S> {
    inner: S,
    propagation: Propagation,
}

impl<S> PropagateService<S> {
    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    #[inline]
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Consumes the wrapper and returns the inner service.
    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, Request> Service<Request> for PropagateService<S>
where
    S: Service<Request>,
    S::Error: StdError + Send + Sync + 'static,
{
    type Response = S::Response;
    type Error = Error;
    type Future = PropagateFuture<S::Future>;

    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(|err| self.propagation.clone().apply(err))
    }

    #[inline]
    fn call(&mut self, request: Request) -> Self::Future {
        PropagateFuture { inner: self.inner.call(request), propagation: Some(self.propagation.clone()) }
    }
}

pin_project! {
    /// Future returned by [`PropagateService`].
    #[must_use = "futures do nothing unless polled"]
    pub struct PropagateFuture<F> {
        #[pin]
        inner: F,
        propagation: Option<Propagation>,
    }
}

impl<F, T, E> Future for PropagateFuture<F>
where
    F: Future<Output = Result<T, E>>,
    E: StdError + Send + Sync + 'static,
{
    type Output = Result<T, Error>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.inner.poll(cx) {
            Poll::Ready(Ok(response)) => Poll::Ready(Ok(response)),
            Poll::Ready(Err(err)) => {
                // Some until the first Ready result
                let propagation = this.propagation.take().expect("polled after completion");
                Poll::Ready(Err(propagation.apply(err)))
            },
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<F, T, E> FusedFuture for PropagateFuture<F>
where
    F: FusedFuture<Output = Result<T, E>>,
    E: StdError + Send + Sync + 'static,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        self.propagation.is_none() || self.inner.is_terminated()
    }
}

/// Extension trait for wrapping a single service without a layer stack.
pub trait ServiceErrorExt<Request>: Service<Request> + Sized {
    /// Propagates every error of this service, keeping its kind.
    ///
    /// ```rust
    /// use error_kind::tower::ServiceErrorExt;
    ///
    /// let svc = tower::service_fn(|_: ()| async { Err::<(), _>(std::io::Error::other("down")) });
    /// let _wrapped = svc.propagate_errors("database-layer");
    /// ```
    #[track_caller]
    fn propagate_errors(self, message: impl Into<String>) -> PropagateService<Self> {
        PropagateService { inner: self, propagation: Propagation::new(None, message, []) }
    }

    /// Propagates every error of this service as `kind`.
    #[track_caller]
    fn propagate_errors_as(
        self,
        kind: &'static Kind,
        message: impl Into<String>,
    ) -> PropagateService<Self> {
        PropagateService { inner: self, propagation: Propagation::new(Some(kind), message, []) }
    }
}

impl<S, Request> ServiceErrorExt<Request> for S where S: Service<Request> {}
