//! Future wrapper that propagates errors when the inner future fails.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::error::Error as StdError;

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::error::{Error, Propagation};

pin_project! {
    /// Applies a pending propagation to the inner future's error.
    ///
    /// Nothing is built on the success path. The reverse-trace hop points at
    /// the line that created this future.
    ///
    /// # Cancel Safety
    ///
    /// `PropagateFuture` is cancel-safe if the inner future is cancel-safe.
    #[must_use = "futures do nothing unless polled"]
    pub struct PropagateFuture<Fut> {
        #[pin]
        future: Fut,
        propagation: Option<Propagation>,
    }
}

impl<Fut> PropagateFuture<Fut> {
    pub(crate) fn new(future: Fut, propagation: Propagation) -> Self {
        Self { future, propagation: Some(propagation) }
    }
}

impl<Fut, T, E> Future for PropagateFuture<Fut>
where
    Fut: Future<Output = Result<T, E>>,
    E: StdError + Send + Sync + 'static,
{
    type Output = Result<T, Error>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|res| {
            res.map_err(|err| {
                let propagation = this
                    .propagation
                    .take()
                    .expect("PropagateFuture polled after completion; this is a bug");
                propagation.apply(err)
            })
        })
    }
}

impl<Fut, T, E> FusedFuture for PropagateFuture<Fut>
where
    Fut: FusedFuture<Output = Result<T, E>>,
    E: StdError + Send + Sync + 'static,
{
    fn is_terminated(&self) -> bool {
        self.propagation.is_none() || self.future.is_terminated()
    }
}
