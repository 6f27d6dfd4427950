//! Tests for Tower integration.
#![cfg(feature = "tower")]

use std::future::Future;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use error_kind::entry::field;
use error_kind::kind::{NOT_FOUND_ERROR, SYSTEM_ERROR, UNKNOWN_ERROR};
use error_kind::tower::{PropagateLayer, PropagateService, ServiceErrorExt};
use error_kind::Error;
use tower::{Layer, Service, ServiceBuilder, ServiceExt};

/// A simple mock service for testing.
#[derive(Clone)]
struct MockService {
    should_fail: bool,
}

impl MockService {
    fn success() -> Self {
        Self { should_fail: false }
    }

    fn failing() -> Self {
        Self { should_fail: true }
    }
}

impl Service<String> for MockService {
    type Response = String;
    type Error = io::Error;
    type Future = Pin<Box<dyn Future<Output = Result<String, io::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: String) -> Self::Future {
        let should_fail = self.should_fail;
        Box::pin(async move {
            if should_fail {
                Err(io::Error::other("service error"))
            } else {
                Ok(format!("processed: {req}"))
            }
        })
    }
}

/// A service that is never ready.
struct Overloaded;

impl Service<String> for Overloaded {
    type Response = String;
    type Error = io::Error;
    type Future = std::future::Ready<Result<String, io::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Err(io::Error::other("overloaded")))
    }

    fn call(&mut self, _req: String) -> Self::Future {
        std::future::ready(Err(io::Error::other("unreachable")))
    }
}

#[tokio::test]
async fn layer_creates_service() {
    let layer = PropagateLayer::new("calling users");
    let service: PropagateService<MockService> = layer.layer(MockService::success());

    assert!(!service.inner().should_fail);
}

#[tokio::test]
async fn service_passes_through_success() {
    let mut service = PropagateLayer::new("calling users").layer(MockService::success());

    let result = service.call("hello".to_string()).await;

    assert_eq!(result.unwrap(), "processed: hello");
}

#[tokio::test]
async fn service_errors_are_propagated() {
    let mut service = PropagateLayer::new("api-gateway")
        .with_entries([field("service", "users")])
        .layer(MockService::failing());

    let err: Error = service.call("test".to_string()).await.unwrap_err();

    assert!(err.is(&UNKNOWN_ERROR));
    assert_eq!(format!("{err:#}"), "api-gateway: service error");
    assert_eq!(err.details().unwrap()["service"], "users");
}

#[tokio::test]
async fn layer_can_reclassify() {
    let service = ServiceBuilder::new()
        .layer(PropagateLayer::new_as(&NOT_FOUND_ERROR, "lookup failed"))
        .service(MockService::failing());

    let err = service.oneshot("x".to_string()).await.unwrap_err();

    assert!(err.is(&NOT_FOUND_ERROR));
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn poll_ready_errors_are_propagated() {
    let service = Overloaded.propagate_errors_as(&SYSTEM_ERROR, "backend unavailable");

    let err = service.oneshot("x".to_string()).await.unwrap_err();

    assert!(err.is(&SYSTEM_ERROR));
    assert_eq!(format!("{err:#}"), "backend unavailable: overloaded");
}

#[tokio::test]
async fn service_ext_wraps_without_layer() {
    let mut service = MockService::failing().propagate_errors("database-layer");

    let err = service.call("q".to_string()).await.unwrap_err();
    assert_eq!(err.message(), "database-layer");

    let inner = service.into_inner();
    assert!(inner.should_fail);
}

#[tokio::test]
async fn each_call_gets_its_own_error() {
    let mut service = PropagateLayer::new("calling users").layer(MockService::failing());

    let first = service.call("a".to_string()).await.unwrap_err();
    let second = service.call("b".to_string()).await.unwrap_err();

    assert_eq!(first.message(), second.message());
    assert_eq!(first.entries().len(), second.entries().len());
}
