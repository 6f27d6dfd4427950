//! Example: a Tower service stack answering with DTOs
//!
//! Run with: `cargo run --example http_boundary --features tower`

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use error_kind::entry::{field, system_scope};
use error_kind::kind::{DATABASE_TRANSACTION_ERROR, NOT_FOUND_ERROR};
use error_kind::prelude_async::*;
use error_kind::tower::PropagateLayer;
use tower::{Service, ServiceBuilder, ServiceExt};

// =============================================================================
// Mock repository
// =============================================================================

#[derive(Clone)]
struct Repository;

impl Service<u64> for Repository {
    type Response = String;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<String>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, id: u64) -> Self::Future {
        Box::pin(async move {
            match id {
                1 => Ok("Ada".to_string()),
                2 => Err(Error::new(
                    &DATABASE_TRANSACTION_ERROR,
                    "could not serialize access",
                    [system_scope([field("isolation", "serializable")])],
                )),
                _ => Err(Error::new(&NOT_FOUND_ERROR, "user not found", [field("user_id", id)])),
            }
        })
    }
}

async fn io_step() -> core::result::Result<(), std::io::Error> {
    Ok(())
}

async fn handle(id: u64) -> (u16, String) {
    let service = ServiceBuilder::new()
        .layer(PropagateLayer::new("user handler").with_entries([field("route", "/users/:id")]))
        .service(Repository);

    let result = async {
        io_step().propagate("warming cache").await?;
        service.oneshot(id).await
    }
    .await;

    match result {
        Ok(name) => (200, format!("{{\"name\":\"{name}\"}}")),
        Err(err) => {
            eprintln!("{}", err.log_value());
            let (status, body) = Dto::for_response(&err);
            (status, body.to_json().unwrap_or_default())
        },
    }
}

#[tokio::main]
async fn main() {
    for id in [1, 2, 3] {
        let (status, body) = handle(id).await;
        println!("GET /users/{id} -> {status} {body}");
    }
}
