//! Async extensions.
//!
//! Futures resolving to a `Result` get the same propagation shortcuts as
//! plain results. Nothing is built unless the future fails, and the
//! reverse-trace hop points at the line that attached the propagation, not at
//! the executor that polled it.
//!
//! # Feature Flag
//!
//! Requires the `async` feature:
//!
//! ```toml
//! [dependencies]
//! error-kind = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use error_kind::prelude_async::*;
//!
//! async fn read_settings() -> Result<String, std::io::Error> {
//!     Err(std::io::Error::other("disk unplugged"))
//! }
//!
//! async fn boot() -> error_kind::Result<String> {
//!     read_settings().propagate("reading settings").await
//! }
//! ```

mod future_ext;
mod propagate_future;

pub use future_ext::FutureResultExt;
pub use propagate_future::PropagateFuture;
