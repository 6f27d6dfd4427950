//! Async prelude: the sync [`prelude`](crate::prelude) plus
//! [`FutureResultExt`].
//!
//! ```
//! use error_kind::prelude_async::*;
//!
//! async fn fetch(id: u64) -> Result<String> {
//!     async { Err::<String, _>(std::io::Error::other("connection reset")) }
//!         .propagate_as(&SYSTEM_ERROR, format!("fetching {id}"))
//!         .await
//! }
//! ```

pub use crate::prelude::*;

pub use crate::async_ext::{FutureResultExt, PropagateFuture};
