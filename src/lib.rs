//! Classified errors with mergeable context.
//!
//! Every failure is an [`Error`]: a [`Kind`] from a hierarchical taxonomy, a
//! message, an optional cause and a set of [`Entry`] values. Layers that see
//! the failure wrap it with [`Error::propagate`] or [`Error::propagate_as`];
//! entries attached anywhere in the stack survive to the boundary, where the
//! error is either logged in full ([`Error::log_value`]) or projected onto
//! the public [`Dto`].
//!
//! # Examples
//!
//! ## Raise, propagate, answer
//!
//! ```
//! use error_kind::entry::{field, hint, restricted_field, user_scope};
//! use error_kind::kind::{DATABASE_RECORD_NOT_FOUND_ERROR, NOT_FOUND_ERROR};
//! use error_kind::{Dto, Error};
//!
//! let db = Error::new(
//!     &DATABASE_RECORD_NOT_FOUND_ERROR,
//!     "no rows returned",
//!     [restricted_field("sql", "SELECT * FROM users WHERE id = $1")],
//! );
//! let err = Error::propagate_as(
//!     &NOT_FOUND_ERROR,
//!     db,
//!     "user not found",
//!     [user_scope([field("user_id", 42)]), hint("check the id")],
//! );
//!
//! let (status, body) = Dto::for_response(&err);
//! assert_eq!(status, 404);
//! assert_eq!(body.kind, "NotFoundError::UserError::Error");
//!
//! let details = body.details.unwrap();
//! assert_eq!(details["user"]["user_id"], 42);
//! assert!(!details.contains_key("sql"));
//! assert!(!details.contains_key("stacktrace"));
//! ```
//!
//! ## Custom kinds
//!
//! ```
//! use error_kind::kind::{Kind, USER_ERROR};
//! use error_kind::Error;
//!
//! static QUOTA_EXCEEDED: Kind = Kind::new("QuotaExceededError", "E10001")
//!     .with_parent(&USER_ERROR)
//!     .with_status(429);
//!
//! let err = Error::raw(&QUOTA_EXCEEDED, "too many requests", []);
//! assert!(err.is(&USER_ERROR));
//! assert_eq!(err.status_code(), 429);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Kind taxonomy and registry
pub mod kind;

/// Structured context attached to errors
pub mod entry;

/// The error value and its propagation API
pub mod error;

/// Public wire form
pub mod dto;

/// Internal structured-log view
pub mod log;

/// Reusable error definitions
pub mod template;

/// Extension traits for `Result`
pub mod traits;

/// Shorthand macros for entries and errors
pub mod macros;

/// Convenience re-exports for quick starts
pub mod prelude;

/// Async extensions (requires `async` feature)
#[cfg(feature = "async")]
#[cfg_attr(docsrs, doc(cfg(feature = "async")))]
pub mod async_ext;

/// Async prelude (requires `async` feature)
#[cfg(feature = "async")]
#[cfg_attr(docsrs, doc(cfg(feature = "async")))]
pub mod prelude_async;

/// Tower integration - Layer and Service implementations (requires `tower` feature)
#[cfg(feature = "tower")]
#[cfg_attr(docsrs, doc(cfg(feature = "tower")))]
pub mod tower;

pub use dto::Dto;
pub use entry::{Entry, EntrySet, Visibility};
pub use error::{classify, find_kind, is_kind, Cause, Error, Result};
pub use kind::Kind;
pub use template::{Template, Using};
pub use traits::{ErrorResultExt, ResultExt};

#[cfg(feature = "tracing")]
pub use log::trace_err;
