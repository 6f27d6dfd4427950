//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_kind::prelude::*;
//!
//! fn load_config() -> Result<String> {
//!     std::fs::read_to_string("/definitely/missing.toml")
//!         .propagate_as(&SYSTEM_ERROR, "loading configuration")
//! }
//!
//! let err = load_config().unwrap_err();
//! assert_eq!(err.status_code(), 500);
//! assert_eq!(Dto::from(&err).kind, "SystemError::Error");
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fields!`], [`hint!`], [`raise!`]
//! - **Types**: [`Error`], [`Kind`], [`Entry`], [`Dto`], [`Result`]
//! - **Entry constructors**: [`field`], [`hint`](fn@hint), [`user_scope`],
//!   [`system_scope`], [`validation`]
//! - **Traits**: [`ResultExt`], [`ErrorResultExt`]
//! - **Kinds**: the root kinds plus the most common request kinds

pub use crate::{fields, hint, raise};

pub use crate::dto::Dto;
pub use crate::entry::{
    dict, field, hint, redacted, restricted_field, system_scope, user_scope, validation, Entry,
    Visibility,
};
pub use crate::error::{Error, Result};
pub use crate::kind::{
    Kind, AUTH_ERROR, ERROR, FORBIDDEN_ERROR, INVALID_REQUEST_ERROR, NOT_FOUND_ERROR,
    SYSTEM_ERROR, UNKNOWN_ERROR, USER_ERROR, VALIDATION_ERROR,
};
pub use crate::traits::{ErrorResultExt, ResultExt};
