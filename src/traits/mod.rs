//! Extension traits for propagating errors through the model.
//!
//! - [`ResultExt`]: `.propagate(..)` / `.propagate_as(..)` on any `Result`
//!   whose error implements `std::error::Error`
//! - [`ErrorResultExt`]: entry and kind adjustments on `Result<T, Error>`
//!
//! # Examples
//!
//! ```
//! use error_kind::entry::field;
//! use error_kind::kind::VALIDATION_ERROR;
//! use error_kind::traits::{ErrorResultExt, ResultExt};
//!
//! fn parse_age(raw: &str) -> error_kind::Result<u8> {
//!     raw.parse::<u8>().propagate_as(&VALIDATION_ERROR, "age must be a small number")
//! }
//!
//! let err = parse_age("-3").with_entries([field("age", "-3")]).unwrap_err();
//! assert!(err.is(&VALIDATION_ERROR));
//! assert_eq!(err.details().unwrap()["age"], "-3");
//! ```

pub mod result_ext;

pub use result_ext::{ErrorResultExt, ResultExt};
