//! Shorthand macros for building entries and errors.
//!
//! - [`macro@crate::fields`] - A list of public fields from `key => value` pairs.
//! - [`macro@crate::hint`] - A formatted hint entry.
//! - [`macro@crate::raise`] - [`Error::new`](crate::Error::new) with a formatted message.
//!
//! # Examples
//!
//! ```
//! use error_kind::kind::NOT_FOUND_ERROR;
//! use error_kind::{fields, hint, raise};
//!
//! let id = 7;
//! let err = raise!(&NOT_FOUND_ERROR, "order {} not found", id; fields!("order_id" => id));
//! let err = err.with([hint!("check order {id} exists")]);
//!
//! assert_eq!(err.message(), "order 7 not found");
//! assert_eq!(err.details().unwrap()["order_id"], 7);
//! ```

/// Builds a `Vec<Entry>` of public fields from `key => value` pairs.
///
/// Values go through `serde_json::Value::from`, so anything with a
/// `From` conversion into a JSON value is accepted.
///
/// ```
/// use error_kind::fields;
///
/// let entries = fields!("user_id" => 42, "plan" => "pro");
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].key(), "user_id");
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        ::std::vec::Vec::<$crate::entry::Entry>::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        ::std::vec![$($crate::entry::field($key, $value)),+]
    };
}

/// Creates a public hint entry with a formatted message.
///
/// ```
/// use error_kind::hint;
///
/// let retry_after = 30;
/// let entry = hint!("retry in {retry_after} seconds");
/// assert_eq!(entry.key(), "hint");
/// ```
#[macro_export]
macro_rules! hint {
    ($($arg:tt)*) => {
        $crate::entry::hint(::std::format!($($arg)*))
    };
}

/// Creates an [`Error`](crate::Error) with a formatted message.
///
/// Entries follow a `;` after the format arguments. The stack trace and
/// reverse-trace hop point at the macro invocation.
///
/// ```
/// use error_kind::kind::AUTH_ERROR;
/// use error_kind::entry::field;
/// use error_kind::raise;
///
/// let plain = raise!(&AUTH_ERROR, "token expired");
/// let user = "ada";
/// let detailed = raise!(&AUTH_ERROR, "token for {} expired", user; [field("user", user)]);
///
/// assert_eq!(plain.message(), "token expired");
/// assert_eq!(detailed.details().unwrap()["user"], "ada");
/// ```
#[macro_export]
macro_rules! raise {
    ($kind:expr, $fmt:literal $(, $arg:expr)* ; $entries:expr $(,)?) => {
        $crate::Error::new($kind, ::std::format!($fmt $(, $arg)*), $entries)
    };
    ($kind:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::Error::new($kind, ::std::format!($fmt $(, $arg)*), ::core::iter::empty::<$crate::entry::Entry>())
    };
}
