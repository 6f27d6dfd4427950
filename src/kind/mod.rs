//! Hierarchical error classification.
//!
//! A [`Kind`] is a named, coded node in a forest of error classifications.
//! Kinds are declared as `static` items so that every [`Error`](crate::Error)
//! can reference its classification by `&'static Kind`, and identity is the
//! address of that static:
//!
//! ```
//! use error_kind::kind::{Kind, USER_ERROR};
//!
//! static PAYMENT_DECLINED: Kind = Kind::new("PaymentDeclined", "P00001")
//!     .with_description("The payment provider refused the charge.")
//!     .with_status(402)
//!     .with_parent(&USER_ERROR);
//!
//! assert!(PAYMENT_DECLINED.is(&USER_ERROR));
//! assert_eq!(PAYMENT_DECLINED.hierarchy(), "PaymentDeclined::UserError::Error");
//! assert_eq!(PAYMENT_DECLINED.status_code(), 402);
//! ```
//!
//! Classification is always answered by [`Kind::is`], which walks the ancestor
//! chain. Nothing in this crate inspects wrapper types to classify failures.

use core::fmt;

mod builtin;
pub mod registry;

pub use builtin::*;
pub use registry::{
    find_by_code, find_by_name, freeze, get_by_code, get_by_name, register, registry, Registry,
    RegistryError,
};

/// Separator placed between kind names in [`Kind::hierarchy`].
pub const KIND_SEPARATOR: &str = "::";

/// Status reported by [`Kind::status_code`] when no kind in the chain sets one.
pub const DEFAULT_STATUS_CODE: u16 = 500;

/// A node of the error classification forest.
pub struct Kind {
    name: &'static str,
    code: &'static str,
    description: &'static str,
    status: Option<u16>,
    parent: Option<&'static Kind>,
}

impl Kind {
    /// Creates a root kind without description, status hint or parent.
    #[must_use]
    pub const fn new(name: &'static str, code: &'static str) -> Self {
        Self { name, code, description: "", status: None, parent: None }
    }

    /// Sets the human-readable description shown in catalogs and logs.
    #[must_use]
    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// Sets the HTTP status hint used by this kind and its descendants.
    #[must_use]
    pub const fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Places this kind under `parent` in the classification forest.
    #[must_use]
    pub const fn with_parent(mut self, parent: &'static Kind) -> Self {
        self.parent = Some(parent);
        self
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn code(&self) -> &'static str {
        self.code
    }

    #[inline]
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Returns the status hint set on this kind only, ignoring ancestors.
    #[inline]
    pub fn status_hint(&self) -> Option<u16> {
        self.status
    }

    #[inline]
    pub fn parent(&self) -> Option<&'static Kind> {
        self.parent
    }

    /// Iterates from `self` up to its root, `self` first.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors { next: Some(self) }
    }

    /// Returns the root of the tree this kind belongs to.
    pub fn root(&self) -> &Kind {
        self.ancestors().last().unwrap_or(self)
    }

    /// Names from `self` to the root joined by [`KIND_SEPARATOR`].
    ///
    /// This string is the `kind` tag of the wire format.
    pub fn hierarchy(&self) -> String {
        let mut out = String::with_capacity(32);
        for (depth, kind) in self.ancestors().enumerate() {
            if depth > 0 {
                out.push_str(KIND_SEPARATOR);
            }
            out.push_str(kind.name);
        }
        out
    }

    /// First explicit status hint from `self` towards the root.
    ///
    /// Falls back to [`DEFAULT_STATUS_CODE`].
    pub fn status_code(&self) -> u16 {
        self.ancestors()
            .find_map(|kind| kind.status)
            .unwrap_or(DEFAULT_STATUS_CODE)
    }

    /// Returns `true` when `other` is `self` or one of its ancestors.
    pub fn is(&self, other: &Kind) -> bool {
        self.ancestors().any(|kind| core::ptr::eq(kind, other))
    }
}

impl PartialEq for Kind {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self, other)
    }
}

impl Eq for Kind {}

impl core::hash::Hash for Kind {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        core::ptr::hash(self, state);
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Kind")
            .field("name", &self.name)
            .field("code", &self.code)
            .field("status", &self.status)
            .field("hierarchy", &self.hierarchy())
            .finish()
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Iterator over a kind and its ancestors, created by [`Kind::ancestors`].
#[derive(Clone)]
pub struct Ancestors<'a> {
    next: Option<&'a Kind>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Kind;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent;
        Some(current)
    }
}
