use serde_json::Value;

use super::diagnostics::Caller;
use super::{field, Entry, EntrySet, Visibility};

/// Key of the scope built by [`user_scope`].
pub const USER_SCOPE_KEY: &str = "user";
/// Key of the scope built by [`system_scope`].
pub const SYSTEM_SCOPE_KEY: &str = "system";
/// Key of the dict built by [`validation`].
pub const VALIDATION_KEY: &str = "validation";

/// Named composite entry. A dict tagged with a visibility is a scope.
///
/// Merging two dicts is a recursive union: children with distinct keys are
/// all kept, children sharing a key are merged by their own rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Dict {
    key: String,
    visibility: Visibility,
    entries: Box<EntrySet>,
    received: bool,
}

impl Dict {
    /// Creates a public dict.
    pub fn new(key: impl Into<String>, entries: impl IntoIterator<Item = Entry>) -> Self {
        Self {
            key: key.into(),
            visibility: Visibility::Public,
            entries: Box::new(entries.into_iter().collect()),
            received: false,
        }
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[must_use]
    pub fn restricted(self) -> Self {
        self.with_visibility(Visibility::Restrict)
    }

    /// Marks a dict rebuilt from another process's DTO.
    pub(crate) fn received(mut self) -> Self {
        self.received = true;
        self
    }

    /// Whether this dict was rebuilt from a received DTO.
    #[inline]
    pub fn is_received(&self) -> bool {
        self.received
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline]
    pub fn entries(&self) -> &EntrySet {
        &self.entries
    }

    /// Adds a child entry, merging with a same-key child.
    pub fn add(&mut self, entry: Entry) {
        self.entries.add(entry);
    }

    /// Recursive union. `self` keeps its key and visibility.
    ///
    /// Children of a restricted `other` are added as restricted, so merging
    /// into a public dict never publishes them.
    pub fn merge(&mut self, other: Dict) {
        if other.visibility == Visibility::Public {
            self.entries.merge(*other.entries);
            return;
        }
        for entry in *other.entries {
            self.entries.add(entry.into_restricted());
        }
    }

    pub(crate) fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    /// Public children as a JSON object, `None` when restricted or empty.
    ///
    /// Visibility is enforced top-down: a restricted dict hides public
    /// children, and a public dict hides its restricted children.
    pub fn public_value(&self) -> Option<Value> {
        if self.visibility == Visibility::Restrict {
            return None;
        }

        let values = self.entries.public_values();
        if values.is_empty() {
            return None;
        }
        Some(Value::Object(values))
    }
}

/// Public dict entry.
#[inline]
pub fn dict(key: impl Into<String>, entries: impl IntoIterator<Item = Entry>) -> Entry {
    Dict::new(key, entries).into()
}

/// Caller-facing scope, rendered in DTOs under `"user"`.
#[inline]
pub fn user_scope(entries: impl IntoIterator<Item = Entry>) -> Entry {
    dict(USER_SCOPE_KEY, entries)
}

/// Internal scope, namespaced by the function that created it.
///
/// The result is a restricted `"system"` dict holding one restricted dict
/// keyed by the qualified name of the first caller outside this crate, so two
/// layers attaching the same field names never collide.
#[track_caller]
pub fn system_scope(entries: impl IntoIterator<Item = Entry>) -> Entry {
    let caller = Caller::locate(core::panic::Location::caller());
    let call = Dict::new(caller.scope_key(), entries).restricted();
    Dict::new(SYSTEM_SCOPE_KEY, [call.into()]).restricted().into()
}

/// Public `"validation"` dict of pre-formed `field -> message` failures.
pub fn validation<K, M>(failures: impl IntoIterator<Item = (K, M)>) -> Entry
where
    K: Into<String>,
    M: Into<String>,
{
    let entries = failures.into_iter().map(|(key, message)| {
        let message: String = message.into();
        field(key, message)
    });
    dict(VALIDATION_KEY, entries)
}
