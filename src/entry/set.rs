use serde_json::{Map, Value};
use smallvec::SmallVec;

use super::Entry;

/// SmallVec-backed collection used for entries and trace hops.
///
/// Most errors carry only a handful of entries, which stay inline.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

/// Insertion-ordered entries with at most one entry per key.
///
/// Adding an entry whose key is already present merges the two through
/// [`Entry::insert`]; nothing is dropped or overwritten silently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntrySet {
    entries: ErrorVec<Entry>,
}

impl EntrySet {
    #[inline]
    pub fn new() -> Self {
        Self { entries: ErrorVec::new() }
    }

    /// Adds one entry, merging it into an existing entry with the same key.
    pub fn add(&mut self, entry: Entry) {
        match self.entries.iter_mut().find(|current| current.key() == entry.key()) {
            Some(current) => current.insert(entry),
            None => self.entries.push(entry),
        }
    }

    /// Merges every entry of `other` into `self`, in order.
    pub fn merge(&mut self, other: EntrySet) {
        self.extend(other);
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.key() == key)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Public values keyed by entry key; entries without public content are skipped.
    pub fn public_values(&self) -> Map<String, Value> {
        self.entries
            .iter()
            .filter_map(|entry| Some((entry.key().to_owned(), entry.public_value()?)))
            .collect()
    }

    /// Every value keyed by entry key, restricted entries included.
    pub fn log_values(&self) -> Map<String, Value> {
        self.entries
            .iter()
            .map(|entry| (entry.key().to_owned(), entry.log_value()))
            .collect()
    }
}

impl Extend<Entry> for EntrySet {
    fn extend<I: IntoIterator<Item = Entry>>(&mut self, iter: I) {
        for entry in iter {
            self.add(entry);
        }
    }
}

impl FromIterator<Entry> for EntrySet {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for EntrySet {
    type Item = Entry;
    type IntoIter = smallvec::IntoIter<[Entry; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a EntrySet {
    type Item = &'a Entry;
    type IntoIter = core::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
