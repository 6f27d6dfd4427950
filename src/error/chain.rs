//! Classification over arbitrary `std::error::Error` chains.

use std::error::Error as StdError;

use super::Error;
use crate::kind::Kind;

/// Iterator over an error and its `source()` chain.
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Chain<'a> {
    pub fn new(head: &'a (dyn StdError + 'static)) -> Self {
        Self { next: Some(head) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// Returns the outermost [`Error`] in the chain.
///
/// Outer layers may have reclassified inner ones, so the outermost kind is the
/// authoritative classification.
pub fn classify<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a Error> {
    Chain::new(err).find_map(|link| link.downcast_ref::<Error>())
}

/// Returns the outermost [`Error`] when it is classified under `kind`.
pub fn find_kind<'a>(err: &'a (dyn StdError + 'static), kind: &Kind) -> Option<&'a Error> {
    classify(err).filter(|found| found.is(kind))
}

/// Returns `true` when the chain's classification falls under `kind`.
///
/// Errors that never went through this crate are unclassified and yield `false`.
#[inline]
pub fn is_kind(err: &(dyn StdError + 'static), kind: &Kind) -> bool {
    find_kind(err, kind).is_some()
}
