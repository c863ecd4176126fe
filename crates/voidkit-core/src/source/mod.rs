//! Triple sources.
//!
//! A [`TripleSource`] is the store the statistics are computed from. The
//! analyzer scans it twice: once through the predicate-filtered view for
//! `rdf:type` triples, then once in full. Each call starts a fresh lazy
//! scan, so sources must be restartable.
//!
//! - [`MemoryTripleSource`] - Vec-backed source for tests and embedding
//!
//! The HDT-backed source lives in `voidkit-adapters`.

mod memory;

pub use memory::MemoryTripleSource;

use voidkit_common::{Result, Triple};

/// A lazy sequence of triples. Any item may be a read error, which ends the run.
pub type TripleIter<'a> = Box<dyn Iterator<Item = Result<Triple>> + 'a>;

/// Read access to a collection of RDF triples.
pub trait TripleSource {
    /// Starts a full scan over every triple.
    ///
    /// # Errors
    ///
    /// Returns an error if the scan cannot be started.
    fn triples(&self) -> Result<TripleIter<'_>>;

    /// Starts a scan over the triples whose predicate is the IRI `predicate`.
    ///
    /// The returned iterator may borrow `predicate` for as long as it runs.
    ///
    /// # Errors
    ///
    /// Returns an error if the scan cannot be started.
    fn triples_with_predicate<'a>(&'a self, predicate: &'a str) -> Result<TripleIter<'a>>;

    /// Total number of triples, if the source knows it without scanning.
    fn triple_count_hint(&self) -> Option<u64> {
        None
    }
}

impl<T: TripleSource + ?Sized> TripleSource for &T {
    fn triples(&self) -> Result<TripleIter<'_>> {
        (**self).triples()
    }

    fn triples_with_predicate<'a>(&'a self, predicate: &'a str) -> Result<TripleIter<'a>> {
        (**self).triples_with_predicate(predicate)
    }

    fn triple_count_hint(&self) -> Option<u64> {
        (**self).triple_count_hint()
    }
}
