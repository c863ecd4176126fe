//! In-memory triple source.

use std::sync::Arc;

use voidkit_common::utils::hash::{FastHashMap, FastHashSet};
use voidkit_common::{Result, Term, Triple};

use super::{TripleIter, TripleSource};

/// A triple source that keeps every triple in a `Vec`.
///
/// Behaves like an RDF graph: adding a triple twice stores it once.
/// A predicate index keeps the filtered view from scanning everything.
#[derive(Debug, Default, Clone)]
pub struct MemoryTripleSource {
    /// Triples in insertion order.
    triples: Vec<Triple>,
    /// Membership set for de-duplication.
    seen: FastHashSet<Triple>,
    /// Predicate IRI -> positions in `triples`.
    predicate_index: FastHashMap<Arc<str>, Vec<usize>>,
}

impl MemoryTripleSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a triple. Returns `false` if it was already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.seen.contains(&triple) {
            return false;
        }
        let position = self.triples.len();
        if let Term::Iri(predicate) = &triple.predicate {
            self.predicate_index
                .entry(Arc::clone(predicate))
                .or_default()
                .push(position);
        }
        self.seen.insert(triple.clone());
        self.triples.push(triple);
        true
    }

    /// Adds a triple from its parts.
    pub fn add(&mut self, subject: Term, predicate: Term, object: Term) -> bool {
        self.insert(Triple::new(subject, predicate, object))
    }

    /// Returns the number of stored triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if no triples are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}

impl FromIterator<Triple> for MemoryTripleSource {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut source = Self::new();
        for triple in iter {
            source.insert(triple);
        }
        source
    }
}

impl TripleSource for MemoryTripleSource {
    fn triples(&self) -> Result<TripleIter<'_>> {
        Ok(Box::new(self.triples.iter().cloned().map(Ok)))
    }

    fn triples_with_predicate<'a>(&'a self, predicate: &'a str) -> Result<TripleIter<'a>> {
        let positions = self
            .predicate_index
            .get(predicate)
            .map_or(&[][..], Vec::as_slice);
        Ok(Box::new(
            positions.iter().map(|&i| Ok(self.triples[i].clone())),
        ))
    }

    fn triple_count_hint(&self) -> Option<u64> {
        Some(self.triples.len() as u64)
    }
}
