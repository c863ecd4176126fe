//! The class index.
//!
//! Pass 1 of a run reads every `rdf:type` triple and records, for each
//! typed resource, the set of classes it is declared to belong to. The
//! index is finished before pass 2 starts and is read-only from then on,
//! so class discovery and class-based counting never interleave.

use smallvec::SmallVec;
use voidkit_common::utils::hash::{FastHashMap, FastIndexMap};
use voidkit_common::vocab::rdf;
use voidkit_common::{Result, TermId};

use crate::progress::{Pass, ProgressObserver};
use crate::source::TripleSource;
use crate::storage::TermDictionary;

/// Default number of triples between progress notifications.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 10_000_000;

/// Most resources carry one or two types; keep those inline.
type ClassSet = SmallVec<[TermId; 2]>;

/// Resource -> set of declared classes.
///
/// Resources without any `rdf:type` triple are absent and report no classes.
#[derive(Debug, Default, Clone)]
pub struct ClassIndex {
    /// Typed resource -> its classes, without duplicates.
    classes: FastHashMap<TermId, ClassSet>,
    /// Class -> number of distinct resources declaring it, in first-seen order.
    instances: FastIndexMap<TermId, u64>,
    /// Number of `rdf:type` triples read while building.
    type_triples: u64,
}

impl ClassIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `resource` is declared an instance of `class`.
    ///
    /// Returns `false` if the membership was already known.
    pub fn insert(&mut self, resource: TermId, class: TermId) -> bool {
        let set = self.classes.entry(resource).or_default();
        if set.contains(&class) {
            return false;
        }
        set.push(class);
        *self.instances.entry(class).or_insert(0) += 1;
        true
    }

    /// Returns the classes of `resource`; empty if it has none.
    #[inline]
    #[must_use]
    pub fn classes_of(&self, resource: TermId) -> &[TermId] {
        self.classes
            .get(&resource)
            .map_or(&[][..], SmallVec::as_slice)
    }

    /// Returns true if `resource` has at least one class.
    #[must_use]
    pub fn is_typed(&self, resource: TermId) -> bool {
        self.classes.contains_key(&resource)
    }

    /// Number of typed resources.
    #[must_use]
    pub fn resource_count(&self) -> usize {
        self.classes.len()
    }

    /// Number of distinct classes.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.instances.len()
    }

    /// Iterates `(class, distinct instance count)` in first-seen order.
    pub fn classes(&self) -> impl Iterator<Item = (TermId, u64)> + '_ {
        self.instances.iter().map(|(&class, &count)| (class, count))
    }

    /// Number of `rdf:type` triples the builder read.
    #[must_use]
    pub fn type_triples(&self) -> u64 {
        self.type_triples
    }

    /// Returns true if no resource is typed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Builds a [`ClassIndex`] from the `rdf:type` view of a triple source.
#[derive(Debug, Clone)]
pub struct ClassIndexBuilder {
    progress_interval: u64,
}

impl Default for ClassIndexBuilder {
    fn default() -> Self {
        Self {
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl ClassIndexBuilder {
    /// Creates a builder with the default progress interval.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many triples pass between progress notifications.
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval.max(1);
        self
    }

    /// Runs pass 1.
    ///
    /// Subjects and classes are interned into `dictionary` so that pass 2
    /// can look them up by id.
    ///
    /// # Errors
    ///
    /// Any read error from the source aborts the pass.
    pub fn build<S: TripleSource + ?Sized>(
        &self,
        source: &S,
        dictionary: &mut TermDictionary,
        observer: &mut dyn ProgressObserver,
    ) -> Result<ClassIndex> {
        let mut index = ClassIndex::new();
        let mut skipped = 0u64;

        observer.pass_started(Pass::ClassIndex, None);
        tracing::info!("{}: reading rdf:type triples", Pass::ClassIndex);

        for triple in source.triples_with_predicate(rdf::TYPE)? {
            let triple = triple?;
            if !triple.predicate.is_iri(rdf::TYPE) || triple.subject.is_literal() {
                skipped += 1;
                continue;
            }

            let resource = dictionary.intern(triple.subject)?;
            let class = dictionary.intern(triple.object)?;
            index.insert(resource, class);
            index.type_triples += 1;

            if index.type_triples % self.progress_interval == 0 {
                tracing::debug!(
                    "{}: {} type triples processed",
                    Pass::ClassIndex,
                    index.type_triples
                );
                observer.progress(Pass::ClassIndex, index.type_triples);
            }
        }

        if skipped > 0 {
            tracing::debug!("{}: skipped {} unusable triples", Pass::ClassIndex, skipped);
        }
        tracing::info!(
            "{}: {} type triples, {} typed resources, {} classes",
            Pass::ClassIndex,
            index.type_triples,
            index.resource_count(),
            index.class_count()
        );
        observer.pass_finished(Pass::ClassIndex, index.type_triples);

        Ok(index)
    }
}
