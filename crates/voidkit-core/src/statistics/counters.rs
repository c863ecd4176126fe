//! Counter tables.
//!
//! Sparse map-of-maps keyed by interned term ids. Maps preserve first-seen
//! order; distinct-value trackers are exact sets.

use serde::Serialize;
use voidkit_common::utils::hash::{FastHashSet, FastIndexMap};
use voidkit_common::TermId;

/// Key of an object-class cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ObjectClassKey {
    /// Objects declared an instance of this class.
    Class(TermId),
    /// Literal objects and resources without a class.
    Untyped,
}

/// Per-predicate counters.
#[derive(Debug, Default, Clone)]
pub struct PropertyStats {
    /// Number of triples.
    pub count: u64,
    /// Object class -> number of triples. Only filled for class-scoped stats.
    pub object_classes: FastIndexMap<ObjectClassKey, u64>,
}

impl PropertyStats {
    /// Sum over the object-class cells.
    #[must_use]
    pub fn object_class_total(&self) -> u64 {
        self.object_classes.values().sum()
    }
}

/// Dataset-level counters.
#[derive(Debug, Default, Clone)]
pub struct DatasetStats {
    /// Number of triples seen.
    pub total: u64,
    /// Distinct subjects.
    pub subjects: FastHashSet<TermId>,
    /// Distinct predicates.
    pub predicates: FastHashSet<TermId>,
    /// Distinct objects.
    pub objects: FastHashSet<TermId>,
    /// Predicate -> number of triples.
    pub predicate_counts: FastIndexMap<TermId, u64>,
}

impl DatasetStats {
    /// Number of distinct subjects.
    #[must_use]
    pub fn distinct_subjects(&self) -> u64 {
        self.subjects.len() as u64
    }

    /// Number of distinct predicates.
    #[must_use]
    pub fn distinct_predicates(&self) -> u64 {
        self.predicates.len() as u64
    }

    /// Number of distinct objects.
    #[must_use]
    pub fn distinct_objects(&self) -> u64 {
        self.objects.len() as u64
    }
}

/// Counters for one class.
#[derive(Debug, Default, Clone)]
pub struct ClassStats {
    /// Distinct subjects having the class.
    pub entities: FastHashSet<TermId>,
    /// Triples whose subject has the class.
    pub total: u64,
    /// Predicate -> counters.
    pub properties: FastIndexMap<TermId, PropertyStats>,
}

impl ClassStats {
    /// Number of distinct entities.
    #[must_use]
    pub fn entity_count(&self) -> u64 {
        self.entities.len() as u64
    }
}

/// Everything pass 2 produces.
#[derive(Debug, Default, Clone)]
pub struct Counters {
    /// Dataset-level counters.
    pub dataset: DatasetStats,
    /// Class -> counters, in first-seen order.
    pub classes: FastIndexMap<TermId, ClassStats>,
}

impl Counters {
    /// Creates empty counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the counters for `class`, if any triple was attributed to it.
    #[must_use]
    pub fn class(&self, class: TermId) -> Option<&ClassStats> {
        self.classes.get(&class)
    }

    /// Number of nested counter cells: one per (class, predicate) pair
    /// plus one per (class, predicate, object class) cell.
    ///
    /// This is the term that grows fastest on heterogeneous data.
    #[must_use]
    pub fn cell_count(&self) -> u64 {
        self.classes
            .values()
            .flat_map(|class| class.properties.values())
            .map(|prop| 1 + prop.object_classes.len() as u64)
            .sum()
    }

    /// Sum of the per-class triple totals. May exceed the dataset total
    /// when subjects have several classes.
    #[must_use]
    pub fn class_triple_total(&self) -> u64 {
        self.classes.values().map(|c| c.total).sum()
    }
}
