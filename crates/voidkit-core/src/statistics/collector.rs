//! The aggregation engine.
//!
//! Pass 2 of a run. Every triple updates the dataset counters; triples whose
//! subject is typed also update one class partition per subject class, and
//! (when enabled) the object-class cells of the matching class property.
//! Per-triple work is O(|classes(s)| x |classes(o)|).

use voidkit_common::{Result, Triple};

use super::counters::{Counters, ObjectClassKey};
use crate::index::ClassIndex;
use crate::index::class_index::DEFAULT_PROGRESS_INTERVAL;
use crate::progress::{Pass, ProgressObserver};
use crate::source::TripleSource;
use crate::storage::TermDictionary;

/// What the collector computes beyond the mandatory counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectorOptions {
    /// Fill the object-class cells of class-scoped property stats.
    pub object_class_partitions: bool,
    /// Count literal and untyped objects in an [`ObjectClassKey::Untyped`] cell.
    /// Only meaningful together with `object_class_partitions`.
    pub track_untyped_objects: bool,
    /// Triples between progress notifications.
    pub progress_interval: u64,
}

impl Default for CollectorOptions {
    fn default() -> Self {
        Self {
            object_class_partitions: true,
            track_untyped_objects: false,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

/// Fills [`Counters`] from a stream of triples.
pub struct StatisticsCollector<'a> {
    class_index: &'a ClassIndex,
    dictionary: &'a mut TermDictionary,
    options: CollectorOptions,
    counters: Counters,
}

impl<'a> StatisticsCollector<'a> {
    /// Creates a collector reading class membership from `class_index`.
    ///
    /// `dictionary` must be the one the index was built with.
    pub fn new(
        class_index: &'a ClassIndex,
        dictionary: &'a mut TermDictionary,
        options: CollectorOptions,
    ) -> Self {
        Self {
            class_index,
            dictionary,
            options,
            counters: Counters::new(),
        }
    }

    /// Adds one triple to the counters.
    ///
    /// # Errors
    ///
    /// Fails only if the term dictionary is full.
    pub fn record(&mut self, triple: Triple) -> Result<()> {
        let object_is_literal = triple.object.is_literal();
        let s = self.dictionary.intern(triple.subject)?;
        let p = self.dictionary.intern(triple.predicate)?;
        let o = self.dictionary.intern(triple.object)?;

        let dataset = &mut self.counters.dataset;
        dataset.total += 1;
        dataset.subjects.insert(s);
        dataset.predicates.insert(p);
        dataset.objects.insert(o);
        *dataset.predicate_counts.entry(p).or_insert(0) += 1;

        let index = self.class_index;
        let subject_classes = index.classes_of(s);
        if subject_classes.is_empty() {
            return Ok(());
        }

        let object_classes = if self.options.object_class_partitions && !object_is_literal {
            index.classes_of(o)
        } else {
            &[][..]
        };
        let count_untyped = self.options.object_class_partitions
            && self.options.track_untyped_objects
            && object_classes.is_empty();

        for &class in subject_classes {
            let stats = self.counters.classes.entry(class).or_default();
            stats.entities.insert(s);
            stats.total += 1;

            let property = stats.properties.entry(p).or_default();
            property.count += 1;

            for &object_class in object_classes {
                *property
                    .object_classes
                    .entry(ObjectClassKey::Class(object_class))
                    .or_insert(0) += 1;
            }
            if count_untyped {
                *property
                    .object_classes
                    .entry(ObjectClassKey::Untyped)
                    .or_insert(0) += 1;
            }
        }

        Ok(())
    }

    /// Number of triples recorded so far.
    #[must_use]
    pub fn processed(&self) -> u64 {
        self.counters.dataset.total
    }

    /// Counters collected so far.
    #[must_use]
    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    /// Consumes the collector, returning its counters.
    #[must_use]
    pub fn finish(self) -> Counters {
        self.counters
    }

    /// Runs pass 2 over the full scan of `source`.
    ///
    /// # Errors
    ///
    /// The first read error aborts the pass; no partial counters are returned.
    pub fn collect<S: TripleSource + ?Sized>(
        mut self,
        source: &S,
        observer: &mut dyn ProgressObserver,
    ) -> Result<Counters> {
        let interval = self.options.progress_interval.max(1);
        let expected = source.triple_count_hint();

        observer.pass_started(Pass::Aggregation, expected);
        match expected {
            Some(n) => tracing::info!("{}: {} triples to process", Pass::Aggregation, n),
            None => tracing::info!("{}: scanning all triples", Pass::Aggregation),
        }

        for triple in source.triples()? {
            self.record(triple?)?;

            let processed = self.processed();
            if processed % interval == 0 {
                tracing::debug!(
                    "{}: {} triples processed, {} classes, {} distinct terms",
                    Pass::Aggregation,
                    processed,
                    self.counters.classes.len(),
                    self.dictionary.len()
                );
                observer.progress(Pass::Aggregation, processed);
            }
        }

        let processed = self.processed();
        tracing::info!(
            "{}: {} triples, {} class partitions",
            Pass::Aggregation,
            processed,
            self.counters.classes.len()
        );
        observer.pass_finished(Pass::Aggregation, processed);

        Ok(self.finish())
    }
}
