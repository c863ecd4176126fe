//! Property-based tests for the statistics and partition invariants.
//!
//! Datasets are drawn from a small universe of subjects, predicates, and
//! classes so that multi-typed resources and repeated predicates are common.

use proptest::prelude::*;
use voidkit_common::vocab::rdf;
use voidkit_common::{Term, Triple};
use voidkit_core::{
    ClassIndexBuilder, CollectorOptions, Counters, IdentifierGenerator, IdentifierMode,
    MemoryTripleSource, NoProgress, ObjectClassKey, PartitionKind, PartitionModelBuilder,
    PartitionTree, StatisticsCollector, TermDictionary,
};

const DATASET: &str = "http://example.org/dataset";

fn resource(n: u8) -> Term {
    if n % 4 == 3 {
        Term::blank(format!("b{n}"))
    } else {
        Term::iri(format!("http://example.org/r{n}"))
    }
}

fn class(n: u8) -> Term {
    Term::iri(format!("http://example.org/C{n}"))
}

fn predicate(n: u8) -> Term {
    Term::iri(format!("http://example.org/p{n}"))
}

/// (kind, subject, predicate, object) -> triple.
fn triple((kind, s, p, o): (u8, u8, u8, u8)) -> Triple {
    match kind {
        0 => Triple::new(resource(s), Term::iri(rdf::TYPE), class(o % 3)),
        1 => Triple::new(resource(s), predicate(p), resource(o)),
        _ => Triple::new(resource(s), predicate(p), Term::literal(&format!("v{o}"))),
    }
}

fn dataset() -> impl Strategy<Value = MemoryTripleSource> {
    prop::collection::vec((0u8..3, 0u8..6, 0u8..4, 0u8..6), 0..60)
        .prop_map(|raw| raw.into_iter().map(triple).collect())
}

/// Every resource gets at most one class, derived from its own number.
fn single_typed_dataset() -> impl Strategy<Value = MemoryTripleSource> {
    prop::collection::vec((0u8..3, 0u8..6, 0u8..4, 0u8..6), 0..60).prop_map(|raw| {
        raw.into_iter()
            .map(|(kind, s, p, o)| triple((kind, s, p, if kind == 0 { s } else { o })))
            .collect()
    })
}

struct Run {
    dictionary: TermDictionary,
    counters: Counters,
}

fn run(source: &MemoryTripleSource, options: CollectorOptions) -> Run {
    let mut dictionary = TermDictionary::new();
    let index = ClassIndexBuilder::new()
        .build(source, &mut dictionary, &mut NoProgress)
        .unwrap();
    let counters = StatisticsCollector::new(&index, &mut dictionary, options)
        .collect(source, &mut NoProgress)
        .unwrap();
    Run {
        dictionary,
        counters,
    }
}

fn tree(run: &Run, mode: IdentifierMode) -> PartitionTree {
    PartitionModelBuilder::new(&run.dictionary, IdentifierGenerator::new(mode, DATASET))
        .build(&run.counters)
        .unwrap()
}

fn untyped_tracking() -> CollectorOptions {
    CollectorOptions {
        track_untyped_objects: true,
        ..CollectorOptions::default()
    }
}

// =============================================================================
// Counter Properties
// =============================================================================

proptest! {
    /// The dataset total is the number of triples one iteration yields.
    #[test]
    fn prop_total_matches_source(source in dataset()) {
        let run = run(&source, CollectorOptions::default());
        prop_assert_eq!(run.counters.dataset.total, source.len() as u64);
    }

    /// Predicate counts partition the dataset.
    #[test]
    fn prop_predicate_counts_sum_to_total(source in dataset()) {
        let dataset = run(&source, CollectorOptions::default()).counters.dataset;
        prop_assert_eq!(dataset.predicate_counts.values().sum::<u64>(), dataset.total);
        prop_assert_eq!(dataset.predicate_counts.len() as u64, dataset.distinct_predicates());
    }

    /// Property counts partition each class total, and entities are subjects.
    #[test]
    fn prop_class_totals(source in dataset()) {
        let counters = run(&source, CollectorOptions::default()).counters;
        for class in counters.classes.values() {
            let sum: u64 = class.properties.values().map(|p| p.count).sum();
            prop_assert_eq!(sum, class.total);
            prop_assert!(class.entity_count() > 0);
            prop_assert!(class.entities.is_subset(&counters.dataset.subjects));
        }
    }

    /// Disabling object classes only empties the object-class cells.
    #[test]
    fn prop_object_classes_are_independent(source in dataset()) {
        let with = run(&source, CollectorOptions::default()).counters;
        let without = run(
            &source,
            CollectorOptions {
                object_class_partitions: false,
                ..CollectorOptions::default()
            },
        )
        .counters;

        prop_assert_eq!(with.dataset.total, without.dataset.total);
        prop_assert_eq!(&with.dataset.subjects, &without.dataset.subjects);
        prop_assert_eq!(&with.dataset.objects, &without.dataset.objects);
        prop_assert_eq!(&with.dataset.predicate_counts, &without.dataset.predicate_counts);
        prop_assert_eq!(with.classes.len(), without.classes.len());
        for (class, stats) in &with.classes {
            let other = &without.classes[class];
            prop_assert_eq!(stats.total, other.total);
            prop_assert_eq!(&stats.entities, &other.entities);
            for (predicate, property) in &stats.properties {
                let other = &other.properties[predicate];
                prop_assert_eq!(property.count, other.count);
                prop_assert!(other.object_classes.is_empty());
            }
        }
    }

    /// With untyped tracking every object lands in at least one cell.
    #[test]
    fn prop_untyped_tracking_covers_every_object(source in dataset()) {
        let counters = run(&source, untyped_tracking()).counters;
        for class in counters.classes.values() {
            for property in class.properties.values() {
                prop_assert!(property.object_class_total() >= property.count);
            }
        }
    }

    /// ...and exactly one cell when no object has more than one class.
    #[test]
    fn prop_untyped_tracking_is_exact_for_single_types(source in single_typed_dataset()) {
        let counters = run(&source, untyped_tracking()).counters;
        for class in counters.classes.values() {
            for property in class.properties.values() {
                prop_assert_eq!(property.object_class_total(), property.count);
            }
        }
    }

    /// Without tracking there are never untyped cells.
    #[test]
    fn prop_no_untyped_cells_by_default(source in dataset()) {
        let counters = run(&source, CollectorOptions::default()).counters;
        let untyped = counters
            .classes
            .values()
            .flat_map(|c| c.properties.values())
            .any(|p| p.object_classes.contains_key(&ObjectClassKey::Untyped));
        prop_assert!(!untyped);
    }
}

// =============================================================================
// Partition Properties
// =============================================================================

proptest! {
    /// Every counter key yields exactly one node.
    #[test]
    fn prop_partition_totality(source in dataset()) {
        let run = run(&source, untyped_tracking());
        let tree = tree(&run, IdentifierMode::UriReference);
        let counters = &run.counters;

        let class_properties: usize =
            counters.classes.values().map(|c| c.properties.len()).sum();
        let cells: usize = counters
            .classes
            .values()
            .flat_map(|c| c.properties.values())
            .map(|p| p.object_classes.len())
            .sum();

        prop_assert_eq!(tree.count(PartitionKind::Dataset), 1);
        prop_assert_eq!(tree.count(PartitionKind::ClassPartition), counters.classes.len());
        prop_assert_eq!(
            tree.count(PartitionKind::PropertyPartition),
            counters.dataset.predicate_counts.len() + class_properties
        );
        prop_assert_eq!(tree.count(PartitionKind::ObjectClassPartition), cells);
        prop_assert_eq!(tree.dataset.classes, counters.classes.len() as u64);
    }

    /// URI-mode identifiers depend only on the data.
    #[test]
    fn prop_uri_identifiers_are_deterministic(source in dataset()) {
        let first = tree(&run(&source, CollectorOptions::default()), IdentifierMode::UriReference);
        let second = tree(&run(&source, CollectorOptions::default()), IdentifierMode::UriReference);
        prop_assert_eq!(first, second);
    }

    /// Identifiers never repeat within one document, in either mode.
    #[test]
    fn prop_identifiers_are_unique(source in dataset()) {
        let run = run(&source, untyped_tracking());
        for mode in [IdentifierMode::UriReference, IdentifierMode::BlankNode] {
            let tree = tree(&run, mode);
            let nodes = tree.nodes();
            let mut ids: Vec<_> = nodes.iter().map(|n| n.id).collect();
            let before = ids.len();
            ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
            ids.dedup();
            prop_assert_eq!(ids.len(), before);
        }
    }
}
