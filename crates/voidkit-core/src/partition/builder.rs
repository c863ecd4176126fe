//! Counters -> partition tree.

use voidkit_common::{Result, Term, TermId};

use super::identifier::IdentifierGenerator;
use super::model::{
    ClassPartition, DatasetPartition, ObjectClassPartition, PartitionId, PartitionTree,
    PropertyPartition,
};
use crate::statistics::{ClassStats, Counters, ObjectClassKey, PropertyStats};
use crate::storage::TermDictionary;

/// Builds a [`PartitionTree`] from finished counters.
///
/// Nodes are created in a fixed order: the dataset, its property partitions,
/// then each class partition followed by its property and object-class
/// partitions. Within a level the order is the counters' first-seen order.
pub struct PartitionModelBuilder<'a> {
    dictionary: &'a TermDictionary,
    ids: IdentifierGenerator,
}

impl<'a> PartitionModelBuilder<'a> {
    /// Creates a builder resolving term ids through `dictionary`.
    pub fn new(dictionary: &'a TermDictionary, ids: IdentifierGenerator) -> Self {
        Self { dictionary, ids }
    }

    /// Builds the tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Internal`](voidkit_common::Error::Internal) if the
    /// counters reference a term the dictionary does not know.
    pub fn build(mut self, counters: &Counters) -> Result<PartitionTree> {
        let mode = self.ids.mode();
        let dataset_id = self.ids.dataset();
        let stats = &counters.dataset;

        let mut property_partitions = Vec::with_capacity(stats.predicate_counts.len());
        for (&predicate, &count) in &stats.predicate_counts {
            let property = self.term(predicate)?;
            property_partitions.push(PropertyPartition {
                id: self.ids.property(&dataset_id, property.as_str()),
                property,
                triples: count,
                object_class_partitions: Vec::new(),
            });
        }

        let mut class_partitions = Vec::with_capacity(counters.classes.len());
        for (&class, class_stats) in &counters.classes {
            if class_stats.entity_count() == 0 {
                continue;
            }
            class_partitions.push(self.class_partition(&dataset_id, class, class_stats)?);
        }

        Ok(PartitionTree {
            mode,
            dataset: DatasetPartition {
                id: dataset_id,
                triples: stats.total,
                distinct_subjects: stats.distinct_subjects(),
                properties: stats.distinct_predicates(),
                distinct_objects: stats.distinct_objects(),
                classes: class_partitions.len() as u64,
                property_partitions,
                class_partitions,
            },
        })
    }

    fn class_partition(
        &mut self,
        parent: &PartitionId,
        class: TermId,
        stats: &ClassStats,
    ) -> Result<ClassPartition> {
        let class = self.term(class)?;
        let id = self.ids.class(parent, class.as_str());

        let mut property_partitions = Vec::with_capacity(stats.properties.len());
        for (&predicate, property_stats) in &stats.properties {
            property_partitions.push(self.class_property(&id, predicate, property_stats)?);
        }

        Ok(ClassPartition {
            id,
            class,
            entities: stats.entity_count(),
            triples: stats.total,
            property_partitions,
        })
    }

    fn class_property(
        &mut self,
        parent: &PartitionId,
        predicate: TermId,
        stats: &PropertyStats,
    ) -> Result<PropertyPartition> {
        let property = self.term(predicate)?;
        let id = self.ids.property(parent, property.as_str());

        let mut object_class_partitions = Vec::with_capacity(stats.object_classes.len());
        for (&key, &count) in &stats.object_classes {
            let class = match key {
                ObjectClassKey::Class(class) => Some(self.term(class)?),
                ObjectClassKey::Untyped => None,
            };
            object_class_partitions.push(ObjectClassPartition {
                id: self.ids.object_class(&id, class.as_ref().map(Term::as_str)),
                class,
                triples: count,
            });
        }

        Ok(PropertyPartition {
            id,
            property,
            triples: stats.count,
            object_class_partitions,
        })
    }

    fn term(&self, id: TermId) -> Result<Term> {
        self.dictionary.term(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::ClassIndexBuilder;
    use crate::partition::{IdentifierMode, PartitionKind, hash_iri};
    use crate::progress::NoProgress;
    use crate::source::MemoryTripleSource;
    use crate::statistics::{CollectorOptions, StatisticsCollector};
    use voidkit_common::Error;
    use voidkit_common::vocab::rdf;

    const DATASET: &str = "http://example.org/dataset";

    fn ex(local: &str) -> Term {
        Term::iri(format!("http://example.org/{local}"))
    }

    fn rdf_type() -> Term {
        Term::iri(rdf::TYPE)
    }

    fn build(
        source: &MemoryTripleSource,
        mode: IdentifierMode,
        options: CollectorOptions,
    ) -> PartitionTree {
        let mut dictionary = TermDictionary::new();
        let index = ClassIndexBuilder::new()
            .build(source, &mut dictionary, &mut NoProgress)
            .unwrap();
        let counters = StatisticsCollector::new(&index, &mut dictionary, options)
            .collect(source, &mut NoProgress)
            .unwrap();
        PartitionModelBuilder::new(&dictionary, IdentifierGenerator::new(mode, DATASET))
            .build(&counters)
            .unwrap()
    }

    fn people() -> MemoryTripleSource {
        let mut source = MemoryTripleSource::new();
        source.add(ex("a"), rdf_type(), ex("Person"));
        source.add(ex("a"), ex("name"), Term::literal("Alice"));
        source.add(ex("a"), ex("knows"), ex("c"));
        source.add(ex("c"), rdf_type(), ex("Person"));
        source.add(ex("c"), rdf_type(), ex("Agent"));
        source.add(ex("b"), ex("name"), Term::literal("Bob"));
        source
    }

    #[test]
    fn test_empty_counters_give_a_bare_dataset() {
        let tree = build(
            &MemoryTripleSource::new(),
            IdentifierMode::UriReference,
            CollectorOptions::default(),
        );
        assert_eq!(tree.nodes().len(), 1);
        assert_eq!(tree.dataset.triples, 0);
        assert_eq!(tree.dataset.classes, 0);
        assert_eq!(tree.dataset.id, PartitionId::Uri(DATASET.to_string()));
    }

    #[test]
    fn test_dataset_node() {
        let tree = build(&people(), IdentifierMode::UriReference, CollectorOptions::default());
        let dataset = &tree.dataset;
        assert_eq!(dataset.triples, 6);
        assert_eq!(dataset.distinct_subjects, 3);
        assert_eq!(dataset.properties, 3);
        assert_eq!(dataset.classes, 2);

        let name = tree.property_partition("http://example.org/name").unwrap();
        assert_eq!(name.triples, 2);
        assert!(name.object_class_partitions.is_empty());
        assert_eq!(
            name.id,
            PartitionId::Uri(format!("{DATASET}/property/{}", hash_iri("http://example.org/name")))
        );
    }

    #[test]
    fn test_first_seen_order() {
        let tree = build(&people(), IdentifierMode::UriReference, CollectorOptions::default());
        let predicates: Vec<_> = tree
            .dataset
            .property_partitions
            .iter()
            .map(|p| p.property.as_str())
            .collect();
        assert_eq!(
            predicates,
            [rdf::TYPE, "http://example.org/name", "http://example.org/knows"]
        );

        let classes: Vec<_> = tree
            .dataset
            .class_partitions
            .iter()
            .map(|c| c.class.as_str())
            .collect();
        assert_eq!(classes, ["http://example.org/Person", "http://example.org/Agent"]);
    }

    #[test]
    fn test_class_partitions_and_object_classes() {
        let tree = build(&people(), IdentifierMode::UriReference, CollectorOptions::default());
        let person = tree.class_partition("http://example.org/Person").unwrap();
        assert_eq!(person.entities, 2);
        assert_eq!(person.triples, 5);

        let knows = person.property_partition("http://example.org/knows").unwrap();
        assert_eq!(knows.triples, 1);
        assert_eq!(knows.object_class_triples(Some("http://example.org/Person")), Some(1));
        assert_eq!(knows.object_class_triples(Some("http://example.org/Agent")), Some(1));
        assert_eq!(knows.object_class_triples(None), None);

        let class_uri = format!("{DATASET}/class/{}", hash_iri("http://example.org/Person"));
        assert_eq!(person.id, PartitionId::Uri(class_uri.clone()));
        assert_eq!(
            knows.id,
            PartitionId::Uri(format!("{class_uri}/property/{}", hash_iri("http://example.org/knows")))
        );

        let agent = tree.class_partition("http://example.org/Agent").unwrap();
        assert_eq!(agent.entities, 1);
        assert_eq!(agent.triples, 2);
    }

    #[test]
    fn test_untyped_bucket() {
        let options = CollectorOptions {
            track_untyped_objects: true,
            ..CollectorOptions::default()
        };
        let tree = build(&people(), IdentifierMode::UriReference, options);
        let person = tree.class_partition("http://example.org/Person").unwrap();
        let name = person.property_partition("http://example.org/name").unwrap();
        assert_eq!(name.object_class_triples(None), Some(1));

        let untyped = &name.object_class_partitions[0];
        assert!(untyped.class.is_none());
        let PartitionId::Uri(uri) = &untyped.id else {
            panic!("expected a URI");
        };
        assert!(uri.ends_with(&format!("/target/{}", hash_iri("__untyped__"))));
    }

    #[test]
    fn test_every_counter_key_yields_one_node() {
        let mut dictionary = TermDictionary::new();
        let source = people();
        let index = ClassIndexBuilder::new()
            .build(&source, &mut dictionary, &mut NoProgress)
            .unwrap();
        let counters = StatisticsCollector::new(&index, &mut dictionary, CollectorOptions::default())
            .collect(&source, &mut NoProgress)
            .unwrap();
        let tree = PartitionModelBuilder::new(
            &dictionary,
            IdentifierGenerator::new(IdentifierMode::UriReference, DATASET),
        )
        .build(&counters)
        .unwrap();

        let class_properties: usize = counters.classes.values().map(|c| c.properties.len()).sum();
        let object_classes: usize = counters
            .classes
            .values()
            .flat_map(|c| c.properties.values())
            .map(|p| p.object_classes.len())
            .sum();

        assert_eq!(tree.count(PartitionKind::Dataset), 1);
        assert_eq!(tree.count(PartitionKind::ClassPartition), counters.classes.len());
        assert_eq!(
            tree.count(PartitionKind::PropertyPartition),
            counters.dataset.predicate_counts.len() + class_properties
        );
        assert_eq!(tree.count(PartitionKind::ObjectClassPartition), object_classes);
    }

    #[test]
    fn test_blank_node_mode() {
        let tree = build(&people(), IdentifierMode::BlankNode, CollectorOptions::default());
        assert_eq!(tree.mode, IdentifierMode::BlankNode);

        let nodes = tree.nodes();
        assert!(nodes[0].id.is_uri());
        let mut labels: Vec<_> = nodes[1..].iter().map(|n| n.id.as_str()).collect();
        assert!(nodes[1..].iter().all(|n| !n.id.is_uri()));
        let before = labels.len();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), before);
    }

    #[test]
    fn test_uri_mode_is_deterministic() {
        let first = build(&people(), IdentifierMode::UriReference, CollectorOptions::default());
        let second = build(&people(), IdentifierMode::UriReference, CollectorOptions::default());
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_term_is_an_error() {
        let mut counters = Counters::new();
        counters.dataset.total = 1;
        counters.dataset.predicate_counts.insert(TermId::new(9), 1);

        let dictionary = TermDictionary::new();
        let result = PartitionModelBuilder::new(
            &dictionary,
            IdentifierGenerator::new(IdentifierMode::UriReference, DATASET),
        )
        .build(&counters);
        assert!(matches!(result, Err(Error::Internal(_))));
    }
}
