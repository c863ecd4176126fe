//! Partition node types.

use serde::Serialize;
use std::fmt;
use voidkit_common::Term;

use super::identifier::IdentifierMode;

/// Name of a partition node in the output document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PartitionId {
    /// An IRI.
    Uri(String),
    /// A blank node label, without `_:`.
    Blank(String),
}

impl PartitionId {
    /// Returns true for IRI identifiers.
    #[must_use]
    pub fn is_uri(&self) -> bool {
        matches!(self, Self::Uri(_))
    }

    /// The IRI or label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Uri(s) | Self::Blank(s) => s,
        }
    }
}

impl fmt::Display for PartitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uri(uri) => write!(f, "<{uri}>"),
            Self::Blank(label) => write!(f, "_:{label}"),
        }
    }
}

/// The four kinds of node in a VOID description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PartitionKind {
    /// The described dataset itself.
    Dataset,
    /// Triples whose subject has a given class.
    ClassPartition,
    /// Triples with a given predicate, optionally scoped to a class.
    PropertyPartition,
    /// Triples of a class property partition whose object has a given class.
    ObjectClassPartition,
}

/// Breakdown of a class property partition by object class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectClassPartition {
    /// Node identifier.
    pub id: PartitionId,
    /// The object class; `None` for the untyped bucket.
    pub class: Option<Term>,
    /// Number of triples.
    pub triples: u64,
}

/// Triples sharing a predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyPartition {
    /// Node identifier.
    pub id: PartitionId,
    /// The predicate.
    pub property: Term,
    /// Number of triples.
    pub triples: u64,
    /// Object-class breakdown. Always empty at dataset level.
    pub object_class_partitions: Vec<ObjectClassPartition>,
}

/// Triples whose subject has a given class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassPartition {
    /// Node identifier.
    pub id: PartitionId,
    /// The class.
    pub class: Term,
    /// Number of distinct instances.
    pub entities: u64,
    /// Number of triples with an instance as subject.
    pub triples: u64,
    /// Per-predicate partitions.
    pub property_partitions: Vec<PropertyPartition>,
}

/// The root node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetPartition {
    /// Node identifier (the dataset IRI).
    pub id: PartitionId,
    /// Number of triples.
    pub triples: u64,
    /// Number of distinct subjects.
    pub distinct_subjects: u64,
    /// Number of distinct predicates.
    pub properties: u64,
    /// Number of distinct objects.
    pub distinct_objects: u64,
    /// Number of class partitions.
    pub classes: u64,
    /// Dataset-level property partitions.
    pub property_partitions: Vec<PropertyPartition>,
    /// Class partitions.
    pub class_partitions: Vec<ClassPartition>,
}

/// A borrowed, kind-tagged view of any node in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionNode<'a> {
    /// Node kind.
    pub kind: PartitionKind,
    /// Node identifier.
    pub id: &'a PartitionId,
    /// The class or property the node describes; `None` for the dataset
    /// and the untyped bucket.
    pub resource: Option<&'a Term>,
    /// Number of triples.
    pub triples: u64,
}

/// A complete VOID description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartitionTree {
    /// How the identifiers were generated.
    pub mode: IdentifierMode,
    /// The root node.
    pub dataset: DatasetPartition,
}

impl PartitionTree {
    /// All nodes, parents before children, in build order.
    #[must_use]
    pub fn nodes(&self) -> Vec<PartitionNode<'_>> {
        let dataset = &self.dataset;
        let mut nodes = vec![PartitionNode {
            kind: PartitionKind::Dataset,
            id: &dataset.id,
            resource: None,
            triples: dataset.triples,
        }];

        for property in &dataset.property_partitions {
            push_property(&mut nodes, property);
        }
        for class in &dataset.class_partitions {
            nodes.push(PartitionNode {
                kind: PartitionKind::ClassPartition,
                id: &class.id,
                resource: Some(&class.class),
                triples: class.triples,
            });
            for property in &class.property_partitions {
                push_property(&mut nodes, property);
            }
        }
        nodes
    }

    /// Number of nodes of `kind`.
    #[must_use]
    pub fn count(&self, kind: PartitionKind) -> usize {
        self.nodes().iter().filter(|n| n.kind == kind).count()
    }

    /// Finds the class partition for the class IRI `class`.
    #[must_use]
    pub fn class_partition(&self, class: &str) -> Option<&ClassPartition> {
        self.dataset
            .class_partitions
            .iter()
            .find(|c| c.class.as_str() == class)
    }

    /// Finds the dataset-level property partition for the predicate IRI `property`.
    #[must_use]
    pub fn property_partition(&self, property: &str) -> Option<&PropertyPartition> {
        self.dataset
            .property_partitions
            .iter()
            .find(|p| p.property.as_str() == property)
    }
}

impl ClassPartition {
    /// Finds the property partition for the predicate IRI `property`.
    #[must_use]
    pub fn property_partition(&self, property: &str) -> Option<&PropertyPartition> {
        self.property_partitions
            .iter()
            .find(|p| p.property.as_str() == property)
    }
}

impl PropertyPartition {
    /// Triple count of the object-class partition for `class` (`None` = untyped).
    #[must_use]
    pub fn object_class_triples(&self, class: Option<&str>) -> Option<u64> {
        self.object_class_partitions
            .iter()
            .find(|oc| oc.class.as_ref().map(Term::as_str) == class)
            .map(|oc| oc.triples)
    }
}

fn push_property<'a>(nodes: &mut Vec<PartitionNode<'a>>, property: &'a PropertyPartition) {
    nodes.push(PartitionNode {
        kind: PartitionKind::PropertyPartition,
        id: &property.id,
        resource: Some(&property.property),
        triples: property.triples,
    });
    for object_class in &property.object_class_partitions {
        nodes.push(PartitionNode {
            kind: PartitionKind::ObjectClassPartition,
            id: &object_class.id,
            resource: object_class.class.as_ref(),
            triples: object_class.triples,
        });
    }
}
