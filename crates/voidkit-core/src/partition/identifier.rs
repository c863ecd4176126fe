//! Partition identifiers.
//!
//! In URI mode a partition's IRI is its parent's IRI plus a fixed path
//! segment and the MD5 of the described resource, so arbitrary class and
//! property IRIs never end up embedded in another IRI. In blank-node mode
//! partitions get document-local labels. Either way the described resource
//! is re-emitted with `void:class` / `void:property`.
//!
//! Collisions between digests of distinct IRIs are not detected.

use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};

use super::model::PartitionId;

/// Text hashed in place of a class for the untyped object bucket.
pub const UNTYPED_MARKER: &str = "__untyped__";

/// How partition identifiers are produced. Fixed for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierMode {
    /// Hash-based IRIs under the dataset IRI. Stable across runs.
    #[default]
    UriReference,
    /// Blank nodes, unique within one output document.
    BlankNode,
}

/// Returns the lowercase hex MD5 digest of `iri`.
#[must_use]
pub fn hash_iri(iri: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(iri.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Hands out partition identifiers for one output document.
#[derive(Debug, Clone)]
pub struct IdentifierGenerator {
    mode: IdentifierMode,
    dataset_uri: String,
    next_blank: u64,
}

impl IdentifierGenerator {
    /// Creates a generator for the dataset `dataset_uri`.
    pub fn new(mode: IdentifierMode, dataset_uri: impl Into<String>) -> Self {
        Self {
            mode,
            dataset_uri: dataset_uri.into(),
            next_blank: 0,
        }
    }

    /// The identifier mode.
    #[must_use]
    pub fn mode(&self) -> IdentifierMode {
        self.mode
    }

    /// The dataset node is always named by the dataset IRI.
    #[must_use]
    pub fn dataset(&self) -> PartitionId {
        PartitionId::Uri(self.dataset_uri.clone())
    }

    /// Identifier of a property partition under `parent`.
    pub fn property(&mut self, parent: &PartitionId, property: &str) -> PartitionId {
        self.child(parent, "property", property)
    }

    /// Identifier of a class partition under `parent`.
    pub fn class(&mut self, parent: &PartitionId, class: &str) -> PartitionId {
        self.child(parent, "class", class)
    }

    /// Identifier of an object-class partition under a property partition.
    /// `None` names the untyped bucket.
    pub fn object_class(&mut self, parent: &PartitionId, class: Option<&str>) -> PartitionId {
        self.child(parent, "target", class.unwrap_or(UNTYPED_MARKER))
    }

    fn child(&mut self, parent: &PartitionId, segment: &str, resource: &str) -> PartitionId {
        match (self.mode, parent) {
            (IdentifierMode::UriReference, PartitionId::Uri(base)) => PartitionId::Uri(format!(
                "{}/{}/{}",
                base.trim_end_matches('/'),
                segment,
                hash_iri(resource)
            )),
            _ => self.fresh_blank(),
        }
    }

    fn fresh_blank(&mut self) -> PartitionId {
        let label = format!("partition{}", self.next_blank);
        self.next_blank += 1;
        PartitionId::Blank(label)
    }
}
