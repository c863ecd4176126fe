//! The VOID partition model.
//!
//! Turns finished [`Counters`](crate::statistics::Counters) into a tree of
//! partition nodes:
//!
//! ```text
//! Dataset
//! ├── PropertyPartition (one per predicate)
//! └── ClassPartition (one per class)
//!     └── PropertyPartition (one per predicate used by the class)
//!         └── ObjectClassPartition (one per object class)
//! ```
//!
//! - [`identifier`] - Stable partition identifiers (hashed URIs or blank nodes)
//! - [`model`] - The node types
//! - [`builder`] - Counters -> tree

pub mod builder;
pub mod identifier;
pub mod model;

pub use builder::PartitionModelBuilder;
pub use identifier::{IdentifierGenerator, IdentifierMode, UNTYPED_MARKER, hash_iri};
pub use model::{
    ClassPartition, DatasetPartition, ObjectClassPartition, PartitionId, PartitionKind,
    PartitionNode, PartitionTree, PropertyPartition,
};
