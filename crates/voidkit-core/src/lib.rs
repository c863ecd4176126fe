//! # voidkit-core
//!
//! Core layer for voidkit: triple sources, the class index, the statistics
//! aggregation engine, and the VOID partition model.
//!
//! This crate depends only on `voidkit-common`.
//!
//! ## Modules
//!
//! - [`source`] - The triple source contract and an in-memory implementation
//! - [`storage`] - Term dictionary (string interning)
//! - [`index`] - Class index built from `rdf:type` triples
//! - [`statistics`] - Counters and the aggregation engine
//! - [`partition`] - Partition model, builder, and identifier generator
//! - [`progress`] - Progress reporting hooks for long passes

pub mod index;
pub mod partition;
pub mod progress;
pub mod source;
pub mod statistics;
pub mod storage;

// Re-export commonly used types
pub use index::{ClassIndex, ClassIndexBuilder};
pub use partition::{
    IdentifierGenerator, IdentifierMode, PartitionId, PartitionKind, PartitionModelBuilder,
    PartitionTree,
};
pub use progress::{NoProgress, Pass, ProgressObserver};
pub use source::{MemoryTripleSource, TripleIter, TripleSource};
pub use statistics::{
    ClassStats, CollectorOptions, Counters, DatasetStats, ObjectClassKey, PropertyStats,
    StatisticsCollector,
};
pub use storage::TermDictionary;
