//! # voidkit
//!
//! Exact [VOID](https://www.w3.org/TR/void/) statistics for large RDF
//! datasets, read from HDT files.
//!
//! Start with [`VoidAnalyzer`]: give it a [`VoidConfig`] and a triple source
//! and it returns a [`VoidDescription`] holding the partition tree:
//!
//! | Partition | Counts |
//! | --------- | ------ |
//! | Dataset | triples, distinct subjects, properties, distinct objects, classes |
//! | Property partition | triples per predicate |
//! | Class partition | entities and triples per class |
//! | Class property partition | triples per (class, predicate) |
//! | Object-class partition | triples per (class, predicate, object class) |
//!
//! ## Quick Start
//!
//! ```rust
//! use voidkit::{MemoryTripleSource, NoProgress, OutputFormat, Term, VoidAnalyzer, VoidConfig};
//! use voidkit::vocab::rdf;
//!
//! let mut source = MemoryTripleSource::new();
//! let alice = Term::iri("http://example.org/alice");
//! source.add(alice.clone(), Term::iri(rdf::TYPE), Term::iri("http://example.org/Person"));
//! source.add(alice, Term::iri("http://example.org/name"), Term::literal("Alice"));
//!
//! let analyzer = VoidAnalyzer::new(VoidConfig::new("http://example.org/people"))?;
//! let description = analyzer.analyze(&source, &mut NoProgress)?;
//!
//! let mut turtle = Vec::new();
//! description.write(OutputFormat::Turtle, &mut turtle)?;
//! # Ok::<(), voidkit::Error>(())
//! ```

// Re-export the analyzer API
pub use voidkit_engine::{RunSummary, VoidAnalyzer, VoidConfig, VoidDescription};

// Re-export the partition model - the result of every run
pub use voidkit_core::{
    IdentifierMode, MemoryTripleSource, NoProgress, Pass, PartitionId, PartitionKind,
    PartitionTree, ProgressObserver, TripleSource,
};
pub use voidkit_core::partition::{
    ClassPartition, DatasetPartition, ObjectClassPartition, PropertyPartition,
};

// Re-export input and output adapters
#[cfg(feature = "hdt")]
pub use voidkit_adapters::HdtTripleSource;
pub use voidkit_adapters::{OutputFormat, TurtleSerializer};

// Re-export common types
pub use voidkit_common::{ConfigError, Error, Result, Term, Triple, vocab};
