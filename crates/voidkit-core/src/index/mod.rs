//! Index structures built before the aggregation pass.
//!
//! - [`class_index`] - Resource -> declared classes, from `rdf:type` triples

pub mod class_index;

pub use class_index::{ClassIndex, ClassIndexBuilder};
