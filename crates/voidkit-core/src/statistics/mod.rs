//! Statistics aggregation.
//!
//! This module provides the counters behind a VOID description:
//! - Dataset: triple count, distinct subjects/predicates/objects, per-predicate counts
//! - Classes: distinct entities, triple count, per-predicate counts
//! - Class properties: triple count broken down by the class of the object
//!
//! [`StatisticsCollector`] fills the counters in one pass, reading class
//! membership from the [`ClassIndex`](crate::index::ClassIndex) built in pass 1.

mod collector;
mod counters;

pub use collector::{CollectorOptions, StatisticsCollector};
pub use counters::{ClassStats, Counters, DatasetStats, ObjectClassKey, PropertyStats};
