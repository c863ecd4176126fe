//! # voidkit-engine
//!
//! The main entry point for voidkit: run configuration and the analyzer that
//! drives the class index pass, the aggregation pass, and the partition
//! model builder.
//!
//! ## Modules
//!
//! - [`config`] - Run configuration and validation
//! - [`analyzer`] - VoidAnalyzer and the finished VoidDescription

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod analyzer;
pub mod config;

pub use analyzer::{RunSummary, VoidAnalyzer, VoidDescription};
pub use config::{DEFAULT_CELL_WARNING_THRESHOLD, DEFAULT_DATASET_URI, VoidConfig};
