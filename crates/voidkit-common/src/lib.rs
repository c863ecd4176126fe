//! # voidkit-common
//!
//! Foundation layer for voidkit: RDF term types, vocabulary constants, and
//! utilities.
//!
//! This crate provides the building blocks used by all other voidkit crates.
//! It has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions (Term, Triple, TermId)
//! - [`vocab`] - RDF, VOID and XSD vocabulary IRIs
//! - [`utils`] - Utility functions and helpers (hashing, errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;
pub mod vocab;

// Re-export commonly used types at crate root
pub use types::{Term, TermId, TermKind, Triple};
pub use utils::error::{ConfigError, Error, Result};
