//! Storage utilities.
//!
//! - [`dictionary`] - Interns RDF terms into dense [`TermId`]s
//!
//! Every set and map key used during aggregation holds a 4-byte id instead
//! of a string; each distinct string lives once, in the dictionary.
//!
//! [`TermId`]: voidkit_common::TermId

pub mod dictionary;

pub use dictionary::TermDictionary;
