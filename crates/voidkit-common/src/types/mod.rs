//! Core type definitions for voidkit.
//!
//! This module contains the fundamental types shared by every stage of a run:
//! - RDF terms and triples ([`Term`], [`TermKind`], [`Triple`])
//! - Interned identifiers ([`TermId`])

mod id;
mod term;

pub use id::TermId;
pub use term::{Term, TermKind, Triple};
