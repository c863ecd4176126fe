//! Output formats for a finished [`PartitionTree`].
//!
//! - [`turtle`] - VOID description as Turtle (the primary output)
//! - [`json`] - The partition tree as JSON, for tooling

pub mod json;
pub mod turtle;

use std::io::Write;

use voidkit_common::Result;
use voidkit_core::PartitionTree;

pub use json::JsonSerializer;
pub use turtle::TurtleSerializer;

/// Selects how a partition tree is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// RDF Turtle using the VOID vocabulary.
    #[default]
    Turtle,
    /// Pretty-printed JSON of the tree structure.
    Json,
}

impl OutputFormat {
    /// Writes `tree` to `writer` in this format.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write<W: Write>(self, tree: &PartitionTree, writer: W) -> Result<()> {
        match self {
            Self::Turtle => TurtleSerializer::write(tree, writer),
            Self::Json => JsonSerializer::write(tree, writer),
        }
    }

    /// Conventional file extension, without the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Turtle => "ttl",
            Self::Json => "json",
        }
    }
}
