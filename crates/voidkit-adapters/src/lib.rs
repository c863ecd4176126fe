//! # voidkit-adapters
//!
//! Adapters layer for voidkit: concrete triple sources and output formats.
//!
//! ## Modules
//!
//! - [`source`] - Triple sources backed by files (HDT)
//! - [`serializer`] - Partition tree writers (Turtle, JSON)

pub mod serializer;
pub mod source;

#[cfg(feature = "hdt")]
pub use source::HdtTripleSource;
pub use serializer::{OutputFormat, TurtleSerializer};
