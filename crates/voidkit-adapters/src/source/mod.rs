//! File-backed triple sources.
//!
//! In-memory sources live in `voidkit-core`; this module only adds readers
//! for on-disk formats.

#[cfg(feature = "hdt")]
mod hdt;

#[cfg(feature = "hdt")]
pub use self::hdt::HdtTripleSource;
