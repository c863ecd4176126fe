//! Utility functions and helpers.
//!
//! - [`error`] - The error types shared by every crate
//! - [`hash`] - Hash map and set aliases used for counters and indexes

pub mod error;
pub mod hash;
