//! Error types for voidkit.

use thiserror::Error;

/// Result type alias using the voidkit error.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for every voidkit operation.
#[derive(Error, Debug)]
pub enum Error {
    /// The triple source could not produce the next triple. Fatal for the run.
    #[error("triple source error: {0}")]
    Source(String),

    /// The run configuration was rejected before any pass started.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// More distinct terms than the dictionary can address.
    #[error("term dictionary is full ({0} distinct terms)")]
    DictionaryFull(usize),

    /// Output could not be rendered.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O failure while reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal invariant violated.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Reasons a configuration is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The dataset URI is empty.
    #[error("dataset URI must not be empty")]
    EmptyDatasetUri,

    /// The dataset URI has no scheme, so it is not an absolute IRI.
    #[error("dataset URI '{0}' is not absolute (missing scheme)")]
    RelativeDatasetUri(String),

    /// The dataset URI contains a character that cannot appear in an IRI.
    #[error("dataset URI '{uri}' contains invalid character {character:?}")]
    InvalidDatasetUriChar {
        /// The rejected URI.
        uri: String,
        /// The offending character.
        character: char,
    },

    /// Two options that cannot be combined.
    #[error("incompatible options: {0}")]
    Incompatible(String),

    /// A numeric option is out of range.
    #[error("invalid value for {option}: {reason}")]
    InvalidValue {
        /// Option name.
        option: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl Error {
    /// Wraps any displayable failure coming out of a triple source.
    pub fn source(err: impl std::fmt::Display) -> Self {
        Self::Source(err.to_string())
    }
}
