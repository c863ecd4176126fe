//! Run configuration.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use voidkit_common::ConfigError;
use voidkit_core::index::class_index::DEFAULT_PROGRESS_INTERVAL;
use voidkit_core::{CollectorOptions, IdentifierMode};

/// Dataset IRI used when none is given.
pub const DEFAULT_DATASET_URI: &str = "http://example.org/dataset";

/// Number of nested counter cells above which a run logs a warning.
pub const DEFAULT_CELL_WARNING_THRESHOLD: u64 = 1_000_000;

static SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").expect("valid regex"));

static FORBIDDEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\x00-\x20<>"{}|^`\\\x7F]"#).expect("valid regex"));

/// Settings for one analysis run.
///
/// # Examples
///
/// ```
/// use voidkit_engine::VoidConfig;
///
/// let config = VoidConfig::new("http://example.org/my-dataset")
///     .with_blank_nodes(true)
///     .with_object_class_partitions(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoidConfig {
    /// IRI of the described dataset, also the base of generated partition IRIs.
    pub dataset_uri: String,

    /// Name partitions with blank nodes instead of hashed IRIs.
    pub use_blank_nodes: bool,

    /// Compute object-class partitions below class property partitions.
    pub compute_object_class_partitions: bool,

    /// Add an untyped bucket for literal and untyped objects.
    /// Requires `compute_object_class_partitions`.
    pub track_untyped_objects: bool,

    /// Triples between progress notifications.
    pub progress_interval: u64,

    /// Cell count that triggers a scalability warning.
    pub cell_warning_threshold: u64,
}

impl Default for VoidConfig {
    fn default() -> Self {
        Self {
            dataset_uri: DEFAULT_DATASET_URI.to_string(),
            use_blank_nodes: false,
            compute_object_class_partitions: true,
            track_untyped_objects: false,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            cell_warning_threshold: DEFAULT_CELL_WARNING_THRESHOLD,
        }
    }
}

impl VoidConfig {
    /// Creates a default configuration for the dataset `dataset_uri`.
    #[must_use]
    pub fn new(dataset_uri: impl Into<String>) -> Self {
        Self {
            dataset_uri: dataset_uri.into(),
            ..Self::default()
        }
    }

    /// Sets the dataset IRI.
    #[must_use]
    pub fn with_dataset_uri(mut self, dataset_uri: impl Into<String>) -> Self {
        self.dataset_uri = dataset_uri.into();
        self
    }

    /// Selects blank-node partition identifiers.
    #[must_use]
    pub fn with_blank_nodes(mut self, enabled: bool) -> Self {
        self.use_blank_nodes = enabled;
        self
    }

    /// Enables or disables object-class partitions.
    #[must_use]
    pub fn with_object_class_partitions(mut self, enabled: bool) -> Self {
        self.compute_object_class_partitions = enabled;
        self
    }

    /// Enables or disables the untyped object bucket.
    #[must_use]
    pub fn with_untyped_objects(mut self, enabled: bool) -> Self {
        self.track_untyped_objects = enabled;
        self
    }

    /// Sets the progress notification interval.
    #[must_use]
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Sets the cell count warning threshold.
    #[must_use]
    pub fn with_cell_warning_threshold(mut self, threshold: u64) -> Self {
        self.cell_warning_threshold = threshold;
        self
    }

    /// Checks the configuration before any pass starts.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: an empty, relative, or malformed
    /// dataset IRI, a zero progress interval, or untyped tracking without
    /// object-class partitions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let uri = &self.dataset_uri;
        if uri.is_empty() {
            return Err(ConfigError::EmptyDatasetUri);
        }
        if let Some(found) = FORBIDDEN.find(uri) {
            let character = found.as_str().chars().next().unwrap_or(' ');
            return Err(ConfigError::InvalidDatasetUriChar {
                uri: uri.clone(),
                character,
            });
        }
        if !SCHEME.is_match(uri) {
            return Err(ConfigError::RelativeDatasetUri(uri.clone()));
        }
        if self.progress_interval == 0 {
            return Err(ConfigError::InvalidValue {
                option: "progress_interval",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.track_untyped_objects && !self.compute_object_class_partitions {
            return Err(ConfigError::Incompatible(
                "untyped object tracking requires object-class partitions".to_string(),
            ));
        }
        Ok(())
    }

    /// The identifier mode selected by `use_blank_nodes`.
    #[must_use]
    pub fn identifier_mode(&self) -> IdentifierMode {
        if self.use_blank_nodes {
            IdentifierMode::BlankNode
        } else {
            IdentifierMode::UriReference
        }
    }

    /// Options for the aggregation pass.
    #[must_use]
    pub fn collector_options(&self) -> CollectorOptions {
        CollectorOptions {
            object_class_partitions: self.compute_object_class_partitions,
            track_untyped_objects: self.track_untyped_objects,
            progress_interval: self.progress_interval,
        }
    }
}
