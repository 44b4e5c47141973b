//! Error types for data quality audits.
//!
//! Data defects are never errors: they are recorded as issues. The variants
//! below cover the failures that stop an audit step from running at all.

use crate::Dataset;
use thiserror::Error;

/// Result type for audit operations.
pub type Result<T> = std::result::Result<T, AuditError>;

/// Main error type for audit operations.
#[derive(Error, Debug)]
pub enum AuditError {
    /// An input dataset could not be opened or read
    #[error("Failed to read {dataset} dataset from '{location}': {source}")]
    DatasetRead {
        /// Dataset being read
        dataset: Dataset,
        /// Path or name of the source
        location: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The rendered report could not be written
    #[error("Could not write report to '{path}': {source}")]
    ReportWrite {
        /// Target path
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A configuration value is out of range
    #[error("Invalid configuration value for '{field}': {message}")]
    InvalidConfig {
        /// Offending key
        field: String,
        /// What is wrong with the value
        message: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AuditError {
    /// Creates a dataset read error.
    pub fn dataset_read(
        dataset: Dataset,
        location: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self::DatasetRead {
            dataset,
            location: location.into(),
            source,
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a report write error.
    pub fn report_write(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ReportWrite {
            path: path.into(),
            source,
        }
    }
}
