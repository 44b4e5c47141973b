//! Audit configuration.
//!
//! Names the three input datasets, the report destination and the numeric
//! tolerance used by the financial consistency check. Every field has a
//! default, so an empty configuration file is valid.

use crate::{AuditError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default users dataset file.
pub const DEFAULT_USERS_FILE: &str = "users.json";
/// Default brands dataset file.
pub const DEFAULT_BRANDS_FILE: &str = "brands.json";
/// Default receipts dataset file.
pub const DEFAULT_RECEIPTS_FILE: &str = "receipts.json";
/// Default report file.
pub const DEFAULT_OUTPUT_FILE: &str = "data_quality_report.txt";
/// Default absolute tolerance between `totalSpent` and the item price sum.
pub const DEFAULT_FINANCIAL_TOLERANCE: f64 = 0.01;

/// Configuration for a single audit run.
///
/// # Example
///
/// ```rust
/// use dqa_core::AuditConfig;
///
/// let config = AuditConfig::new()
///     .with_users("data/users.json")
///     .with_output("out/report.txt");
///
/// assert_eq!(config.users.to_str(), Some("data/users.json"));
/// assert_eq!(config.brands.to_str(), Some("brands.json"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuditConfig {
    /// Users dataset (newline-delimited JSON)
    pub users: PathBuf,

    /// Brands dataset (newline-delimited JSON)
    pub brands: PathBuf,

    /// Receipts dataset (newline-delimited JSON)
    pub receipts: PathBuf,

    /// Report destination
    pub output: PathBuf,

    /// Absolute tolerance for the receipt total check
    pub financial_tolerance: f64,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            users: PathBuf::from(DEFAULT_USERS_FILE),
            brands: PathBuf::from(DEFAULT_BRANDS_FILE),
            receipts: PathBuf::from(DEFAULT_RECEIPTS_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            financial_tolerance: DEFAULT_FINANCIAL_TOLERANCE,
        }
    }
}

impl AuditConfig {
    /// Creates a configuration with default file names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the users dataset path.
    pub fn with_users(mut self, path: impl AsRef<Path>) -> Self {
        self.users = path.as_ref().to_path_buf();
        self
    }

    /// Sets the brands dataset path.
    pub fn with_brands(mut self, path: impl AsRef<Path>) -> Self {
        self.brands = path.as_ref().to_path_buf();
        self
    }

    /// Sets the receipts dataset path.
    pub fn with_receipts(mut self, path: impl AsRef<Path>) -> Self {
        self.receipts = path.as_ref().to_path_buf();
        self
    }

    /// Sets the report destination.
    pub fn with_output(mut self, path: impl AsRef<Path>) -> Self {
        self.output = path.as_ref().to_path_buf();
        self
    }

    /// Sets the financial tolerance.
    pub fn with_financial_tolerance(mut self, tolerance: f64) -> Self {
        self.financial_tolerance = tolerance;
        self
    }

    /// Checks the values serde cannot constrain.
    ///
    /// `financial_tolerance` must be finite and non-negative: a negative or
    /// NaN tolerance would flag every priced receipt.
    pub fn validate(&self) -> Result<()> {
        let tolerance = self.financial_tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(AuditError::invalid_config(
                "financial_tolerance",
                format!("expected a finite, non-negative number, got {}", tolerance),
            ));
        }
        Ok(())
    }

    /// Resolves relative paths against `base`.
    ///
    /// Used when a configuration file is loaded from another directory, so
    /// paths inside it are interpreted relative to the file itself.
    pub fn relative_to(mut self, base: &Path) -> Self {
        for path in [
            &mut self.users,
            &mut self.brands,
            &mut self.receipts,
            &mut self.output,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = AuditConfig::default();
        assert_eq!(config.users, PathBuf::from("users.json"));
        assert_eq!(config.brands, PathBuf::from("brands.json"));
        assert_eq!(config.receipts, PathBuf::from("receipts.json"));
        assert_eq!(config.output, PathBuf::from("data_quality_report.txt"));
        assert_eq!(config.financial_tolerance, 0.01);
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let config: AuditConfig = serde_json::from_str(r#"{"users": "u.ndjson"}"#).unwrap();
        assert_eq!(config.users, PathBuf::from("u.ndjson"));
        assert_eq!(config.receipts, PathBuf::from("receipts.json"));
    }

    #[test]
    fn test_validate_tolerance() {
        assert!(AuditConfig::default().validate().is_ok());
        assert!(
            AuditConfig::new()
                .with_financial_tolerance(0.0)
                .validate()
                .is_ok()
        );

        for bad in [-0.01, f64::NAN, f64::INFINITY] {
            let err = AuditConfig::new()
                .with_financial_tolerance(bad)
                .validate()
                .unwrap_err();
            assert!(matches!(
                err,
                AuditError::InvalidConfig { ref field, .. } if field == "financial_tolerance"
            ));
        }
    }

    #[test]
    fn test_relative_to() {
        let config = AuditConfig::new()
            .with_receipts("/abs/receipts.json")
            .relative_to(Path::new("data"));

        assert_eq!(config.users, Path::new("data").join("users.json"));
        assert_eq!(config.receipts, PathBuf::from("/abs/receipts.json"));
    }
}
