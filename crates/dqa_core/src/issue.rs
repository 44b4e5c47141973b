//! Dataset and issue category labels.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The three audited datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    /// Consumer accounts
    Users,
    /// Brand catalogue
    Brands,
    /// Scanned receipts and their line items
    Receipts,
}

impl Dataset {
    /// All datasets in audit order.
    pub const ALL: [Dataset; 3] = [Dataset::Users, Dataset::Brands, Dataset::Receipts];

    /// Label used inside rendered issue messages.
    pub fn label(&self) -> &'static str {
        match self {
            Dataset::Users => "Users",
            Dataset::Brands => "Brands",
            Dataset::Receipts => "Receipts",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse classification of a data quality finding.
///
/// Categories are shared across datasets; the dataset is carried inside the
/// rendered message instead. Ordering follows the category name so reports
/// list categories alphabetically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueCategory {
    #[serde(rename = "Duplicate ID")]
    DuplicateId,
    #[serde(rename = "Financial Inconsistency")]
    FinancialInconsistency,
    #[serde(rename = "Inconsistent Count")]
    InconsistentCount,
    #[serde(rename = "Inconsistent Fields")]
    InconsistentFields,
    #[serde(rename = "Invalid JSON")]
    InvalidJson,
    #[serde(rename = "Invalid Value")]
    InvalidValue,
    #[serde(rename = "Logical Inconsistency")]
    LogicalInconsistency,
    #[serde(rename = "Missing Field")]
    MissingField,
    #[serde(rename = "Missing ID")]
    MissingId,
    #[serde(rename = "Orphan Item-Brand Link")]
    OrphanItemBrandLink,
    #[serde(rename = "Orphan Record")]
    OrphanRecord,
    #[serde(rename = "Test Data")]
    TestData,
}

impl IssueCategory {
    /// Human-readable category name, as printed in the report.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCategory::DuplicateId => "Duplicate ID",
            IssueCategory::FinancialInconsistency => "Financial Inconsistency",
            IssueCategory::InconsistentCount => "Inconsistent Count",
            IssueCategory::InconsistentFields => "Inconsistent Fields",
            IssueCategory::InvalidJson => "Invalid JSON",
            IssueCategory::InvalidValue => "Invalid Value",
            IssueCategory::LogicalInconsistency => "Logical Inconsistency",
            IssueCategory::MissingField => "Missing Field",
            IssueCategory::MissingId => "Missing ID",
            IssueCategory::OrphanItemBrandLink => "Orphan Item-Brand Link",
            IssueCategory::OrphanRecord => "Orphan Record",
            IssueCategory::TestData => "Test Data",
        }
    }
}

impl Ord for IssueCategory {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for IssueCategory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order_is_alphabetical() {
        let mut categories = vec![
            IssueCategory::TestData,
            IssueCategory::InvalidValue,
            IssueCategory::MissingId,
            IssueCategory::DuplicateId,
            IssueCategory::OrphanRecord,
            IssueCategory::MissingField,
        ];
        categories.sort();

        let names: Vec<_> = categories.iter().map(IssueCategory::as_str).collect();
        assert_eq!(
            names,
            vec![
                "Duplicate ID",
                "Invalid Value",
                "Missing Field",
                "Missing ID",
                "Orphan Record",
                "Test Data"
            ]
        );
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&IssueCategory::OrphanItemBrandLink).unwrap();
        assert_eq!(json, r#""Orphan Item-Brand Link""#);
    }

    #[test]
    fn test_dataset_label() {
        assert_eq!(Dataset::Users.to_string(), "Users");
        assert_eq!(Dataset::Receipts.label(), "Receipts");
    }
}
