//! Brands dataset rules.

use crate::record::non_empty_str;
use crate::{DatasetValidator, Record, SeenIds};
use dqa_core::{Dataset, IssueCategory, IssueRegistry, parse_identifier};
use serde_json::Value;

const REQUIRED_FIELDS: [&str; 3] = ["barcode", "brandCode", "name"];

/// Substring marking a brand name as test data.
pub const TEST_MARKER: &str = "test";

/// Validates records of the brands dataset.
#[derive(Debug, Default)]
pub struct BrandsValidator {
    seen: SeenIds,
}

impl BrandsValidator {
    /// Creates a validator with an empty duplicate tracker.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DatasetValidator for BrandsValidator {
    fn dataset(&self) -> Dataset {
        Dataset::Brands
    }

    fn duplicate_message(&self) -> &'static str {
        "ID is duplicated in the file."
    }

    fn seen_ids(&mut self) -> &mut SeenIds {
        &mut self.seen
    }

    fn check_record(&self, record_id: &str, record: &Record, issues: &mut IssueRegistry) {
        for field in REQUIRED_FIELDS {
            if !record.has(field) {
                issues.log(
                    IssueCategory::MissingField,
                    Dataset::Brands,
                    record_id,
                    format!("Row is missing the '{}' field.", field),
                );
            }
        }

        if let Some(name) = record.get_str("name") {
            if name.contains(TEST_MARKER) {
                issues.log(
                    IssueCategory::TestData,
                    Dataset::Brands,
                    record_id,
                    format!("Brand name '{}' appears to be a test entry.", name),
                );
            }
        }

        if record.has("category") != record.has("categoryCode") {
            issues.log(
                IssueCategory::InconsistentFields,
                Dataset::Brands,
                record_id,
                "Has 'category' or 'categoryCode' but not both.",
            );
        }

        // An empty or non-object cpg has nothing to cross-check
        if let Some(cpg) = record
            .get("cpg")
            .and_then(Value::as_object)
            .filter(|cpg| !cpg.is_empty())
        {
            let has_id = cpg.get("$id").and_then(parse_identifier).is_some();
            let has_ref = non_empty_str(cpg.get("$ref")).is_some();
            if has_id != has_ref {
                issues.log(
                    IssueCategory::InconsistentFields,
                    Dataset::Brands,
                    record_id,
                    "cpg field has '$id' or '$ref' in JSON data but not both.",
                );
            }
        }
    }
}
