//! Users dataset rules.

use crate::{DatasetValidator, Record, SeenIds};
use dqa_core::{Dataset, IssueCategory, IssueRegistry, display_value};
use serde_json::Value;

/// The only role a user record may carry.
pub const VALID_ROLE: &str = "consumer";

/// Validates records of the users dataset.
#[derive(Debug, Default)]
pub struct UsersValidator {
    seen: SeenIds,
}

impl UsersValidator {
    /// Creates a validator with an empty duplicate tracker.
    pub fn new() -> Self {
        Self::default()
    }

    fn check_fields(&self, record_id: &str, record: &Record, issues: &mut IssueRegistry) {
        for field in ["active", "createdDate"] {
            if !record.has(field) {
                issues.log(
                    IssueCategory::MissingField,
                    Dataset::Users,
                    record_id,
                    format!("User is missing the '{}' field.", field),
                );
            }
        }

        let role = record.get("role");
        if role.and_then(Value::as_str) != Some(VALID_ROLE) {
            issues.log(
                IssueCategory::InvalidValue,
                Dataset::Users,
                record_id,
                format!(
                    "User has an invalid (not '{}') or missing role: '{}'.",
                    VALID_ROLE,
                    display_value(role)
                ),
            );
        }

        if record.has("state") {
            let state = record.get("state");
            let is_code = state
                .and_then(Value::as_str)
                .is_some_and(|s| s.chars().count() == 2);
            if !is_code {
                issues.log(
                    IssueCategory::InvalidValue,
                    Dataset::Users,
                    record_id,
                    format!("User 'state' is not a 2-letter code: '{}'.", display_value(state)),
                );
            }
        }
    }

    fn check_dates(&self, record_id: &str, record: &Record, issues: &mut IssueRegistry) {
        if let (Some(created), Some(last_login)) =
            (record.date("createdDate"), record.date("lastLogin"))
        {
            if last_login < created {
                issues.log(
                    IssueCategory::LogicalInconsistency,
                    Dataset::Users,
                    record_id,
                    "lastLogin date is before createdDate.",
                );
            }
        }
    }
}

impl DatasetValidator for UsersValidator {
    fn dataset(&self) -> Dataset {
        Dataset::Users
    }

    fn duplicate_message(&self) -> &'static str {
        "User ID is duplicated in the file."
    }

    fn seen_ids(&mut self) -> &mut SeenIds {
        &mut self.seen
    }

    fn check_record(&self, record_id: &str, record: &Record, issues: &mut IssueRegistry) {
        self.check_fields(record_id, record, issues);
        self.check_dates(record_id, record, issues);
    }
}
