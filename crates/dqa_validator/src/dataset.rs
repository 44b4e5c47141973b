//! Shared per-line validation flow.
//!
//! Every dataset goes through the same preamble before its own rules run:
//! decode the line, resolve the identifier, track duplicates. Implementors
//! only provide the record-level rules in [`DatasetValidator::check_record`].

use crate::{LineSource, Record, split_lines};
use dqa_core::{AuditError, Dataset, DatasetStats, IssueCategory, IssueRegistry, Result};
use std::collections::HashSet;
use tracing::{debug, info};

/// Message logged for lines that do not decode to a JSON object.
pub const INVALID_JSON_MESSAGE: &str = "Line is not a valid JSON object.";

/// Message logged for records without a usable `_id`.
pub const MISSING_ID_MESSAGE: &str = "Record has no valid '_id'.";

/// What happened to a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line was not a JSON object
    InvalidJson,
    /// The record had no resolvable identifier
    MissingId,
    /// The record went through the dataset rules
    Checked,
}

/// Identifiers already seen in the current dataset pass.
#[derive(Debug, Clone, Default)]
pub struct SeenIds {
    ids: HashSet<String>,
}

impl SeenIds {
    /// Records `id`; returns true if it had been seen before.
    pub fn observe(&mut self, id: &str) -> bool {
        !self.ids.insert(id.to_string())
    }

    /// Number of distinct identifiers seen.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if nothing has been seen yet.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Rule set applied to every record of one dataset.
pub trait DatasetValidator {
    /// Dataset this validator audits.
    fn dataset(&self) -> Dataset;

    /// Message logged when an identifier repeats.
    fn duplicate_message(&self) -> &'static str;

    /// Duplicate tracking state for the current pass.
    fn seen_ids(&mut self) -> &mut SeenIds;

    /// Applies the dataset rules to an identified record.
    ///
    /// Each rule is independent: a record may accumulate several issues.
    fn check_record(&self, record_id: &str, record: &Record, issues: &mut IssueRegistry);

    /// Validates one line (`line_number` is 1-based).
    ///
    /// The line is raw bytes: content that is not UTF-8 is an invalid line,
    /// not a read failure.
    fn validate_line(
        &mut self,
        line_number: usize,
        line: impl AsRef<[u8]>,
        issues: &mut IssueRegistry,
    ) -> LineOutcome {
        let dataset = self.dataset();

        let Some(record) = Record::parse(line) else {
            issues.log(
                IssueCategory::InvalidJson,
                dataset,
                &format!("line {}", line_number),
                INVALID_JSON_MESSAGE,
            );
            return LineOutcome::InvalidJson;
        };

        let Some(record_id) = record.identifier() else {
            issues.log(
                IssueCategory::MissingId,
                dataset,
                &format!("line {}", line_number),
                MISSING_ID_MESSAGE,
            );
            return LineOutcome::MissingId;
        };

        if self.seen_ids().observe(&record_id) {
            issues.log(
                IssueCategory::DuplicateId,
                dataset,
                &record_id,
                self.duplicate_message(),
            );
        }

        self.check_record(&record_id, &record, issues);
        LineOutcome::Checked
    }

    /// Validates every line of a source.
    fn validate_source(
        &mut self,
        source: &dyn LineSource,
        issues: &mut IssueRegistry,
    ) -> Result<DatasetStats> {
        let dataset = self.dataset();
        info!("Analyzing {}...", source.name());

        let reader = source
            .open()
            .map_err(|e| AuditError::dataset_read(dataset, source.name(), e))?;

        let mut stats = DatasetStats::default();
        for (index, line) in split_lines(reader).enumerate() {
            let line = line.map_err(|e| AuditError::dataset_read(dataset, source.name(), e))?;
            stats.lines_read += 1;

            match self.validate_line(index + 1, &line, issues) {
                LineOutcome::InvalidJson => stats.invalid_lines += 1,
                LineOutcome::MissingId => {}
                LineOutcome::Checked => stats.records_checked += 1,
            }
        }

        debug!(
            dataset = %dataset,
            lines = stats.lines_read,
            invalid = stats.invalid_lines,
            checked = stats.records_checked,
            "Dataset pass complete"
        );

        Ok(stats)
    }
}
