//! Audit report model and text rendering.

use crate::{AuditError, Dataset, IssueRegistry, Result};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

const REPORT_HEADER: &str = "--- Data Quality Report ---\n";
const REPORT_FOOTER: &str = "\n--- End of Report ---\n";
const NO_ISSUES_LINE: &str = "\nCongratulations! No data quality issues were found.\n";

/// Outcome of a full audit run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditReport {
    /// Deduplicated findings
    pub issues: IssueRegistry,

    /// Execution statistics
    pub stats: AuditStats,
}

impl AuditReport {
    /// Returns true when no issue was found.
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }

    /// Renders the text report.
    pub fn render(&self) -> String {
        render_report(&self.issues)
    }

    /// Serializes the report (issues and statistics) as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Statistics gathered while auditing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditStats {
    /// Users dataset pass
    pub users: DatasetStats,

    /// Brands dataset pass
    pub brands: DatasetStats,

    /// Receipts dataset pass
    pub receipts: DatasetStats,

    /// Distinct user identifiers found by the reference pre-pass
    pub known_user_ids: usize,

    /// Distinct brand codes found by the reference pre-pass
    pub known_brand_codes: usize,

    /// Total audit duration in milliseconds
    pub duration_ms: u64,
}

impl AuditStats {
    /// Statistics of a single dataset.
    pub fn dataset(&self, dataset: Dataset) -> &DatasetStats {
        match dataset {
            Dataset::Users => &self.users,
            Dataset::Brands => &self.brands,
            Dataset::Receipts => &self.receipts,
        }
    }

    /// Mutable statistics of a single dataset.
    pub fn dataset_mut(&mut self, dataset: Dataset) -> &mut DatasetStats {
        match dataset {
            Dataset::Users => &mut self.users,
            Dataset::Brands => &mut self.brands,
            Dataset::Receipts => &mut self.receipts,
        }
    }
}

/// Per-dataset counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DatasetStats {
    /// Lines read from the source
    pub lines_read: usize,

    /// Lines that were not a JSON object
    pub invalid_lines: usize,

    /// Records with a resolvable identifier that went through field checks
    pub records_checked: usize,
}

/// Renders the registry as the text report.
///
/// Categories are listed alphabetically, each with its message count, and the
/// report ends with the grand total. An empty registry renders a single
/// congratulatory line and no total.
///
/// # Example
///
/// ```rust
/// use dqa_core::{render_report, IssueRegistry};
///
/// let report = render_report(&IssueRegistry::new());
/// assert!(report.contains("No data quality issues were found."));
/// ```
pub fn render_report(issues: &IssueRegistry) -> String {
    let mut out = String::from(REPORT_HEADER);

    if issues.is_empty() {
        out.push_str(NO_ISSUES_LINE);
        return out;
    }

    let mut total = 0;
    for (category, messages) in issues.categories() {
        let _ = writeln!(out, "\n[+] Issue Type: {} ({} found)", category, messages.len());
        total += messages.len();
        for message in messages {
            let _ = writeln!(out, "  - {}", message);
        }
    }

    out.push_str(REPORT_FOOTER);
    let _ = writeln!(out, "\nTotal Issues Found: {}", total);
    out
}

/// Renders the registry and writes it to `path`, replacing any existing file.
pub fn write_report(path: &Path, issues: &IssueRegistry) -> Result<()> {
    std::fs::write(path, render_report(issues))
        .map_err(|e| AuditError::report_write(path.display().to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IssueCategory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_empty_registry() {
        let report = render_report(&IssueRegistry::new());
        assert_eq!(
            report,
            "--- Data Quality Report ---\n\nCongratulations! No data quality issues were found.\n"
        );
        assert!(!report.contains("Total Issues Found"));
    }

    #[test]
    fn test_render_groups_and_totals() {
        let mut issues = IssueRegistry::new();
        issues.log(IssueCategory::TestData, Dataset::Brands, "b1", "test brand");
        issues.log(IssueCategory::MissingId, Dataset::Users, "line 2", "no id");
        issues.log(IssueCategory::MissingId, Dataset::Users, "line 1", "no id");

        let expected = "\
--- Data Quality Report ---

[+] Issue Type: Missing ID (2 found)
  - [Users] Record ID line 1: no id
  - [Users] Record ID line 2: no id

[+] Issue Type: Test Data (1 found)
  - [Brands] Record ID b1: test brand

--- End of Report ---

Total Issues Found: 3
";
        assert_eq!(render_report(&issues), expected);
    }

    #[test]
    fn test_write_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");

        let mut issues = IssueRegistry::new();
        issues.log(IssueCategory::InvalidJson, Dataset::Receipts, "line 9", "bad");
        write_report(&path, &issues).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_report(&issues));
    }

    #[test]
    fn test_write_report_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.txt");

        let err = write_report(&path, &IssueRegistry::new()).unwrap_err();
        assert!(matches!(err, AuditError::ReportWrite { .. }));
    }

    #[test]
    fn test_report_json() {
        let mut report = AuditReport::default();
        report
            .issues
            .log(IssueCategory::OrphanRecord, Dataset::Receipts, "r1", "orphan");
        report.stats.receipts.lines_read = 1;

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(
            json["issues"]["Orphan Record"][0],
            "[Receipts] Record ID r1: orphan"
        );
        assert_eq!(json["stats"]["receipts"]["lines_read"], 1);
        assert!(!report.passed());
    }
}
