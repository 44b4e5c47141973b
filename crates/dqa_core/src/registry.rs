//! Aggregation sink for data quality findings.
//!
//! Every validator logs into an [`IssueRegistry`] passed by mutable reference.
//! Messages are deduplicated by their exact rendered text within a category,
//! so the same defect reported twice for the same record collapses into one
//! entry.

use crate::{Dataset, IssueCategory};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Deduplicated collection of issues grouped by category.
///
/// # Example
///
/// ```rust
/// use dqa_core::{Dataset, IssueCategory, IssueRegistry};
///
/// let mut issues = IssueRegistry::new();
/// issues.log(IssueCategory::MissingId, Dataset::Users, "line 3", "Record has no valid '_id'.");
/// issues.log(IssueCategory::MissingId, Dataset::Users, "line 3", "Record has no valid '_id'.");
///
/// assert_eq!(issues.total(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct IssueRegistry {
    issues: BTreeMap<IssueCategory, BTreeSet<String>>,
}

impl IssueRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finding.
    ///
    /// The message is rendered as `[{dataset}] Record ID {record_ref}: {message}`
    /// and inserted into the category's set. Returns `false` when an identical
    /// message was already present.
    pub fn log(
        &mut self,
        category: IssueCategory,
        dataset: Dataset,
        record_ref: &str,
        message: impl AsRef<str>,
    ) -> bool {
        let rendered = format!("[{}] Record ID {}: {}", dataset, record_ref, message.as_ref());
        self.issues.entry(category).or_default().insert(rendered)
    }

    /// Returns true if no issue has been logged.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Total number of distinct messages across all categories.
    pub fn total(&self) -> usize {
        self.issues.values().map(BTreeSet::len).sum()
    }

    /// Number of distinct messages logged under `category`.
    pub fn count(&self, category: IssueCategory) -> usize {
        self.issues.get(&category).map_or(0, BTreeSet::len)
    }

    /// Returns true if the exact rendered message exists under `category`.
    pub fn contains(&self, category: IssueCategory, rendered: &str) -> bool {
        self.issues
            .get(&category)
            .is_some_and(|messages| messages.contains(rendered))
    }

    /// Iterates over the messages of a category in sorted order.
    pub fn messages(&self, category: IssueCategory) -> impl Iterator<Item = &str> {
        self.issues
            .get(&category)
            .into_iter()
            .flat_map(|messages| messages.iter().map(String::as_str))
    }

    /// Iterates over categories (alphabetically) with their messages.
    pub fn categories(&self) -> impl Iterator<Item = (IssueCategory, &BTreeSet<String>)> {
        self.issues.iter().map(|(category, messages)| (*category, messages))
    }

    /// Folds another registry into this one, preserving deduplication.
    pub fn merge(&mut self, other: IssueRegistry) {
        for (category, messages) in other.issues {
            self.issues.entry(category).or_default().extend(messages);
        }
    }
}
