//! Reference sets used for cross-dataset integrity checks.
//!
//! Built by a pre-pass over the users and brands sources before any
//! validation runs. The pre-pass never logs issues: malformed lines are
//! skipped here and reported by the dataset's own validator.

use crate::{LineSource, Record, split_lines};
use dqa_core::{AuditError, DEFAULT_BRANDS_FILE, DEFAULT_USERS_FILE, Dataset, Result};
use std::collections::HashSet;
use tracing::info;

const BRAND_CODE_FIELD: &str = "brandCode";

/// Known user identifiers and brand codes.
#[derive(Debug, Clone)]
pub struct ReferenceSets {
    user_ids: HashSet<String>,
    brand_codes: HashSet<String>,
    users_source: String,
    brands_source: String,
}

impl Default for ReferenceSets {
    fn default() -> Self {
        Self {
            user_ids: HashSet::new(),
            brand_codes: HashSet::new(),
            users_source: DEFAULT_USERS_FILE.to_string(),
            brands_source: DEFAULT_BRANDS_FILE.to_string(),
        }
    }
}

impl ReferenceSets {
    /// Creates empty reference sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans both sources and collects their identifiers.
    ///
    /// Only I/O failures are errors; undecodable lines and records without a
    /// usable identifier contribute nothing.
    pub fn build(users: &dyn LineSource, brands: &dyn LineSource) -> Result<Self> {
        let mut sets = Self {
            users_source: users.name(),
            brands_source: brands.name(),
            ..Self::default()
        };

        scan(users, Dataset::Users, |record| {
            if let Some(id) = record.identifier() {
                sets.user_ids.insert(id);
            }
        })?;

        scan(brands, Dataset::Brands, |record| {
            if let Some(code) = record.get_str(BRAND_CODE_FIELD) {
                sets.brand_codes.insert(code.to_string());
            }
        })?;

        info!(
            "Found {} unique user IDs and {} unique brand codes.",
            sets.user_ids.len(),
            sets.brand_codes.len()
        );

        Ok(sets)
    }

    /// Adds a known user identifier.
    pub fn with_user(mut self, id: impl Into<String>) -> Self {
        self.user_ids.insert(id.into());
        self
    }

    /// Adds a known brand code.
    pub fn with_brand_code(mut self, code: impl Into<String>) -> Self {
        self.brand_codes.insert(code.into());
        self
    }

    /// Returns true if `id` belongs to a user record.
    pub fn has_user(&self, id: &str) -> bool {
        self.user_ids.contains(id)
    }

    /// Returns true if `code` belongs to a brand record.
    pub fn has_brand_code(&self, code: &str) -> bool {
        self.brand_codes.contains(code)
    }

    /// Number of distinct user identifiers.
    pub fn user_count(&self) -> usize {
        self.user_ids.len()
    }

    /// Number of distinct brand codes.
    pub fn brand_count(&self) -> usize {
        self.brand_codes.len()
    }

    /// Name of the users source, as cited in orphan messages.
    pub fn users_source(&self) -> &str {
        &self.users_source
    }

    /// Name of the brands source, as cited in orphan messages.
    pub fn brands_source(&self) -> &str {
        &self.brands_source
    }
}

fn scan(
    source: &dyn LineSource,
    dataset: Dataset,
    mut visit: impl FnMut(&Record),
) -> Result<()> {
    let reader = source
        .open()
        .map_err(|e| AuditError::dataset_read(dataset, source.name(), e))?;

    for line in split_lines(reader) {
        let line = line.map_err(|e| AuditError::dataset_read(dataset, source.name(), e))?;
        if let Some(record) = Record::parse(&line) {
            visit(&record);
        }
    }

    Ok(())
}
