//! Main audit engine.
//!
//! This module provides the `AuditEngine` that runs the audit phases in
//! order: reference pre-pass, users, brands, receipts.

use crate::{
    BrandsValidator, DatasetValidator, FileSource, LineSource, ReceiptsValidator, ReferenceSets,
    UsersValidator,
};
use dqa_core::{AuditConfig, AuditReport, AuditStats, IssueRegistry, Result};
use std::time::Instant;
use tracing::info;

/// Orchestrates a complete audit run.
///
/// # Example
///
/// ```rust
/// use dqa_core::AuditConfig;
/// use dqa_validator::{AuditEngine, MemorySource};
///
/// let users = MemorySource::from_lines("users.json", [r#"{"_id": {"$oid": "u1"}, "active": true, "createdDate": {"$date": 1}, "role": "consumer"}"#]);
/// let brands = MemorySource::new("brands.json", "");
/// let receipts = MemorySource::from_lines("receipts.json", [r#"{"_id": {"$oid": "r1"}, "userId": "u1"}"#]);
///
/// let engine = AuditEngine::new(AuditConfig::default());
/// let report = engine.run_sources(&users, &brands, &receipts).unwrap();
///
/// assert!(report.passed());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AuditEngine {
    config: AuditConfig,
}

impl AuditEngine {
    /// Creates an engine for the given configuration.
    pub fn new(config: AuditConfig) -> Self {
        Self { config }
    }

    /// Configuration of this engine.
    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Audits the files named by the configuration.
    ///
    /// An input file that cannot be opened or read aborts the run.
    pub fn run(&self) -> Result<AuditReport> {
        let users = FileSource::new(&self.config.users);
        let brands = FileSource::new(&self.config.brands);
        let receipts = FileSource::new(&self.config.receipts);

        self.run_sources(&users, &brands, &receipts)
    }

    /// Audits arbitrary sources.
    ///
    /// The users and brands sources are read twice: once to build the
    /// reference sets, once for their own validation pass.
    pub fn run_sources(
        &self,
        users: &dyn LineSource,
        brands: &dyn LineSource,
        receipts: &dyn LineSource,
    ) -> Result<AuditReport> {
        let start = Instant::now();

        info!("Pre-scanning files to build reference ID sets...");
        let references = ReferenceSets::build(users, brands)?;

        let mut issues = IssueRegistry::new();
        let mut stats = AuditStats {
            known_user_ids: references.user_count(),
            known_brand_codes: references.brand_count(),
            ..AuditStats::default()
        };

        stats.users = UsersValidator::new().validate_source(users, &mut issues)?;
        stats.brands = BrandsValidator::new().validate_source(brands, &mut issues)?;
        stats.receipts = ReceiptsValidator::new(&references)
            .with_tolerance(self.config.financial_tolerance)
            .validate_source(receipts, &mut issues)?;

        stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            "Audit finished: {} issue(s) in {} ms",
            issues.total(),
            stats.duration_ms
        );

        Ok(AuditReport { issues, stats })
    }
}
