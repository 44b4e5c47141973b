use anyhow::{Context, Result};
use dqa_core::write_report;
use dqa_validator::AuditEngine;
use std::path::Path;
use tracing::info;

use super::DatasetOverrides;
use crate::output;

pub fn execute(
    config_path: Option<&Path>,
    overrides: DatasetOverrides,
    format: &str,
    strict: bool,
) -> Result<()> {
    let config = overrides.apply(super::load_config(config_path)?);
    info!("Users dataset: {}", config.users.display());
    info!("Brands dataset: {}", config.brands.display());
    info!("Receipts dataset: {}", config.receipts.display());

    let engine = AuditEngine::new(config);
    let report = engine
        .run()
        .context("Audit aborted: an input dataset could not be read")?;

    // A report that cannot be written is reported, never fatal
    let report_path = &engine.config().output;
    info!("Generating data quality report at '{}'", report_path.display());
    match write_report(report_path, &report.issues) {
        Ok(()) if report.passed() => {
            output::print_status("Report generated. No issues were found.", format);
        }
        Ok(()) => {
            output::print_status(
                &format!("Report successfully written to '{}'.", report_path.display()),
                format,
            );
        }
        Err(e) => output::print_error(&format!("FATAL ERROR: {}", e)),
    }

    output::print_audit_summary(&report, format)?;

    if strict && !report.passed() {
        std::process::exit(1);
    }

    Ok(())
}
