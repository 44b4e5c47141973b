use anyhow::Result;
use colored::*;
use dqa_core::{AuditReport, Dataset};
use serde_json::json;

pub fn print_audit_summary(report: &AuditReport, format: &str) -> Result<()> {
    match format {
        "json" => print_json_summary(report),
        _ => {
            print_text_summary(report);
            Ok(())
        }
    }
}

fn print_text_summary(report: &AuditReport) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  DATA QUALITY AUDIT".bold());
    println!("{}", "═".repeat(60));

    if report.passed() {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "No data quality issues found".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Data quality issues found".red().bold()
        );

        println!("\n{}", "Issues by type:".yellow().bold());
        for (category, messages) in report.issues.categories() {
            println!("  {:<26} {}", category.as_str(), messages.len());
        }
    }

    println!("\n{}", "Datasets:".bold());
    for dataset in Dataset::ALL {
        let stats = report.stats.dataset(dataset);
        println!(
            "  {:<9} {} lines, {} invalid, {} checked",
            dataset.label(),
            stats.lines_read,
            stats.invalid_lines,
            stats.records_checked
        );
    }

    println!("\n{}", "Summary:".bold());
    println!("  Known user IDs:   {}", report.stats.known_user_ids);
    println!("  Known brands:     {}", report.stats.known_brand_codes);
    println!("  Total issues:     {}", report.issues.total());
    println!("  Duration:         {} ms", report.stats.duration_ms);
    println!("{}", "═".repeat(60));
}

fn print_json_summary(report: &AuditReport) -> Result<()> {
    let categories: serde_json::Map<String, serde_json::Value> = report
        .issues
        .categories()
        .map(|(category, messages)| (category.as_str().to_string(), json!(messages.len())))
        .collect();

    let output = json!({
        "passed": report.passed(),
        "categories": categories,
        "stats": report.stats,
        "summary": {
            "total_issues": report.issues.total(),
        }
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

/// Status line that goes to stderr when stdout carries the JSON summary.
pub fn print_status(message: &str, format: &str) {
    if format == "json" {
        eprintln!("{} {}", "✓".green().bold(), message.green());
    } else {
        print_success(message);
    }
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}
