use anyhow::{Result, bail};
use colored::*;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(config_path: Option<&Path>) -> Result<()> {
    info!(
        "Checking configuration: {}",
        config_path.map_or("<defaults>".to_string(), |p| p.display().to_string())
    );

    let config = super::load_config(config_path)?;
    output::print_success("Configuration is valid");

    println!("\nConfiguration Summary:");
    println!("  Output:              {}", config.output.display());
    println!("  Financial tolerance: {}", config.financial_tolerance);

    println!("\nDatasets:");
    let mut missing = 0;
    for (label, path) in [
        ("Users", &config.users),
        ("Brands", &config.brands),
        ("Receipts", &config.receipts),
    ] {
        if path.is_file() {
            println!("  {} {:<9} {}", "✓".green().bold(), label, path.display());
        } else {
            println!("  {} {:<9} {}", "✗".red().bold(), label, path.display());
            missing += 1;
        }
    }

    if missing > 0 {
        bail!("{} input dataset(s) not found", missing);
    }

    Ok(())
}
