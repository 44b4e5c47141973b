use anyhow::{Context, Result, bail};
use dqa_core::AuditConfig;
use dqa_parser::{ConfigFormat, detect_format, render_config};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(output_path: Option<&Path>, force: bool) -> Result<()> {
    info!("Initializing default audit configuration");

    let format = match output_path {
        Some(path) => detect_format(path)
            .with_context(|| format!("Cannot choose a format for: {}", path.display()))?,
        None => ConfigFormat::Yaml,
    };

    let rendered = render_config(&AuditConfig::default(), format)
        .context("Failed to serialize configuration")?;

    // Output to file or stdout
    if let Some(path) = output_path {
        if path.exists() && !force {
            bail!(
                "Refusing to overwrite existing file: {} (use --force)",
                path.display()
            );
        }
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        file.write_all(rendered.as_bytes())
            .with_context(|| format!("Failed to write to file: {}", path.display()))?;
        output::print_success(&format!("Configuration written to: {}", path.display()));
    } else {
        println!("{}", rendered);
    }

    Ok(())
}
