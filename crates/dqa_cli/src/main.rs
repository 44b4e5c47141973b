mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::DatasetOverrides;

#[derive(Parser)]
#[command(name = "dqa")]
#[command(version, about = "Data Quality Auditor CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit the users, brands and receipts datasets and write the report
    Run {
        /// Path to the audit configuration file (YAML or TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Users dataset (overrides the configuration)
        #[arg(long)]
        users: Option<PathBuf>,

        /// Brands dataset (overrides the configuration)
        #[arg(long)]
        brands: Option<PathBuf>,

        /// Receipts dataset (overrides the configuration)
        #[arg(long)]
        receipts: Option<PathBuf>,

        /// Report file (overrides the configuration)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Console summary format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Exit with status 1 when issues are found
        #[arg(short, long)]
        strict: bool,
    },

    /// Check the configuration and the presence of the input datasets
    Check {
        /// Path to the audit configuration file (YAML or TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write a default audit configuration
    Init {
        /// Output file path (defaults to stdout); a .toml extension selects TOML
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Run {
            config,
            users,
            brands,
            receipts,
            output,
            format,
            strict,
        } => {
            let overrides = DatasetOverrides {
                users,
                brands,
                receipts,
                output,
            };
            commands::run::execute(config.as_deref(), overrides, &format, strict)
        }

        Commands::Check { config } => commands::check::execute(config.as_deref()),

        Commands::Init { output, force } => commands::init::execute(output.as_deref(), force),
    }
}
