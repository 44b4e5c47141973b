pub mod check;
pub mod init;
pub mod run;

use anyhow::{Context, Result};
use dqa_core::AuditConfig;
use dqa_parser::parse_file;
use std::path::{Path, PathBuf};
use tracing::info;

/// Dataset and report paths given on the command line.
#[derive(Debug, Default)]
pub struct DatasetOverrides {
    pub users: Option<PathBuf>,
    pub brands: Option<PathBuf>,
    pub receipts: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl DatasetOverrides {
    pub fn apply(self, mut config: AuditConfig) -> AuditConfig {
        if let Some(users) = self.users {
            config.users = users;
        }
        if let Some(brands) = self.brands {
            config.brands = brands;
        }
        if let Some(receipts) = self.receipts {
            config.receipts = receipts;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        config
    }
}

/// Loads the configuration file, or the defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<AuditConfig> {
    match path {
        Some(path) => {
            info!("Loading configuration: {}", path.display());
            parse_file(path)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))
        }
        None => Ok(AuditConfig::default()),
    }
}
