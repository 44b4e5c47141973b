//! Parser for audit configuration files (YAML/TOML formats).
//!
//! This module loads an [`AuditConfig`] from YAML or TOML, and renders one
//! back for `dqa init`.
//!
//! # Example
//!
//! ```rust
//! use dqa_parser::parse_yaml;
//!
//! let yaml = r#"
//! users: data/users.json
//! receipts: data/receipts.json
//! financial_tolerance: 0.05
//! "#;
//!
//! let config = parse_yaml(yaml).expect("Failed to parse config");
//! assert_eq!(config.financial_tolerance, 0.05);
//! assert_eq!(config.brands.to_str(), Some("brands.json"));
//! ```

use dqa_core::AuditConfig;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading or rendering a configuration.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,

    /// The configuration parsed but holds an out-of-range value
    #[error(transparent)]
    InvalidConfig(#[from] dqa_core::AuditError),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// Parse a configuration from a YAML string.
///
/// Missing keys fall back to their defaults; unknown keys and out-of-range
/// values are rejected.
pub fn parse_yaml(content: &str) -> Result<AuditConfig> {
    // An empty document deserializes as unit, not as an empty map
    if content.trim().is_empty() {
        return Ok(AuditConfig::default());
    }
    let config: AuditConfig = serde_yaml_ng::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Parse a configuration from a TOML string.
///
/// # Example
///
/// ```rust
/// use dqa_parser::parse_toml;
///
/// let toml = r#"
/// users = "data/users.json"
/// output = "report.txt"
/// "#;
///
/// let config = parse_toml(toml).unwrap();
/// assert_eq!(config.output.to_str(), Some("report.txt"));
/// ```
pub fn parse_toml(content: &str) -> Result<AuditConfig> {
    let config: AuditConfig =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Detect the configuration format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `ConfigFormat::Yaml`
/// * `.toml` → `ConfigFormat::Toml`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<ConfigFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(ConfigFormat::Yaml),
        "toml" => Ok(ConfigFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a configuration file with automatic format detection.
///
/// Relative dataset and report paths inside the file are resolved against the
/// directory containing it.
///
/// ```no_run
/// use dqa_parser::parse_file;
/// use std::path::Path;
///
/// let config = parse_file(Path::new("audits/fetch.yml")).unwrap();
/// println!("Auditing receipts from {}", config.receipts.display());
/// ```
pub fn parse_file(path: &Path) -> Result<AuditConfig> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    let config = match format {
        ConfigFormat::Yaml => parse_yaml(&content)?,
        ConfigFormat::Toml => parse_toml(&content)?,
    };

    match path.parent() {
        Some(base) if !base.as_os_str().is_empty() => Ok(config.relative_to(base)),
        _ => Ok(config),
    }
}

/// Render a configuration in the given format.
pub fn render_config(config: &AuditConfig, format: ConfigFormat) -> Result<String> {
    match format {
        ConfigFormat::Yaml => Ok(serde_yaml_ng::to_string(config)?),
        ConfigFormat::Toml => {
            toml::to_string_pretty(config).map_err(|e| ParserError::TomlError(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn test_parse_valid_yaml() {
        let yaml = r#"
users: in/users.json
brands: in/brands.json
receipts: in/receipts.json
output: out/report.txt
financial_tolerance: 0.02
"#;

        let config = parse_yaml(yaml).expect("Failed to parse valid YAML");

        assert_eq!(config.users, PathBuf::from("in/users.json"));
        assert_eq!(config.brands, PathBuf::from("in/brands.json"));
        assert_eq!(config.receipts, PathBuf::from("in/receipts.json"));
        assert_eq!(config.output, PathBuf::from("out/report.txt"));
        assert_eq!(config.financial_tolerance, 0.02);
    }

    #[test]
    fn test_parse_empty_yaml_uses_defaults() {
        assert_eq!(parse_yaml("").unwrap(), AuditConfig::default());
        assert_eq!(parse_yaml("  \n").unwrap(), AuditConfig::default());
    }

    #[test]
    fn test_parse_yaml_unknown_key() {
        let result = parse_yaml("user: typo.json\n");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ParserError::YamlError(_)));
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = parse_yaml("users: [unterminated\n");
        assert!(matches!(result.unwrap_err(), ParserError::YamlError(_)));
    }

    #[test]
    fn test_parse_rejects_bad_tolerance() {
        let result = parse_yaml("financial_tolerance: -0.5\n");
        assert!(matches!(result.unwrap_err(), ParserError::InvalidConfig(_)));

        let result = parse_yaml("financial_tolerance: .nan\n");
        assert!(matches!(result.unwrap_err(), ParserError::InvalidConfig(_)));

        let result = parse_toml("financial_tolerance = -1.0\n");
        let err = result.unwrap_err();
        assert!(matches!(err, ParserError::InvalidConfig(_)));
        assert!(err.to_string().contains("financial_tolerance"));
    }

    #[test]
    fn test_parse_valid_toml() {
        let toml = r#"
brands = "catalog/brands.json"
financial_tolerance = 0.5
"#;

        let config = parse_toml(toml).expect("Failed to parse valid TOML");

        assert_eq!(config.brands, PathBuf::from("catalog/brands.json"));
        assert_eq!(config.users, PathBuf::from("users.json"));
        assert_eq!(config.financial_tolerance, 0.5);
    }

    #[test]
    fn test_parse_invalid_toml() {
        let invalid_toml = r#"
users = "users.json"
[[[invalid syntax
"#;

        let result = parse_toml(invalid_toml);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ParserError::TomlError(_)));
    }

    #[test]
    fn test_detect_format_yaml() {
        assert_eq!(detect_format(Path::new("dqa.yaml")).unwrap(), ConfigFormat::Yaml);
        assert_eq!(detect_format(Path::new("dqa.YML")).unwrap(), ConfigFormat::Yaml);
    }

    #[test]
    fn test_detect_format_toml() {
        assert_eq!(detect_format(Path::new("dqa.toml")).unwrap(), ConfigFormat::Toml);
    }

    #[test]
    fn test_detect_format_unsupported() {
        let result = detect_format(Path::new("dqa.json"));
        assert!(matches!(
            result.unwrap_err(),
            ParserError::UnsupportedFormat(_)
        ));
    }

    #[test]
    fn test_detect_format_no_extension() {
        let result = detect_format(Path::new("dqa"));
        assert!(matches!(result.unwrap_err(), ParserError::InvalidExtension));
    }

    #[test]
    fn test_parse_file_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dqa.yml");
        std::fs::write(&path, "users: data/users.json\nreceipts: /srv/receipts.json\n").unwrap();

        let config = parse_file(&path).unwrap();

        assert_eq!(config.users, dir.path().join("data/users.json"));
        assert_eq!(config.brands, dir.path().join("brands.json"));
        assert_eq!(config.receipts, PathBuf::from("/srv/receipts.json"));
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file(Path::new("does/not/exist.toml"));
        assert!(matches!(result.unwrap_err(), ParserError::IoError(_)));
    }

    #[test]
    fn test_round_trip_yaml_and_toml() {
        let original = AuditConfig::new()
            .with_users("a/users.json")
            .with_output("report.txt")
            .with_financial_tolerance(0.25);

        let yaml = render_config(&original, ConfigFormat::Yaml).unwrap();
        assert_eq!(parse_yaml(&yaml).unwrap(), original);

        let toml = render_config(&original, ConfigFormat::Toml).unwrap();
        assert_eq!(parse_toml(&toml).unwrap(), original);
    }
}
