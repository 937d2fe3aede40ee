//! Loader for flatcheck configurations (JSON/YAML/TOML formats) and data files.
//!
//! This crate turns configuration files into the strongly-typed
//! `Configuration` structure and streams data files line by line.
//!
//! # Example
//!
//! ```rust
//! use flatcheck_parser::parse_yaml;
//!
//! let yaml = r#"
//! delimiter: "|"
//! size: 2
//! columns:
//!   - name: code
//!     required: true
//!     pattern: ^[A-Z]+$
//!   - name: amount
//!     integer: true
//! "#;
//!
//! let configuration = parse_yaml(yaml).expect("Failed to parse configuration");
//! assert_eq!(configuration.size, 2);
//! ```

mod rows;

pub use rows::RowReader;

use flatcheck_core::Configuration;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading configurations and data.
#[derive(Debug, Error)]
pub enum ParserError {
    /// JSON parsing or deserialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

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
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// Parse a configuration from a JSON string.
///
/// # Example
///
/// ```rust
/// use flatcheck_parser::parse_json;
///
/// let configuration = parse_json(r#"{ "delimiter": ";", "size": 3 }"#).unwrap();
/// assert_eq!(configuration.delimiter, ';');
/// assert!(configuration.columns.is_empty());
/// ```
pub fn parse_json(content: &str) -> Result<Configuration> {
    let configuration: Configuration = serde_json::from_str(content)?;
    Ok(configuration)
}

/// Parse a configuration from a YAML string.
pub fn parse_yaml(content: &str) -> Result<Configuration> {
    let configuration: Configuration = serde_yaml_ng::from_str(content)?;
    Ok(configuration)
}

/// Parse a configuration from a TOML string.
///
/// # Example
///
/// ```rust
/// use flatcheck_parser::parse_toml;
///
/// let toml = r#"
/// size = 2
///
/// [[columns]]
/// name = "code"
/// required = true
///
/// [[columns]]
/// name = "amount"
/// integer = true
/// "#;
///
/// let configuration = parse_toml(toml).unwrap();
/// assert_eq!(configuration.columns.len(), 2);
/// ```
pub fn parse_toml(content: &str) -> Result<Configuration> {
    let configuration: Configuration =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    Ok(configuration)
}

/// Detect the configuration format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.json` → `ConfigFormat::Json`
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
        "json" => Ok(ConfigFormat::Json),
        "yaml" | "yml" => Ok(ConfigFormat::Yaml),
        "toml" => Ok(ConfigFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a configuration from a file with automatic format detection.
///
/// # Example
///
/// ```no_run
/// use flatcheck_parser::parse_file;
/// use std::path::Path;
///
/// let configuration = parse_file(Path::new("config/orders.json")).unwrap();
/// println!("Expecting {} fields per row", configuration.size);
/// ```
pub fn parse_file(path: &Path) -> Result<Configuration> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), ?format, "Loading configuration");

    match format {
        ConfigFormat::Json => parse_json(&content),
        ConfigFormat::Yaml => parse_yaml(&content),
        ConfigFormat::Toml => parse_toml(&content),
    }
}
