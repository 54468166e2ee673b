//! Loader for formcheck input files (YAML/TOML formats).
//!
//! Item forms, rule tables and message catalogs are all plain serde types,
//! so this crate exposes generic parse functions plus extension-based format
//! detection instead of one loader per type.
//!
//! # Example
//!
//! ```rust
//! use formcheck_core::Item;
//! use formcheck_parser::parse_yaml;
//!
//! let yaml = r#"
//! itemName: notebook
//! price: 1200
//! quantity: 20
//! "#;
//!
//! let item: Item = parse_yaml(yaml).expect("Failed to parse item");
//! assert_eq!(item.price, Some(1200));
//! ```

use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading an input file.
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
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported input file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// Parse a value from a YAML string.
pub fn parse_yaml<T: DeserializeOwned>(content: &str) -> Result<T> {
    let value = serde_yaml_ng::from_str(content)?;
    Ok(value)
}

/// Parse a value from a TOML string.
pub fn parse_toml<T: DeserializeOwned>(content: &str) -> Result<T> {
    let value = toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    Ok(value)
}

/// Detect the input format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `InputFormat::Yaml`
/// * `.toml` → `InputFormat::Toml`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<InputFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(InputFormat::Yaml),
        "toml" => Ok(InputFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a value from a file with automatic format detection.
///
/// The format is determined by the file extension:
/// - `.yaml`, `.yml` → parsed as YAML
/// - `.toml` → parsed as TOML
///
/// # Example
///
/// ```no_run
/// use formcheck_core::Item;
/// use formcheck_parser::parse_file;
/// use std::path::Path;
///
/// let item: Item = parse_file(Path::new("forms/new_item.yml")).unwrap();
/// println!("Loaded item: {:?}", item.item_name);
/// ```
pub fn parse_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    let format = detect_format(path)?;

    match format {
        InputFormat::Yaml => parse_yaml(&content),
        InputFormat::Toml => parse_toml(&content),
    }
}
