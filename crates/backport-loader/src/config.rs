//! Loader configuration
//!
//! Provides [`LoaderConfig`], read from an optional TOML file.

use crate::error::LoadError;
use serde::Deserialize;
use std::path::Path;

/// Conventions of a mapping directory
///
/// # Example
/// ```toml
/// file_prefix = "mapping-"
/// file_extension = "json"
/// section = "blockstates"
/// rename_sentinel = "["
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    /// File name prefix before `<older>to<newer>`
    pub file_prefix: String,

    /// File extension, without the dot
    pub file_extension: String,

    /// Top-level JSON member holding the rewrite entries
    pub section: String,

    /// Trailing character marking a value as a rename-only rule
    pub rename_sentinel: char,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            file_prefix: "mapping-".to_string(),
            file_extension: "json".to_string(),
            section: "blockstates".to_string(),
            rename_sentinel: '[',
        }
    }
}

impl LoaderConfig {
    /// Parse config from TOML text; missing keys take defaults
    ///
    /// # Errors
    /// Returns the TOML error for malformed input or unknown keys.
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Read and validate config from a TOML file
    ///
    /// # Errors
    /// - [`LoadError::Io`] if the file cannot be read
    /// - [`LoadError::Config`] if it does not parse
    /// - [`LoadError::InvalidConfig`] if it fails [`validate`](Self::validate)
    pub fn from_toml_file(path: &Path) -> Result<Self, LoadError> {
        let source = std::fs::read_to_string(path).map_err(|e| LoadError::io_error(path, e))?;
        let config = Self::from_toml_str(&source).map_err(|source| LoadError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "loaded loader config");
        Ok(config)
    }

    /// Check the conventions are usable
    ///
    /// # Errors
    /// [`LoadError::InvalidConfig`] for an empty extension or section, or a
    /// sentinel that collides with the identifier grammar's closing `]`.
    pub fn validate(&self) -> Result<(), LoadError> {
        if self.file_extension.is_empty() {
            return Err(LoadError::InvalidConfig("file_extension is empty".to_string()));
        }
        if self.file_extension.starts_with('.') {
            return Err(LoadError::InvalidConfig(format!(
                "file_extension must not start with '.': {}",
                self.file_extension
            )));
        }
        if self.section.is_empty() {
            return Err(LoadError::InvalidConfig("section is empty".to_string()));
        }
        if self.rename_sentinel == ']' {
            return Err(LoadError::InvalidConfig(
                "rename_sentinel must not be ']'".to_string(),
            ));
        }
        Ok(())
    }
}
