//! Error types for mapping-file loading

use backport_chain::{ChainError, VersionError};
use std::path::PathBuf;

/// Errors loading a mapping directory
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Mapping path is not a directory
    #[error("not a directory: {}", path.display())]
    NotADirectory {
        /// Offending path
        path: PathBuf,
    },

    /// IO error while reading
    #[error("io error reading {}: {source}", path.display())]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Mapping file is not valid JSON
    #[error("invalid json in {}: {source}", path.display())]
    Json {
        /// Mapping file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// Mapping file is JSON but has the wrong shape
    #[error("invalid mapping document {}: {reason}", path.display())]
    InvalidDocument {
        /// Mapping file
        path: PathBuf,
        /// What is wrong with it
        reason: String,
    },

    /// Mapping file name does not contain a version pair
    #[error("invalid version pair in file name: {name}")]
    InvalidFileName {
        /// File name
        name: String,
    },

    /// Version label in a file name does not parse
    #[error("invalid version in file name {name}: {source}")]
    InvalidVersion {
        /// File name
        name: String,
        /// Underlying error
        #[source]
        source: VersionError,
    },

    /// Rewrite value is not a string
    #[error("entry '{key}' in {} is not a string", path.display())]
    InvalidEntry {
        /// Mapping file
        path: PathBuf,
        /// Entry key
        key: String,
    },

    /// Loader configuration file does not parse
    #[error("invalid loader config {}: {source}", path.display())]
    Config {
        /// Config file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },

    /// Loader configuration is inconsistent
    #[error("invalid loader config: {0}")]
    InvalidConfig(String),

    /// Declared steps do not form a valid chain
    #[error(transparent)]
    Chain(#[from] ChainError),
}

impl LoadError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create invalid document error for path
    pub fn invalid_document(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidDocument {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
