//! Backport Loader
//!
//! Reads a directory of mapping files into a validated
//! [`VersionOrdering`](backport_chain::VersionOrdering).
//!
//! # Core Concepts
//!
//! - [`LoaderConfig`]: File naming, section, and sentinel conventions
//! - [`discover`]: Finds `mapping-<older>to<newer>.json` files
//! - [`read_mapping`]: Parses one file into a step table
//! - [`load_chain`]: Discover, parse, and validate in one call
//!
//! # Example
//!
//! ```rust,ignore
//! use backport_loader::{load_chain, LoaderConfig};
//! use backport_chain::ConverterComposer;
//!
//! let ordering = load_chain(Path::new("mappings"), &LoaderConfig::default())?;
//! let converter = ConverterComposer::new(&ordering)
//!     .compose_labels(&"1.18".parse()?, &"1.16".parse()?)?;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod config;
mod discover;
mod error;
mod parse;

// Re-exports
pub use config::LoaderConfig;
pub use discover::{discover, parse_file_name, MappingFile};
pub use error::LoadError;
pub use parse::{classify_entry, parse_mapping, read_mapping};

use backport_chain::{ChainValidator, StepConverterTable, VersionOrdering};
use std::path::Path;

/// Discover and parse every mapping file in a directory
///
/// # Errors
/// Any discovery or parse error; see [`discover`] and [`read_mapping`].
pub fn load_steps(dir: &Path, config: &LoaderConfig) -> Result<Vec<StepConverterTable>, LoadError> {
    discover(dir, config)?
        .iter()
        .map(|file| read_mapping(file, config))
        .collect()
}

/// Load a mapping directory and validate it as a chain
///
/// # Errors
/// Any error from [`load_steps`], or [`LoadError::Chain`] if the steps do
/// not form a contiguous chain (including an empty directory).
pub fn load_chain(dir: &Path, config: &LoaderConfig) -> Result<VersionOrdering, LoadError> {
    let steps = load_steps(dir, config)?;
    tracing::debug!(dir = %dir.display(), steps = steps.len(), "loaded mapping files");
    Ok(ChainValidator::validate(steps)?)
}
