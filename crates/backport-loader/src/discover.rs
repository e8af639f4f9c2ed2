//! Mapping-file discovery
//!
//! A mapping file is named `<prefix><older>to<newer>.<extension>`, so
//! `mapping-1.18to1.19.json` declares the step `1.19 -> 1.18`.

use crate::config::LoaderConfig;
use crate::error::LoadError;
use backport_chain::VersionLabel;
use std::path::{Path, PathBuf};

/// A discovered mapping file and the step it declares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingFile {
    /// Location on disk
    pub path: PathBuf,
    /// Newer endpoint of the step
    pub newer: VersionLabel,
    /// Older endpoint of the step
    pub older: VersionLabel,
}

/// Scan a directory (non-recursively) for mapping files
///
/// Entries that are not regular files or do not match the naming
/// convention are ignored. Results are sorted by file name.
///
/// # Errors
/// - [`LoadError::NotADirectory`] if `dir` is not a directory
/// - [`LoadError::Io`] if the directory cannot be listed
/// - [`LoadError::InvalidFileName`] / [`LoadError::InvalidVersion`] for a
///   matching file name whose version pair is malformed
pub fn discover(dir: &Path, config: &LoaderConfig) -> Result<Vec<MappingFile>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut found = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| LoadError::io_error(dir, e))? {
        let entry = entry.map_err(|e| LoadError::io_error(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some((older, newer)) = parse_file_name(name, config)? else {
            continue;
        };

        tracing::debug!(file = name, %newer, %older, "discovered mapping file");
        found.push(MappingFile { path, newer, older });
    }

    found.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(found)
}

/// Extract `(older, newer)` from a mapping file name
///
/// Returns `Ok(None)` when the name does not follow the prefix/extension
/// convention at all.
///
/// # Errors
/// A conventional name whose middle part is not `<older>to<newer>` with
/// valid labels.
pub fn parse_file_name(
    name: &str,
    config: &LoaderConfig,
) -> Result<Option<(VersionLabel, VersionLabel)>, LoadError> {
    let suffix = format!(".{}", config.file_extension);
    let Some(pair) = name
        .strip_prefix(config.file_prefix.as_str())
        .and_then(|rest| rest.strip_suffix(suffix.as_str()))
    else {
        return Ok(None);
    };

    let Some((older, newer)) = pair.split_once("to") else {
        return Err(LoadError::InvalidFileName {
            name: name.to_string(),
        });
    };

    let parse = |label: &str| {
        label
            .parse::<VersionLabel>()
            .map_err(|source| LoadError::InvalidVersion {
                name: name.to_string(),
                source,
            })
    };

    Ok(Some((parse(older)?, parse(newer)?)))
}
