//! Mapping-file parsing
//!
//! Turns a mapping document into a [`StepConverterTable`]. Values ending in
//! the rename sentinel become rename rules with the sentinel stripped; all
//! other values are exact rules. Keys ending in the sentinel are skipped.

use crate::config::LoaderConfig;
use crate::discover::MappingFile;
use crate::error::LoadError;
use backport_chain::{RewriteEntry, StepConverterTable};
use serde_json::Value;

/// Read and parse one mapping file
///
/// # Errors
/// [`LoadError::Io`] if the file cannot be read, otherwise as
/// [`parse_mapping`].
pub fn read_mapping(file: &MappingFile, config: &LoaderConfig) -> Result<StepConverterTable, LoadError> {
    let source =
        std::fs::read_to_string(&file.path).map_err(|e| LoadError::io_error(&file.path, e))?;
    parse_mapping(&source, file, config)
}

/// Parse a mapping document
///
/// A document without the configured section yields an identity step.
///
/// # Errors
/// - [`LoadError::Json`] for malformed JSON
/// - [`LoadError::InvalidDocument`] if the document or section is not an object
/// - [`LoadError::InvalidEntry`] for a non-string value
pub fn parse_mapping(
    source: &str,
    file: &MappingFile,
    config: &LoaderConfig,
) -> Result<StepConverterTable, LoadError> {
    let document: Value = serde_json::from_str(source).map_err(|source| LoadError::Json {
        path: file.path.clone(),
        source,
    })?;

    let Some(document) = document.as_object() else {
        return Err(LoadError::invalid_document(&file.path, "top level is not an object"));
    };

    let Some(section) = document.get(&config.section) else {
        tracing::debug!(
            file = %file.path.display(),
            section = %config.section,
            "no rewrite section, using identity step"
        );
        return Ok(StepConverterTable::identity(file.newer.clone(), file.older.clone()));
    };

    let Some(section) = section.as_object() else {
        return Err(LoadError::invalid_document(
            &file.path,
            format!("'{}' is not an object", config.section),
        ));
    };

    let mut entries = Vec::with_capacity(section.len());
    for (key, value) in section {
        let Some(value) = value.as_str() else {
            return Err(LoadError::InvalidEntry {
                path: file.path.clone(),
                key: key.clone(),
            });
        };
        match classify_entry(key, value, config.rename_sentinel) {
            Some(entry) => entries.push(entry),
            None => tracing::warn!(
                file = %file.path.display(),
                key = %key,
                "skipping entry whose key ends with the rename sentinel"
            ),
        }
    }

    let table = StepConverterTable::new(file.newer.clone(), file.older.clone(), entries);
    tracing::debug!(
        file = %file.path.display(),
        exact = table.exact_len(),
        rename = table.rename_len(),
        "parsed mapping file"
    );
    Ok(table)
}

/// Classify one `key -> value` pair
///
/// Returns `None` for a key ending in the sentinel.
#[must_use]
pub fn classify_entry(key: &str, value: &str, sentinel: char) -> Option<RewriteEntry> {
    if key.ends_with(sentinel) {
        return None;
    }
    match value.strip_suffix(sentinel) {
        Some(name) => Some(RewriteEntry::rename(key, name)),
        None => Some(RewriteEntry::exact(key, value)),
    }
}
