//! Testing utilities for the backport workspace
//!
//! Shared fixtures: version labels, step tables, chains, and temporary
//! mapping directories.

#![allow(missing_docs)]

use backport_chain::{ChainValidator, RewriteEntry, StepConverterTable, VersionLabel, VersionOrdering};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn label(s: &str) -> VersionLabel {
    s.parse().unwrap()
}

/// Step with the given exact and rename rules
pub fn step(
    newer: &str,
    older: &str,
    exact: &[(&str, &str)],
    rename: &[(&str, &str)],
) -> StepConverterTable {
    let entries = exact
        .iter()
        .map(|(from, to)| RewriteEntry::exact(*from, *to))
        .chain(rename.iter().map(|(from, to)| RewriteEntry::rename(*from, *to)));
    StepConverterTable::new(label(newer), label(older), entries)
}

/// `3.0 -> 2.0 -> 1.0` with `a -> b` exact then `b -> c` rename
pub fn three_version_chain() -> VersionOrdering {
    ChainValidator::validate(vec![
        step("3.0", "2.0", &[("a", "b")], &[]),
        step("2.0", "1.0", &[], &[("b", "c")]),
    ])
    .unwrap()
}

/// Temporary directory of mapping files
pub struct MappingDir {
    dir: TempDir,
}

impl MappingDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `mapping-<older>to<newer>.json` with a `blockstates` section
    pub fn write_mapping(&self, older: &str, newer: &str, blockstates: &[(&str, &str)]) -> PathBuf {
        let section: serde_json::Map<String, Value> = blockstates
            .iter()
            .map(|(k, v)| ((*k).to_string(), Value::String((*v).to_string())))
            .collect();
        let mut doc = serde_json::Map::new();
        doc.insert("blockstates".to_string(), Value::Object(section));
        self.write_json(&format!("mapping-{older}to{newer}.json"), &Value::Object(doc))
    }

    pub fn write_json(&self, name: &str, value: &Value) -> PathBuf {
        self.write_raw(name, &serde_json::to_string_pretty(value).unwrap())
    }

    pub fn write_raw(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }
}

impl Default for MappingDir {
    fn default() -> Self {
        Self::new()
    }
}
