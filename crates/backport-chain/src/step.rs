//! Single-step rewrite tables
//!
//! Provides [`StepConverterTable`], the rewrite logic between two adjacent
//! schema versions, and [`RewriteEntry`] for building one.

use crate::version::VersionLabel;
use std::collections::HashMap;

/// One rewrite rule of a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteEntry {
    /// Full identifier to full identifier
    Exact {
        /// Identifier under the newer schema
        from: String,
        /// Identifier under the older schema
        to: String,
    },

    /// Bare name to bare name, property payload carried through
    Rename {
        /// Name under the newer schema
        from: String,
        /// Name under the older schema
        to: String,
    },
}

impl RewriteEntry {
    /// Create exact entry
    #[inline]
    #[must_use]
    pub fn exact(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::Exact {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create rename entry
    #[inline]
    #[must_use]
    pub fn rename(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::Rename {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Rewrite table for one `newer -> older` step
///
/// Holds an exact map (full identifier substitution) and a rename map
/// (bare-name substitution preserving `[properties]`). Exact lookup always
/// wins. Immutable once built.
#[derive(Debug, Clone)]
pub struct StepConverterTable {
    newer: VersionLabel,
    older: VersionLabel,
    exact: HashMap<String, String>,
    rename: HashMap<String, String>,
}

impl StepConverterTable {
    /// Build a table from rewrite entries
    ///
    /// A later entry for a key already present in the same map replaces it.
    #[must_use]
    pub fn new(
        newer: VersionLabel,
        older: VersionLabel,
        entries: impl IntoIterator<Item = RewriteEntry>,
    ) -> Self {
        let mut exact = HashMap::new();
        let mut rename = HashMap::new();

        for entry in entries {
            let (map, kind, from, to) = match entry {
                RewriteEntry::Exact { from, to } => (&mut exact, "exact", from, to),
                RewriteEntry::Rename { from, to } => (&mut rename, "rename", from, to),
            };
            if let Some(previous) = map.insert(from.clone(), to) {
                tracing::debug!(
                    %newer, %older, key = %from, %previous,
                    "duplicate {kind} entry replaced"
                );
            }
        }

        Self {
            newer,
            older,
            exact,
            rename,
        }
    }

    /// Table that returns every input unchanged
    #[inline]
    #[must_use]
    pub fn identity(newer: VersionLabel, older: VersionLabel) -> Self {
        Self::new(newer, older, std::iter::empty())
    }

    /// Newer endpoint of the step
    #[inline]
    #[must_use]
    pub fn newer(&self) -> &VersionLabel {
        &self.newer
    }

    /// Older endpoint of the step
    #[inline]
    #[must_use]
    pub fn older(&self) -> &VersionLabel {
        &self.older
    }

    /// Number of exact entries
    #[inline]
    #[must_use]
    pub fn exact_len(&self) -> usize {
        self.exact.len()
    }

    /// Number of rename entries
    #[inline]
    #[must_use]
    pub fn rename_len(&self) -> usize {
        self.rename.len()
    }

    /// Check if the table rewrites nothing
    #[inline]
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.exact.is_empty() && self.rename.is_empty()
    }

    /// Rewrite one identifier
    ///
    /// Never fails. Identifiers with `[` but no trailing `]` are returned
    /// unchanged, as is anything no rule matches.
    #[must_use]
    pub fn apply(&self, input: &str) -> String {
        if let Some(replaced) = self.exact.get(input) {
            return replaced.clone();
        }

        let Some((name, properties)) = split_identifier(input) else {
            return input.to_string();
        };

        match self.rename.get(name) {
            Some(renamed) if properties.is_empty() => renamed.clone(),
            Some(renamed) => format!("{renamed}[{properties}]"),
            None => input.to_string(),
        }
    }
}

/// Split `NAME[PROPERTIES]` into name and properties
///
/// Returns `None` for malformed input (`[` without trailing `]`).
fn split_identifier(input: &str) -> Option<(&str, &str)> {
    match input.find('[') {
        None => Some((input, "")),
        Some(open) if input.ends_with(']') => {
            Some((&input[..open], &input[open + 1..input.len() - 1]))
        }
        Some(_) => None,
    }
}
