//! Validated version ordering
//!
//! [`VersionOrdering`] can only be produced by
//! [`ChainValidator::validate`](crate::ChainValidator::validate), so every
//! ordering in circulation is a contiguous chain.

use crate::step::StepConverterTable;
use crate::version::{Version, VersionLabel};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

/// Total order over the versions of one chain, with a step table per hop
///
/// Immutable after construction and safe to share across threads.
#[derive(Debug, Clone)]
pub struct VersionOrdering {
    /// Newest first
    versions: Vec<Version>,
    by_label: HashMap<VersionLabel, usize>,
    /// Keyed by ordinal of the newer endpoint
    steps: HashMap<usize, Arc<StepConverterTable>>,
}

impl VersionOrdering {
    /// Assemble an ordering (validator use only)
    ///
    /// `versions` must be newest first with ordinals already assigned.
    pub(crate) fn from_validated(
        versions: Vec<Version>,
        steps: HashMap<usize, Arc<StepConverterTable>>,
    ) -> Self {
        let by_label = versions
            .iter()
            .map(|v| (v.label().clone(), v.ordinal()))
            .collect();
        Self {
            versions,
            by_label,
            steps,
        }
    }

    /// Compare two versions: `Greater` means `a` is newer
    #[inline]
    #[must_use]
    pub fn compare(&self, a: &Version, b: &Version) -> Ordering {
        a.compare(b)
    }

    /// Step table between two adjacent versions
    ///
    /// Returns `None` unless `newer` is exactly one hop newer than `older`
    /// and both belong to this ordering.
    #[must_use]
    pub fn step_between(&self, newer: &Version, older: &Version) -> Option<&Arc<StepConverterTable>> {
        if !self.contains(newer) || !self.contains(older) {
            return None;
        }
        if newer.ordinal() != older.ordinal() + 1 {
            return None;
        }
        self.steps.get(&newer.ordinal())
    }

    /// All versions, newest first
    #[inline]
    #[must_use]
    pub fn all_versions_descending(&self) -> &[Version] {
        &self.versions
    }

    /// Look up a version by label
    #[must_use]
    pub fn version(&self, label: &VersionLabel) -> Option<&Version> {
        self.by_label
            .get(label)
            .and_then(|&ordinal| self.by_ordinal(ordinal))
    }

    /// Check if a version belongs to this ordering
    #[must_use]
    pub fn contains(&self, version: &Version) -> bool {
        self.by_ordinal(version.ordinal())
            .is_some_and(|v| v.label() == version.label())
    }

    /// Newest version
    #[inline]
    #[must_use]
    pub fn newest(&self) -> &Version {
        &self.versions[0]
    }

    /// Oldest version
    #[inline]
    #[must_use]
    pub fn oldest(&self) -> &Version {
        &self.versions[self.versions.len() - 1]
    }

    /// Number of versions (always at least two)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Always `false`: a validated chain has at least one step
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Step tables, newest step first
    pub fn steps(&self) -> impl Iterator<Item = &Arc<StepConverterTable>> {
        self.versions
            .iter()
            .filter_map(|v| self.steps.get(&v.ordinal()))
    }

    fn by_ordinal(&self, ordinal: usize) -> Option<&Version> {
        let index = self.versions.len().checked_sub(ordinal + 1)?;
        self.versions.get(index)
    }

    /// Copy of this ordering with one hop's table removed
    #[cfg(test)]
    pub(crate) fn without_step(&self, newer: &Version) -> Self {
        let mut copy = self.clone();
        copy.steps.remove(&newer.ordinal());
        copy
    }
}

#[cfg(test)]
mod tests {
    use crate::{ChainValidator, RewriteEntry, StepConverterTable, VersionLabel};
    use std::cmp::Ordering;

    fn v(s: &str) -> VersionLabel {
        s.parse().unwrap()
    }

    fn ordering() -> crate::VersionOrdering {
        ChainValidator::validate(vec![
            StepConverterTable::new(v("1.18"), v("1.17"), vec![RewriteEntry::exact("a", "b")]),
            StepConverterTable::identity(v("1.17"), v("1.16.2")),
            StepConverterTable::identity(v("1.16.2"), v("1.16")),
        ])
        .unwrap()
    }

    #[test]
    fn versions_descending_with_ordinals() {
        let o = ordering();
        let labels: Vec<String> = o
            .all_versions_descending()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(labels, vec!["1.18", "1.17", "1.16.2", "1.16"]);

        let ordinals: Vec<usize> = o
            .all_versions_descending()
            .iter()
            .map(|v| v.ordinal())
            .collect();
        assert_eq!(ordinals, vec![3, 2, 1, 0]);
    }

    #[test]
    fn lookup_by_label() {
        let o = ordering();
        let version = o.version(&v("1.16.2")).unwrap();
        assert_eq!(version.ordinal(), 1);
        assert!(o.version(&v("1.19")).is_none());
        assert!(o.contains(version));
    }

    #[test]
    fn newest_and_oldest() {
        let o = ordering();
        assert_eq!(o.newest().label(), &v("1.18"));
        assert_eq!(o.oldest().label(), &v("1.16"));
        assert_eq!(o.len(), 4);
        assert!(!o.is_empty());
    }

    #[test]
    fn compare_versions() {
        let o = ordering();
        let newer = o.version(&v("1.18")).unwrap();
        let older = o.version(&v("1.16")).unwrap();
        assert_eq!(o.compare(newer, older), Ordering::Greater);
        assert_eq!(o.compare(older, newer), Ordering::Less);
        assert_eq!(o.compare(newer, newer), Ordering::Equal);
    }

    #[test]
    fn step_between_adjacent_only() {
        let o = ordering();
        let v18 = o.version(&v("1.18")).unwrap();
        let v17 = o.version(&v("1.17")).unwrap();
        let v16 = o.version(&v("1.16")).unwrap();

        let step = o.step_between(v18, v17).unwrap();
        assert_eq!(step.apply("a"), "b");

        assert!(o.step_between(v17, v18).is_none());
        assert!(o.step_between(v18, v16).is_none());
        assert!(o.step_between(v18, v18).is_none());
    }

    #[test]
    fn step_between_rejects_foreign_versions() {
        let o = ordering();
        let other = ChainValidator::validate(vec![
            StepConverterTable::identity(v("2.1"), v("2.0")),
            StepConverterTable::identity(v("2.0"), v("1.9")),
            StepConverterTable::identity(v("1.9"), v("1.8")),
        ])
        .unwrap();

        let foreign_newer = other.version(&v("2.1")).unwrap();
        let foreign_older = other.version(&v("2.0")).unwrap();
        assert!(!o.contains(foreign_newer));
        assert!(o.step_between(foreign_newer, foreign_older).is_none());
    }

    #[test]
    fn steps_newest_first() {
        let o = ordering();
        let newer: Vec<String> = o.steps().map(|s| s.newer().to_string()).collect();
        assert_eq!(newer, vec!["1.18", "1.17", "1.16.2"]);
    }
}
