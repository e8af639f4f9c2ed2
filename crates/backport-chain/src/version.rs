//! Schema version labels
//!
//! Provides [`VersionLabel`] for `major.minor[.bugfix]` labels and
//! [`Version`], a label bound to its position in a validated chain.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Display label of a schema version
///
/// Ordered by major, then minor, then bugfix. A missing bugfix sorts before
/// any present one, so `1.16 < 1.16.0 < 1.16.2`.
///
/// # Examples
/// - `"1.18"` → major 1, minor 18
/// - `"1.16.2"` → major 1, minor 16, bugfix 2
///
/// Serializes as the display string and deserializes through [`FromStr`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VersionLabel {
    major: u32,
    minor: u32,
    bugfix: Option<u32>,
}

impl VersionLabel {
    /// Create a `major.minor` label
    #[inline]
    #[must_use]
    pub fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            bugfix: None,
        }
    }

    /// Create a `major.minor.bugfix` label
    #[inline]
    #[must_use]
    pub fn with_bugfix(major: u32, minor: u32, bugfix: u32) -> Self {
        Self {
            major,
            minor,
            bugfix: Some(bugfix),
        }
    }

    /// Major component
    #[inline]
    #[must_use]
    pub fn major(&self) -> u32 {
        self.major
    }

    /// Minor component
    #[inline]
    #[must_use]
    pub fn minor(&self) -> u32 {
        self.minor
    }

    /// Bugfix component, if present
    #[inline]
    #[must_use]
    pub fn bugfix(&self) -> Option<u32> {
        self.bugfix
    }

    /// Join components with a custom separator
    ///
    /// `1.16.2` joined with `"_"` gives `1_16_2`.
    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        match self.bugfix {
            Some(bugfix) => format!(
                "{}{separator}{}{separator}{}",
                self.major, self.minor, bugfix
            ),
            None => format!("{}{separator}{}", self.major, self.minor),
        }
    }
}

impl Display for VersionLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(&self.join("."))
    }
}

impl FromStr for VersionLabel {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components: Vec<&str> = s.split('.').collect();
        if components.len() < 2 || components.len() > 3 {
            return Err(VersionError::InvalidFormat(s.to_string()));
        }

        let parse = |component: &str| {
            if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
                return Err(VersionError::InvalidComponent {
                    label: s.to_string(),
                    component: component.to_string(),
                });
            }
            component
                .parse::<u32>()
                .map_err(|_| VersionError::InvalidComponent {
                    label: s.to_string(),
                    component: component.to_string(),
                })
        };

        Ok(Self {
            major: parse(components[0])?,
            minor: parse(components[1])?,
            bugfix: components.get(2).copied().map(parse).transpose()?,
        })
    }
}

impl TryFrom<String> for VersionLabel {
    type Error = VersionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<VersionLabel> for String {
    fn from(label: VersionLabel) -> Self {
        label.to_string()
    }
}

/// A schema version positioned in a validated chain
///
/// Only [`ChainValidator`](crate::ChainValidator) assigns ordinals, so a
/// `Version` always refers to a member of some validated chain. The oldest
/// version has ordinal 0 and ordinals grow toward the newest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    ordinal: usize,
    label: VersionLabel,
}

impl Version {
    pub(crate) fn new(ordinal: usize, label: VersionLabel) -> Self {
        Self { ordinal, label }
    }

    /// Position in the chain (0 = oldest)
    #[inline]
    #[must_use]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Display label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &VersionLabel {
        &self.label
    }

    /// Compare chain positions: `Greater` means `self` is newer
    #[inline]
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.ordinal.cmp(&other.ordinal)
    }

    /// Check if `self` is strictly newer than `other`
    #[inline]
    #[must_use]
    pub fn is_newer_than(&self, other: &Self) -> bool {
        self.ordinal > other.ordinal
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.label.fmt(f)
    }
}

/// Errors parsing version labels
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    /// Wrong number of components
    #[error("invalid version format: {0} (expected major.minor or major.minor.bugfix)")]
    InvalidFormat(String),

    /// Non-numeric component
    #[error("invalid component '{component}' in version {label}")]
    InvalidComponent {
        /// Full label being parsed
        label: String,
        /// Offending component
        component: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_from_str_two_components() {
        let label: VersionLabel = "1.18".parse().unwrap();
        assert_eq!(label.major(), 1);
        assert_eq!(label.minor(), 18);
        assert_eq!(label.bugfix(), None);
    }

    #[test]
    fn label_from_str_three_components() {
        let label: VersionLabel = "1.16.2".parse().unwrap();
        assert_eq!(label, VersionLabel::with_bugfix(1, 16, 2));
    }

    #[test]
    fn label_from_str_rejects_single_component() {
        let result: Result<VersionLabel, _> = "1".parse();
        assert!(matches!(result, Err(VersionError::InvalidFormat(_))));
    }

    #[test]
    fn label_from_str_rejects_four_components() {
        let result: Result<VersionLabel, _> = "1.2.3.4".parse();
        assert!(matches!(result, Err(VersionError::InvalidFormat(_))));
    }

    #[test]
    fn label_from_str_rejects_non_numeric() {
        let result: Result<VersionLabel, _> = "1.x".parse();
        assert!(matches!(result, Err(VersionError::InvalidComponent { .. })));

        let result: Result<VersionLabel, _> = "1.-2".parse();
        assert!(matches!(result, Err(VersionError::InvalidComponent { .. })));

        let result: Result<VersionLabel, _> = "1.".parse();
        assert!(matches!(result, Err(VersionError::InvalidComponent { .. })));
    }

    #[test]
    fn label_ordering() {
        let v1_16: VersionLabel = "1.16".parse().unwrap();
        let v1_16_0: VersionLabel = "1.16.0".parse().unwrap();
        let v1_16_2: VersionLabel = "1.16.2".parse().unwrap();
        let v1_17: VersionLabel = "1.17".parse().unwrap();
        let v2_0: VersionLabel = "2.0".parse().unwrap();

        assert!(v1_16 < v1_16_0);
        assert!(v1_16_0 < v1_16_2);
        assert!(v1_16_2 < v1_17);
        assert!(v1_17 < v2_0);
        assert_ne!(v1_16, v1_16_0);
    }

    #[test]
    fn label_display_and_join() {
        let label = VersionLabel::with_bugfix(1, 9, 4);
        assert_eq!(label.to_string(), "1.9.4");
        assert_eq!(label.join("_"), "1_9_4");
        assert_eq!(VersionLabel::new(1, 18).join("_"), "1_18");
        assert_eq!(format!("{:<6}|", VersionLabel::new(1, 18)), "1.18  |");
    }

    #[test]
    fn label_serde_uses_display_form() {
        let label = VersionLabel::with_bugfix(1, 16, 2);
        let json = serde_json::to_string(&label).unwrap();
        assert_eq!(json, "\"1.16.2\"");

        let back: VersionLabel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, label);

        let back: VersionLabel = serde_json::from_str("\"1.18\"").unwrap();
        assert_eq!(back, VersionLabel::new(1, 18));
    }

    #[test]
    fn label_serde_rejects_malformed() {
        assert!(serde_json::from_str::<VersionLabel>("\"1.x\"").is_err());
        assert!(serde_json::from_str::<VersionLabel>("\"1\"").is_err());
        assert!(serde_json::from_str::<VersionLabel>(r#"{"major":1,"minor":16}"#).is_err());
    }

    #[test]
    fn version_compare_by_ordinal() {
        let older = Version::new(0, VersionLabel::new(1, 17));
        let newer = Version::new(1, VersionLabel::new(1, 18));

        assert_eq!(newer.compare(&older), Ordering::Greater);
        assert_eq!(older.compare(&newer), Ordering::Less);
        assert_eq!(older.compare(&older), Ordering::Equal);
        assert!(newer.is_newer_than(&older));
        assert!(!older.is_newer_than(&older));
    }
}
