//! Error types for chain validation and converter composition

use crate::version::VersionLabel;

/// Errors validating a declared version chain
///
/// All variants are fatal: a converter built over a broken chain could
/// silently produce wrong identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    /// No steps were declared
    #[error("empty version chain: no steps declared")]
    Empty,

    /// Consecutive steps do not share an endpoint
    #[error("chain gap: no step declared from {expected} (next declared step starts at {found})")]
    Gap {
        /// Older endpoint that should also be the newer endpoint of the next step
        expected: VersionLabel,
        /// Newer endpoint of the next step actually declared
        found: VersionLabel,
    },

    /// More than one step declared for the same newer version
    #[error("duplicate step declared from {version}")]
    DuplicateStep {
        /// Newer endpoint declared twice
        version: VersionLabel,
    },

    /// Step whose older endpoint is not older than its newer endpoint
    #[error("step {newer} -> {older} does not go toward an older version")]
    NotDescending {
        /// Declared newer endpoint
        newer: VersionLabel,
        /// Declared older endpoint
        older: VersionLabel,
    },
}

/// Errors composing a converter
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComposeError {
    /// Conversion toward a newer version was requested
    #[error("cannot convert from {from} to newer version {to}: only backward conversion is supported")]
    Direction {
        /// Requested source version
        from: VersionLabel,
        /// Requested target version
        to: VersionLabel,
    },

    /// A hop of a validated chain has no step table
    #[error("internal error: no step table between {newer} and {older}")]
    MissingStep {
        /// Newer endpoint of the hop
        newer: VersionLabel,
        /// Older endpoint of the hop
        older: VersionLabel,
    },

    /// Version is not a member of the chain
    #[error("unknown version: {0}")]
    UnknownVersion(VersionLabel),
}

impl ComposeError {
    /// Check if the error stems from the caller's request
    ///
    /// `MissingStep` is an internal consistency failure and returns `false`.
    #[inline]
    #[must_use]
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::Direction { .. } | Self::UnknownVersion(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> VersionLabel {
        s.parse().unwrap()
    }

    #[test]
    fn gap_message_names_missing_link() {
        let err = ChainError::Gap {
            expected: v("1.17"),
            found: v("1.16"),
        };
        let message = err.to_string();
        assert!(message.contains("1.17"));
        assert!(message.contains("1.16"));
    }

    #[test]
    fn usage_errors() {
        assert!(ComposeError::Direction {
            from: v("1.16"),
            to: v("1.18"),
        }
        .is_usage_error());
        assert!(ComposeError::UnknownVersion(v("9.9")).is_usage_error());
        assert!(!ComposeError::MissingStep {
            newer: v("1.18"),
            older: v("1.17"),
        }
        .is_usage_error());
    }
}
