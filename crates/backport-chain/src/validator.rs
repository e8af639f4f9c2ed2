//! Chain validation
//!
//! Checks that declared steps form one contiguous, gap-free chain before
//! anything is composed over them.

use crate::error::ChainError;
use crate::ordering::VersionOrdering;
use crate::step::StepConverterTable;
use crate::version::Version;
use std::collections::HashMap;
use std::sync::Arc;

/// Validator for declared version steps
#[derive(Debug, Clone, Copy, Default)]
pub struct ChainValidator;

impl ChainValidator {
    /// Validate declared steps and build the ordering over them
    ///
    /// Steps may be supplied in any order. They are sorted newest first and
    /// each step's older endpoint must be the next step's newer endpoint.
    ///
    /// # Errors
    /// - [`ChainError::Empty`] if no steps are supplied
    /// - [`ChainError::NotDescending`] if a step does not go toward an older version
    /// - [`ChainError::DuplicateStep`] if two steps share a newer endpoint
    /// - [`ChainError::Gap`] if consecutive steps do not connect
    pub fn validate(
        steps: impl IntoIterator<Item = StepConverterTable>,
    ) -> Result<VersionOrdering, ChainError> {
        let mut steps: Vec<StepConverterTable> = steps.into_iter().collect();
        if steps.is_empty() {
            return Err(ChainError::Empty);
        }

        for step in &steps {
            if step.older() >= step.newer() {
                return Err(ChainError::NotDescending {
                    newer: step.newer().clone(),
                    older: step.older().clone(),
                });
            }
        }

        steps.sort_by(|a, b| b.newer().cmp(a.newer()));

        for pair in steps.windows(2) {
            let (current, next) = (&pair[0], &pair[1]);
            if current.newer() == next.newer() {
                return Err(ChainError::DuplicateStep {
                    version: current.newer().clone(),
                });
            }
            if current.older() != next.newer() {
                return Err(ChainError::Gap {
                    expected: current.older().clone(),
                    found: next.newer().clone(),
                });
            }
        }

        let oldest = steps[steps.len() - 1].older().clone();
        let total = steps.len() + 1;

        let mut versions = Vec::with_capacity(total);
        let mut tables = HashMap::with_capacity(steps.len());
        for (position, step) in steps.into_iter().enumerate() {
            let ordinal = total - 1 - position;
            versions.push(Version::new(ordinal, step.newer().clone()));
            tables.insert(ordinal, Arc::new(step));
        }
        versions.push(Version::new(0, oldest));

        let ordering = VersionOrdering::from_validated(versions, tables);
        tracing::info!(
            versions = ordering.len(),
            newest = %ordering.newest(),
            oldest = %ordering.oldest(),
            "validated version chain"
        );
        Ok(ordering)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::VersionLabel;

    fn v(s: &str) -> VersionLabel {
        s.parse().unwrap()
    }

    fn step(newer: &str, older: &str) -> StepConverterTable {
        StepConverterTable::identity(v(newer), v(older))
    }

    #[test]
    fn single_step_chain() {
        let ordering = ChainValidator::validate(vec![step("1.18", "1.17")]).unwrap();
        assert_eq!(ordering.len(), 2);
        assert_eq!(ordering.newest().ordinal(), 1);
        assert_eq!(ordering.oldest().ordinal(), 0);
    }

    #[test]
    fn unordered_input_is_sorted() {
        let ordering = ChainValidator::validate(vec![
            step("1.16", "1.15"),
            step("1.18", "1.17"),
            step("1.17", "1.16"),
        ])
        .unwrap();

        let labels: Vec<String> = ordering
            .all_versions_descending()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(labels, vec!["1.18", "1.17", "1.16", "1.15"]);
    }

    #[test]
    fn empty_rejected() {
        let result = ChainValidator::validate(Vec::new());
        assert_eq!(result.unwrap_err(), ChainError::Empty);
    }

    #[test]
    fn gap_rejected() {
        let result = ChainValidator::validate(vec![step("1.18", "1.17"), step("1.16", "1.15")]);
        assert_eq!(
            result.unwrap_err(),
            ChainError::Gap {
                expected: v("1.17"),
                found: v("1.16"),
            }
        );
    }

    #[test]
    fn duplicate_rejected() {
        let result = ChainValidator::validate(vec![step("1.18", "1.17"), step("1.18", "1.16")]);
        assert_eq!(
            result.unwrap_err(),
            ChainError::DuplicateStep { version: v("1.18") }
        );
    }

    #[test]
    fn identical_duplicate_rejected() {
        let result = ChainValidator::validate(vec![step("1.18", "1.17"), step("1.18", "1.17")]);
        assert!(matches!(result, Err(ChainError::DuplicateStep { .. })));
    }

    #[test]
    fn inverted_step_rejected() {
        let result = ChainValidator::validate(vec![step("1.17", "1.18")]);
        assert!(matches!(result, Err(ChainError::NotDescending { .. })));

        let result = ChainValidator::validate(vec![step("1.17", "1.17")]);
        assert!(matches!(result, Err(ChainError::NotDescending { .. })));
    }

    #[test]
    fn overlapping_step_is_a_gap() {
        // 1.18 -> 1.16 skips over the declared 1.17 -> 1.16
        let result = ChainValidator::validate(vec![step("1.18", "1.16"), step("1.17", "1.16")]);
        assert!(matches!(result, Err(ChainError::Gap { .. })));
    }
}
