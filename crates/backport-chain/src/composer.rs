//! Converter composition over a validated chain
//!
//! [`ConverterComposer`] turns a `(from, to)` request into a [`Converter`]:
//! identity for equal versions, the step itself for adjacent versions, and
//! a composite of every intermediate step otherwise.

use crate::converter::Converter;
use crate::error::ComposeError;
use crate::ordering::VersionOrdering;
use crate::step::StepConverterTable;
use crate::version::{Version, VersionLabel};
use std::sync::Arc;

/// Builds converters on demand from a validated ordering
///
/// Holds only a shared borrow; composing never mutates anything.
#[derive(Debug, Clone, Copy)]
pub struct ConverterComposer<'a> {
    ordering: &'a VersionOrdering,
}

impl<'a> ConverterComposer<'a> {
    /// Create composer over an ordering
    #[inline]
    #[must_use]
    pub fn new(ordering: &'a VersionOrdering) -> Self {
        Self { ordering }
    }

    /// Ordering this composer reads from
    #[inline]
    #[must_use]
    pub fn ordering(&self) -> &'a VersionOrdering {
        self.ordering
    }

    /// Compose a converter from `from` down to `to`
    ///
    /// # Errors
    /// - [`ComposeError::UnknownVersion`] if either version is not in the ordering
    /// - [`ComposeError::Direction`] if `to` is newer than `from`
    /// - [`ComposeError::MissingStep`] if a hop has no step table
    pub fn compose(&self, from: &Version, to: &Version) -> Result<Converter, ComposeError> {
        if from == to {
            return Ok(Converter::identity());
        }

        for version in [from, to] {
            if !self.ordering.contains(version) {
                return Err(ComposeError::UnknownVersion(version.label().clone()));
            }
        }

        if to.is_newer_than(from) {
            return Err(ComposeError::Direction {
                from: from.label().clone(),
                to: to.label().clone(),
            });
        }

        if from.ordinal() == to.ordinal() + 1 {
            let step = self.hop(from, to)?;
            return Ok(Converter::step(step));
        }

        let versions = self.ordering.all_versions_descending();
        let start = versions.len() - 1 - from.ordinal();
        let end = versions.len() - 1 - to.ordinal();

        let steps = versions[start..=end]
            .windows(2)
            .map(|hop| self.hop(&hop[0], &hop[1]))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(%from, %to, hops = steps.len(), "composed converter");
        Ok(Converter::composite(steps))
    }

    /// Compose a converter between two labels
    ///
    /// # Errors
    /// As [`compose`](Self::compose); labels outside the chain give
    /// [`ComposeError::UnknownVersion`].
    pub fn compose_labels(
        &self,
        from: &VersionLabel,
        to: &VersionLabel,
    ) -> Result<Converter, ComposeError> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;
        self.compose(from, to)
    }

    fn resolve(&self, label: &VersionLabel) -> Result<&'a Version, ComposeError> {
        self.ordering
            .version(label)
            .ok_or_else(|| ComposeError::UnknownVersion(label.clone()))
    }

    fn hop(&self, newer: &Version, older: &Version) -> Result<Arc<StepConverterTable>, ComposeError> {
        self.ordering
            .step_between(newer, older)
            .cloned()
            .ok_or_else(|| ComposeError::MissingStep {
                newer: newer.label().clone(),
                older: older.label().clone(),
            })
    }
}
