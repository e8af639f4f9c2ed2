//! Reusable identifier converters

use crate::step::StepConverterTable;
use std::sync::Arc;

/// Side-effect-free function from identifier to identifier
///
/// Cheap to clone; shares step tables with the ordering it was composed
/// from. `Send + Sync`, so one converter can serve any number of threads.
#[derive(Debug, Clone)]
pub struct Converter {
    kind: ConverterKind,
}

#[derive(Debug, Clone)]
enum ConverterKind {
    Identity,
    Step(Arc<StepConverterTable>),
    Composite(Vec<Arc<StepConverterTable>>),
}

impl Converter {
    /// Converter returning its input unchanged
    #[inline]
    #[must_use]
    pub fn identity() -> Self {
        Self {
            kind: ConverterKind::Identity,
        }
    }

    /// Converter applying a single step
    #[inline]
    #[must_use]
    pub fn step(table: Arc<StepConverterTable>) -> Self {
        Self {
            kind: ConverterKind::Step(table),
        }
    }

    /// Converter applying steps in order, each feeding the next
    #[must_use]
    pub fn composite(tables: Vec<Arc<StepConverterTable>>) -> Self {
        match tables.len() {
            0 => Self::identity(),
            _ => Self {
                kind: ConverterKind::Composite(tables),
            },
        }
    }

    /// Convert one identifier
    #[must_use]
    pub fn apply(&self, input: &str) -> String {
        match &self.kind {
            ConverterKind::Identity => input.to_string(),
            ConverterKind::Step(table) => table.apply(input),
            ConverterKind::Composite(tables) => tables
                .iter()
                .fold(input.to_string(), |output, table| table.apply(&output)),
        }
    }

    /// Number of steps applied per call
    #[must_use]
    pub fn hops(&self) -> usize {
        match &self.kind {
            ConverterKind::Identity => 0,
            ConverterKind::Step(_) => 1,
            ConverterKind::Composite(tables) => tables.len(),
        }
    }

    /// Check if this is the identity converter
    #[inline]
    #[must_use]
    pub fn is_identity(&self) -> bool {
        matches!(self.kind, ConverterKind::Identity)
    }
}
