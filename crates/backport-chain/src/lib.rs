//! Backport Chain
//!
//! Converts block-state identifiers from one schema version to an older one
//! by chaining single-step rewrite tables.
//!
//! # Core Concepts
//!
//! - [`VersionLabel`]: `major.minor[.bugfix]` display label
//! - [`StepConverterTable`]: Exact and rename rewrites for one adjacent step
//! - [`ChainValidator`]: Rejects empty, gapped, or duplicated step sets
//! - [`VersionOrdering`]: Validated chain with a step table per hop
//! - [`ConverterComposer`]: Builds a [`Converter`] for any backward pair
//!
//! # Example
//!
//! ```rust
//! use backport_chain::{
//!     ChainValidator, ConverterComposer, RewriteEntry, StepConverterTable, VersionLabel,
//! };
//!
//! let v = |s: &str| -> VersionLabel { s.parse().unwrap() };
//! let ordering = ChainValidator::validate(vec![
//!     StepConverterTable::new(v("1.18"), v("1.17"), vec![RewriteEntry::exact("a", "b")]),
//!     StepConverterTable::new(v("1.17"), v("1.16"), vec![RewriteEntry::rename("b", "c")]),
//! ])?;
//!
//! let converter = ConverterComposer::new(&ordering).compose_labels(&v("1.18"), &v("1.16"))?;
//! assert_eq!(converter.apply("a"), "c");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod composer;
mod converter;
mod error;
mod ordering;
mod step;
mod validator;
mod version;

// Re-exports
pub use composer::ConverterComposer;
pub use converter::Converter;
pub use error::{ChainError, ComposeError};
pub use ordering::VersionOrdering;
pub use step::{RewriteEntry, StepConverterTable};
pub use validator::ChainValidator;
pub use version::{Version, VersionError, VersionLabel};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
