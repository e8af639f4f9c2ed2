//! Backport CLI
//!
//! Runtime dispatch over a mapping directory: load, validate, and convert
//! identifiers on demand.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod cli;
pub mod commands;
pub mod logging;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
