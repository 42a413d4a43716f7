//! Unified error types for lessonkit.
//!
//! Every fallible operation in the crate, from layout validation to package
//! serialization and file output, reports through a single [`Error`] type.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
