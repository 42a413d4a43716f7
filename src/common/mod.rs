//! Common types, traits, and utilities shared by the layout model and the
//! OOXML writers.

// Submodule declarations
pub mod error;
pub mod style;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
pub use style::{Length, RGBColor};
