//! PresentationML writer components for PPTX.

pub mod pres;
mod shape;
mod slide;
mod table;

// Re-export main types
pub use pres::PresentationWriter;
