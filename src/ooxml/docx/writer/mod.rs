//! Document writer components for DOCX.
//!
//! Everything below is serialization: the layout model is already validated
//! by the time a writer sees it.

pub mod doc;
mod drawing;
mod paragraph;
mod run;
mod section;
mod table;

pub use doc::DocumentWriter;
