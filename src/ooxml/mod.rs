//! Office Open XML (OOXML) writers.
//!
//! The module is organized into layers:
//!
//! 1. **OPC Layer** (`opc`): package structure, relationships, content types
//!    and the ZIP container
//! 2. **DrawingML** (`drawings`): shape, fill, line and text fragments shared
//!    by both formats
//! 3. **Format-Specific Modules**:
//!    - `pptx`: PowerPoint presentations
//!    - `docx`: Word documents
//!    - `metadata`: core and extended document properties
pub mod docx;
pub mod drawings;
pub(crate) mod metadata;
pub mod opc;
pub mod pptx;

// Re-export commonly used types from OPC layer
pub use opc::{OpcPackage, PackURI};

pub use docx::DocumentWriter;
pub use pptx::PresentationWriter;
