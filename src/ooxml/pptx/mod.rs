//! PowerPoint (.pptx) presentation output.
//!
//! Every page of a [`Document`](crate::layout::Document) becomes one slide
//! built on a single blank layout. Shapes and text boxes become `p:sp`
//! elements and framed tables become `p:graphicFrame` elements, all in the
//! slide's shape tree in paint order.

pub mod template;
pub mod writer;

pub use writer::PresentationWriter;
