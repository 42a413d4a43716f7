//! Word (.docx) document output.
//!
//! A [`Document`](crate::layout::Document) maps onto WordprocessingML as
//! follows:
//!
//! - each page is a section with the page's size and margins, starting on a
//!   new page
//! - paragraphs and tables flow in the body; a table with a frame floats at
//!   the frame's page position
//! - shapes and text boxes are anchored drawings positioned from the page
//!   corner, painted in element order
//!
//! # Example
//!
//! ```rust
//! use lessonkit::layout::{Canvas, Document, Paragraph, RunStyle};
//! use lessonkit::ooxml::docx::DocumentWriter;
//! use lessonkit::render::Backend;
//!
//! let mut doc = Document::new();
//! doc.add_page(Canvas::letter())
//!     .add_paragraph(Paragraph::with_run("Worksheet", RunStyle::default().bold(true)));
//!
//! let package = DocumentWriter::new().build_package(&doc)?;
//! assert_eq!(package.part_count(), 5);
//! # Ok::<(), lessonkit::common::Error>(())
//! ```

pub mod template;
pub mod writer;

pub use writer::DocumentWriter;
