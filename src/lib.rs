//! Lessonkit - declarative slide and worksheet layouts rendered to Office files
//!
//! Content is described once with the layout model in [`layout`]: pages on a
//! fixed canvas holding filled rectangles, text boxes, tables and flowing
//! paragraphs. The same model is serialized either as a PowerPoint
//! presentation (`.pptx`) or a Word document (`.docx`).
//!
//! # Features
//!
//! - **Layout model**: absolute positioning in EMU, explicit paint order
//! - **PPTX writer**: one blank-layout slide per page
//! - **DOCX writer**: one section per page; shapes become page-anchored drawings
//! - **Reproducible output**: identical documents produce identical bytes
//! - **Lesson content**: the Ex 1K deck and worksheet in [`lesson`]
//!
//! # Example - Writing a presentation
//!
//! ```no_run
//! use lessonkit::common::RGBColor;
//! use lessonkit::layout::{Alignment, Canvas, Document, Rect, RunStyle, Shape, TextBox};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut deck = Document::new();
//! let slide = deck.add_page(Canvas::widescreen());
//! slide.add_shape(Shape::rect(Rect::from_inches(0.0, 0.0, 13.33, 1.35)).fill(RGBColor::new(0x1A, 0x23, 0x5C)));
//! slide.add_text_box(TextBox::with_text(
//!     Rect::from_inches(0.25, 0.1, 10.0, 0.75),
//!     "Today's Lesson Roadmap",
//!     RunStyle::new(32.0, RGBColor::WHITE).bold(true),
//!     Alignment::Left,
//! ));
//! deck.save("roadmap.pptx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Writing a worksheet
//!
//! ```no_run
//! use lessonkit::common::RGBColor;
//! use lessonkit::layout::{Canvas, Cell, Document, Paragraph, RunStyle, Table};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut worksheet = Document::new();
//! let page = worksheet.add_page(Canvas::letter());
//! page.add_paragraph(Paragraph::with_run("Q1", RunStyle::new(12.0, RGBColor::BLACK).bold(true)));
//!
//! let mut answer = Cell::with_text("Answer: ____", RunStyle::new(11.0, RGBColor::BLACK));
//! answer.set_background(RGBColor::new(0xF2, 0xF2, 0xF2));
//! page.add_table(Table::from_rows(1, vec![vec![answer]]));
//!
//! worksheet.save("worksheet.docx")?;
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod layout;
pub mod lesson;
pub mod ooxml;
pub mod render;

// Re-export commonly used types
pub use common::{Error, Length, RGBColor, Result};
pub use layout::{Canvas, Document, Page};
pub use render::{Format, render, save};
