//! Declarative layout model.
//!
//! A [`Document`] is an ordered list of [`Page`]s. Each page owns a fixed
//! [`Canvas`] and a list of [`Element`]s painted in insertion order: later
//! elements cover earlier ones, and there is no other z-ordering.
//!
//! The model is plain data. Nothing is checked while it is being built,
//! except canvas sizes; [`Document::validate`] checks everything else and is
//! run by every render entry point before any output is produced.
//!
//! # Example
//!
//! ```rust
//! use lessonkit::common::RGBColor;
//! use lessonkit::layout::{Alignment, Canvas, Document, Rect, RunStyle, Shape, TextBox};
//! use lessonkit::render::Format;
//!
//! let mut doc = Document::new();
//! let page = doc.add_page(Canvas::from_inches(10.0, 5.0)?);
//! page.add_shape(Shape::rect(Rect::from_inches(0.0, 0.0, 10.0, 1.0)).fill(RGBColor::BLACK));
//! page.add_text_box(TextBox::with_text(
//!     Rect::from_inches(0.2, 0.1, 9.6, 0.8),
//!     "Line 1\nLine 2",
//!     RunStyle::new(24.0, RGBColor::WHITE).bold(true),
//!     Alignment::Center,
//! ));
//!
//! let bytes = doc.render(Format::Presentation)?;
//! assert!(bytes.starts_with(b"PK"));
//! # Ok::<(), lessonkit::common::Error>(())
//! ```

pub mod document;
pub mod geometry;
pub mod page;
pub mod shape;
pub mod table;
pub mod text;

pub use document::{Document, DocumentProperties};
pub use geometry::{Canvas, Margins, Rect};
pub use page::{Element, Page};
pub use shape::{Line, Shape};
pub use table::{Border, BorderStyle, Cell, CellBorders, Table};
pub use text::{Alignment, FontStyle, Paragraph, Run, RunStyle, TextBox};
