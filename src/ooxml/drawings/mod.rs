//! DrawingML (DML) fragments shared by the PresentationML and
//! WordprocessingML writers.
//!
//! Slides use DrawingML for every shape, text body and table; documents use it
//! for the shape properties of anchored boxes. Each helper appends one
//! element to an XML string buffer.

pub mod fill;
pub mod text;
pub mod xfrm;

pub use fill::{write_cell_border, write_fill, write_line, write_solid_fill};
pub use text::write_paragraph;
pub use xfrm::{write_a_xfrm, write_prst_geom_rect, write_xfrm};
