//! Filled and outlined rectangles.

use crate::common::{Error, Length, RGBColor, Result};
use crate::layout::geometry::Rect;

/// Solid outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    pub color: RGBColor,
    pub width: Length,
}

/// A rectangle with optional fill and outline.
///
/// Without a fill the rectangle is transparent; without a line it has no
/// outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub frame: Rect,
    pub fill: Option<RGBColor>,
    pub line: Option<Line>,
}

impl Shape {
    pub fn rect(frame: Rect) -> Self {
        Self {
            frame,
            fill: None,
            line: None,
        }
    }

    pub fn fill(mut self, color: RGBColor) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn line(mut self, color: RGBColor, width: Length) -> Self {
        self.line = Some(Line { color, width });
        self
    }

    pub(crate) fn validate(&self, what: &str) -> Result<()> {
        self.frame.validate(what)?;
        if let Some(line) = &self.line
            && line.width.is_negative()
        {
            return Err(Error::negative(format!("{what} line width"), line.width.emus()));
        }
        Ok(())
    }
}
