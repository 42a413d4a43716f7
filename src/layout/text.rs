//! Text runs, paragraphs and positioned text boxes.

use bitflags::bitflags;

use crate::common::{Error, Length, RGBColor, Result};
use crate::layout::geometry::Rect;

bitflags! {
    /// Font style flags of a run.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FontStyle: u8 {
        const BOLD = 0b0000_0001;
        const ITALIC = 0b0000_0010;
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// Value of DrawingML `a:pPr/@algn`.
    pub(crate) fn drawingml(&self) -> &'static str {
        match self {
            Alignment::Left => "l",
            Alignment::Center => "ctr",
            Alignment::Right => "r",
            Alignment::Justify => "just",
        }
    }

    /// Value of WordprocessingML `w:jc/@w:val`.
    pub(crate) fn wordprocessingml(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "both",
        }
    }
}

/// Complete formatting of one run.
///
/// Every attribute is always written out, so a run never depends on styles
/// inherited from its paragraph, shape or the document defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunStyle {
    /// Font size in points
    pub font_size: f64,
    pub flags: FontStyle,
    pub color: RGBColor,
}

impl Default for RunStyle {
    fn default() -> Self {
        Self {
            font_size: 18.0,
            flags: FontStyle::empty(),
            color: RGBColor::BLACK,
        }
    }
}

impl RunStyle {
    pub fn new(font_size: f64, color: RGBColor) -> Self {
        Self {
            font_size,
            flags: FontStyle::empty(),
            color,
        }
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.flags.set(FontStyle::BOLD, bold);
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.flags.set(FontStyle::ITALIC, italic);
        self
    }

    #[inline]
    pub fn is_bold(&self) -> bool {
        self.flags.contains(FontStyle::BOLD)
    }

    #[inline]
    pub fn is_italic(&self) -> bool {
        self.flags.contains(FontStyle::ITALIC)
    }

    pub(crate) fn validate(&self, what: &str) -> Result<()> {
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(Error::InvalidFontSize {
                what: format!("{what} font size"),
                value: self.font_size,
            });
        }
        Ok(())
    }
}

/// A string with one formatting.
///
/// Line feeds in the text are hard line breaks.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
    pub style: RunStyle,
}

impl Run {
    pub fn new(text: impl Into<String>, style: RunStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// The visual lines of the run, split at line feeds.
    ///
    /// Carriage returns are ordinary characters and stay in their line.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

/// A block of runs sharing alignment and spacing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    pub alignment: Alignment,
    /// Space above the paragraph, in points
    pub space_before: Option<f64>,
    /// Space below the paragraph, in points
    pub space_after: Option<f64>,
    pub indent_left: Option<Length>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paragraph holding a single run.
    pub fn with_run(text: impl Into<String>, style: RunStyle) -> Self {
        Self::new().run(text, style)
    }

    pub fn run(mut self, text: impl Into<String>, style: RunStyle) -> Self {
        self.runs.push(Run::new(text, style));
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn space_before(mut self, pt: f64) -> Self {
        self.space_before = Some(pt);
        self
    }

    pub fn space_after(mut self, pt: f64) -> Self {
        self.space_after = Some(pt);
        self
    }

    pub fn indent(mut self, left: Length) -> Self {
        self.indent_left = Some(left);
        self
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    pub(crate) fn validate(&self, what: &str) -> Result<()> {
        for (name, spacing) in [
            ("space before", self.space_before),
            ("space after", self.space_after),
        ] {
            if let Some(value) = spacing
                && (!value.is_finite() || value < 0.0)
            {
                return Err(Error::InvalidSpacing {
                    what: format!("{what} {name}"),
                    value,
                });
            }
        }
        if let Some(indent) = self.indent_left
            && indent.is_negative()
        {
            return Err(Error::negative(format!("{what} indent"), indent.emus()));
        }
        for (i, run) in self.runs.iter().enumerate() {
            run.style.validate(&format!("{what} run {i}"))?;
        }
        Ok(())
    }
}

/// Paragraphs placed in a rectangle at absolute coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    pub frame: Rect,
    pub paragraphs: Vec<Paragraph>,
    /// Wrap lines at the frame width; otherwise lines extend past it
    pub wrap: bool,
}

impl TextBox {
    /// Empty, wrapping text box.
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            paragraphs: Vec::new(),
            wrap: true,
        }
    }

    /// Text box with one paragraph of one run.
    pub fn with_text(
        frame: Rect,
        text: impl Into<String>,
        style: RunStyle,
        alignment: Alignment,
    ) -> Self {
        Self::new(frame).paragraph(Paragraph::with_run(text, style).align(alignment))
    }

    pub fn paragraph(mut self, paragraph: Paragraph) -> Self {
        self.paragraphs.push(paragraph);
        self
    }

    pub fn push_paragraph(&mut self, paragraph: Paragraph) -> &mut Self {
        self.paragraphs.push(paragraph);
        self
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Text of the box with paragraphs separated by line feeds.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(crate) fn validate(&self, what: &str) -> Result<()> {
        self.frame.validate(what)?;
        for (i, paragraph) in self.paragraphs.iter().enumerate() {
            paragraph.validate(&format!("{what} paragraph {i}"))?;
        }
        Ok(())
    }
}
