//! Tables with independently styled cells.

use crate::common::{Error, Length, RGBColor, Result};
use crate::layout::geometry::Rect;
use crate::layout::text::{Alignment, Paragraph, Run, RunStyle};

/// Border line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderStyle {
    #[default]
    Single,
    Double,
    Dashed,
    Dotted,
}

impl BorderStyle {
    /// Value of WordprocessingML border `w:val`.
    pub(crate) fn wordprocessingml(&self) -> &'static str {
        match self {
            BorderStyle::Single => "single",
            BorderStyle::Double => "double",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
        }
    }

    /// Value of DrawingML `a:prstDash/@val`.
    pub(crate) fn drawingml_dash(&self) -> &'static str {
        match self {
            BorderStyle::Single | BorderStyle::Double => "solid",
            BorderStyle::Dashed => "dash",
            BorderStyle::Dotted => "sysDot",
        }
    }
}

/// One side of a cell border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Border {
    pub style: BorderStyle,
    pub width: Length,
    pub color: RGBColor,
}

impl Border {
    pub fn new(style: BorderStyle, width: Length, color: RGBColor) -> Self {
        Self {
            style,
            width,
            color,
        }
    }

    /// Half-point single black line.
    pub fn thin() -> Self {
        Self::new(BorderStyle::Single, Length::from_pt(0.5), RGBColor::BLACK)
    }
}

/// Borders of one cell; absent sides are not drawn by the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellBorders {
    pub top: Option<Border>,
    pub bottom: Option<Border>,
    pub left: Option<Border>,
    pub right: Option<Border>,
}

impl CellBorders {
    pub fn all(border: Border) -> Self {
        Self {
            top: Some(border),
            bottom: Some(border),
            left: Some(border),
            right: Some(border),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.bottom.is_none() && self.left.is_none() && self.right.is_none()
    }

    /// Sides in `top, left, bottom, right` order.
    pub(crate) fn sides(&self) -> [(&'static str, Option<&Border>); 4] {
        [
            ("top", self.top.as_ref()),
            ("left", self.left.as_ref()),
            ("bottom", self.bottom.as_ref()),
            ("right", self.right.as_ref()),
        ]
    }
}

/// A table cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    pub background: Option<RGBColor>,
    pub borders: CellBorders,
    pub paragraphs: Vec<Paragraph>,
    /// Preferred width; overrides the column width for this cell
    pub width: Option<Length>,
}

impl Cell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell with one paragraph of one run.
    pub fn with_text(text: impl Into<String>, style: RunStyle) -> Self {
        Self {
            paragraphs: vec![Paragraph::with_run(text, style)],
            ..Self::default()
        }
    }

    pub fn set_background(&mut self, color: RGBColor) -> &mut Self {
        self.background = Some(color);
        self
    }

    pub fn set_borders(&mut self, borders: CellBorders) -> &mut Self {
        self.borders = borders;
        self
    }

    pub fn set_width(&mut self, width: Length) -> &mut Self {
        self.width = Some(width);
        self
    }

    pub fn push_paragraph(&mut self, paragraph: Paragraph) -> &mut Self {
        self.paragraphs.push(paragraph);
        self
    }

    /// Append a run to the last paragraph, starting one if the cell is empty.
    pub fn add_run(&mut self, text: impl Into<String>, style: RunStyle) -> &mut Self {
        if self.paragraphs.is_empty() {
            self.paragraphs.push(Paragraph::new());
        }
        if let Some(last) = self.paragraphs.last_mut() {
            last.runs.push(Run::new(text, style));
        }
        self
    }

    /// Set the alignment of every paragraph in the cell.
    pub fn set_alignment(&mut self, alignment: Alignment) -> &mut Self {
        for paragraph in &mut self.paragraphs {
            paragraph.alignment = alignment;
        }
        self
    }

    /// Text of the cell with paragraphs separated by line feeds.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn validate(&self, what: &str) -> Result<()> {
        if let Some(width) = self.width
            && width.is_negative()
        {
            return Err(Error::negative(format!("{what} width"), width.emus()));
        }
        for (side, border) in self.borders.sides() {
            if let Some(border) = border
                && border.width.is_negative()
            {
                return Err(Error::negative(
                    format!("{what} {side} border width"),
                    border.width.emus(),
                ));
            }
        }
        for (i, paragraph) in self.paragraphs.iter().enumerate() {
            paragraph.validate(&format!("{what} paragraph {i}"))?;
        }
        Ok(())
    }
}

/// Rows × columns grid of cells.
///
/// Each cell owns its styling; there is no row, column or table style that
/// cells inherit from.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: usize,
    rows: Vec<Vec<Cell>>,
    /// Absolute placement; required on slides, floats the table on documents
    pub frame: Option<Rect>,
    pub column_widths: Option<Vec<Length>>,
    pub alignment: Alignment,
}

impl Table {
    /// A `rows × columns` grid of empty cells.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self::from_rows(
            columns,
            (0..rows).map(|_| vec![Cell::new(); columns]).collect(),
        )
    }

    /// Build a table from explicit rows.
    ///
    /// The shape is checked when the document is validated: every row must
    /// hold exactly `columns` cells.
    pub fn from_rows(columns: usize, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            columns,
            rows,
            frame: None,
            column_widths: None,
            alignment: Alignment::Left,
        }
    }

    pub fn with_frame(mut self, frame: Rect) -> Self {
        self.frame = Some(frame);
        self
    }

    pub fn with_column_widths(mut self, widths: Vec<Length>) -> Self {
        self.column_widths = Some(widths);
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row)?.get(col)
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.rows.get_mut(row)?.get_mut(col)
    }

    /// Column widths, either the explicit ones or `total` split evenly.
    ///
    /// The last column absorbs the rounding remainder so the widths always sum
    /// to `total` when split.
    pub(crate) fn resolved_column_widths(&self, total: Length) -> Vec<Length> {
        if let Some(widths) = &self.column_widths {
            return widths.clone();
        }
        let count = self.columns.max(1) as i64;
        let each = total.emus() / count;
        let mut widths = vec![Length::from_emus(each); self.columns];
        if let Some(last) = widths.last_mut() {
            *last = Length::from_emus(total.emus() - each * (count - 1));
        }
        widths
    }

    pub(crate) fn validate(&self, what: &str) -> Result<()> {
        if self.columns == 0 || self.rows.is_empty() {
            return Err(Error::MalformedTable(format!(
                "{what} has {} rows and {} columns; both must be at least 1",
                self.rows.len(),
                self.columns
            )));
        }
        for (r, row) in self.rows.iter().enumerate() {
            if row.len() != self.columns {
                return Err(Error::MalformedTable(format!(
                    "{what} row {r} has {} cells, expected {}",
                    row.len(),
                    self.columns
                )));
            }
        }
        if let Some(widths) = &self.column_widths {
            if widths.len() != self.columns {
                return Err(Error::MalformedTable(format!(
                    "{what} has {} column widths for {} columns",
                    widths.len(),
                    self.columns
                )));
            }
            for (c, width) in widths.iter().enumerate() {
                if width.is_negative() {
                    return Err(Error::negative(
                        format!("{what} column {c} width"),
                        width.emus(),
                    ));
                }
            }
        }
        if let Some(frame) = &self.frame {
            frame.validate(what)?;
        }
        for (r, row) in self.rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                cell.validate(&format!("{what} cell ({r}, {c})"))?;
            }
        }
        Ok(())
    }
}
