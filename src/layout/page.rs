//! Pages and their paint-ordered elements.

use crate::common::Result;
use crate::layout::geometry::Canvas;
use crate::layout::shape::Shape;
use crate::layout::table::Table;
use crate::layout::text::{Paragraph, TextBox};

/// Anything that can be placed on a page.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Rectangle at absolute coordinates
    Shape(Shape),
    /// Text at absolute coordinates
    TextBox(TextBox),
    /// Table, absolute when framed, flowing otherwise
    Table(Table),
    /// Paragraph in document flow (word-processing pages only)
    Paragraph(Paragraph),
}

impl Element {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Element::Shape(_) => "shape",
            Element::TextBox(_) => "text box",
            Element::Table(_) => "table",
            Element::Paragraph(_) => "paragraph",
        }
    }

    fn validate(&self, what: &str) -> Result<()> {
        match self {
            Element::Shape(shape) => shape.validate(what),
            Element::TextBox(text_box) => text_box.validate(what),
            Element::Table(table) => table.validate(what),
            Element::Paragraph(paragraph) => paragraph.validate(what),
        }
    }
}

impl From<Shape> for Element {
    fn from(shape: Shape) -> Self {
        Element::Shape(shape)
    }
}

impl From<TextBox> for Element {
    fn from(text_box: TextBox) -> Self {
        Element::TextBox(text_box)
    }
}

impl From<Table> for Element {
    fn from(table: Table) -> Self {
        Element::Table(table)
    }
}

impl From<Paragraph> for Element {
    fn from(paragraph: Paragraph) -> Self {
        Element::Paragraph(paragraph)
    }
}

/// One canvas and the elements painted onto it, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    canvas: Canvas,
    elements: Vec<Element>,
}

impl Page {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            elements: Vec::new(),
        }
    }

    #[inline]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Elements in paint order.
    #[inline]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Append an element; it paints over everything added before it.
    pub fn push(&mut self, element: impl Into<Element>) -> &mut Self {
        self.elements.push(element.into());
        self
    }

    pub fn add_shape(&mut self, shape: Shape) -> &mut Self {
        self.push(shape)
    }

    pub fn add_text_box(&mut self, text_box: TextBox) -> &mut Self {
        self.push(text_box)
    }

    pub fn add_table(&mut self, table: Table) -> &mut Self {
        self.push(table)
    }

    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> &mut Self {
        self.push(paragraph)
    }

    pub(crate) fn validate(&self, what: &str) -> Result<()> {
        for (i, element) in self.elements.iter().enumerate() {
            element.validate(&format!("{what} element {i} ({})", element.kind()))?;
        }
        Ok(())
    }
}
