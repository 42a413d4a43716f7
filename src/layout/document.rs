//! The top-level document: ordered pages plus package properties.

use std::path::Path;

use crate::common::{Error, Result};
use crate::layout::geometry::Canvas;
use crate::layout::page::Page;
use crate::render::{self, Format};

/// Descriptive metadata written to `docProps/core.xml`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentProperties {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub author: Option<String>,
}

impl DocumentProperties {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

/// Ordered pages serialized together into one output file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    properties: DocumentProperties,
    pages: Vec<Page>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_properties(properties: DocumentProperties) -> Self {
        Self {
            properties,
            pages: Vec::new(),
        }
    }

    #[inline]
    pub fn properties(&self) -> &DocumentProperties {
        &self.properties
    }

    #[inline]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Start a new page on `canvas` and return it for filling.
    pub fn add_page(&mut self, canvas: Canvas) -> &mut Page {
        self.pages.push(Page::new(canvas));
        let index = self.pages.len() - 1;
        &mut self.pages[index]
    }

    /// Check every page, element, run and cell.
    ///
    /// Rendering calls this before producing any output.
    pub fn validate(&self) -> Result<()> {
        if self.pages.is_empty() {
            return Err(Error::EmptyDocument);
        }
        for (i, page) in self.pages.iter().enumerate() {
            page.validate(&format!("page {i}"))?;
        }
        Ok(())
    }

    /// Serialize to the bytes of a package in `format`.
    pub fn render(&self, format: Format) -> Result<Vec<u8>> {
        render::render(self, format)
    }

    /// Serialize and write to `path`, choosing the format from its extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        render::save(self, path)
    }
}
