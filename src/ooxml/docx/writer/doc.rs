/// Document writer for DOCX.
///
/// Each page becomes one section. Flowing paragraphs and tables are written
/// in body order; runs of consecutive shapes and text boxes share one anchor
/// paragraph, so they land on the page where the surrounding content flows.
use std::fmt::Write as FmtWrite;

use crate::common::xml::XML_DECLARATION;
use crate::common::{Error, Result};
use crate::layout::{Document, Element, Page};
use crate::ooxml::docx::template;
use crate::ooxml::docx::writer::drawing::{DrawingIds, Floating, write_drawing};
use crate::ooxml::docx::writer::paragraph::write_paragraph;
use crate::ooxml::docx::writer::section::SectionProperties;
use crate::ooxml::docx::writer::table::write_table;
use crate::ooxml::metadata::add_property_parts;
use crate::ooxml::opc::constants::{content_type as ct, namespace, relationship_type as rt};
use crate::ooxml::opc::{BlobPart, OpcPackage, PackURI, Part};
use crate::render::Backend;

/// Builds `.docx` packages.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentWriter;

impl DocumentWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Backend for DocumentWriter {
    fn build_package(&self, document: &Document) -> Result<OpcPackage> {
        if document.pages().is_empty() {
            return Err(Error::EmptyDocument);
        }

        let mut package = OpcPackage::new();
        let document_uri = PackURI::new("/word/document.xml")?;
        let styles_uri = PackURI::new("/word/styles.xml")?;
        let settings_uri = PackURI::new("/word/settings.xml")?;

        package.relate_to(&document_uri, rt::OFFICE_DOCUMENT);

        let mut main = BlobPart::xml(
            document_uri,
            ct::WML_DOCUMENT_MAIN,
            document_xml(document)?,
        );
        main.relate_to(&styles_uri, rt::STYLES);
        main.relate_to(&settings_uri, rt::SETTINGS);
        package.add_part(Box::new(main))?;

        package.add_part(Box::new(BlobPart::xml(
            styles_uri,
            ct::WML_STYLES,
            template::styles_xml().to_string(),
        )))?;
        package.add_part(Box::new(BlobPart::xml(
            settings_uri,
            ct::WML_SETTINGS,
            template::settings_xml().to_string(),
        )))?;

        add_property_parts(&mut package, document.properties(), None)?;
        Ok(package)
    }
}

/// Generate document.xml.
fn document_xml(document: &Document) -> Result<String> {
    let pages = document.pages();
    let mut xml = String::with_capacity(4096 + pages.iter().map(Page::len).sum::<usize>() * 512);

    xml.push_str(XML_DECLARATION);
    xml.push('\n');
    write!(
        xml,
        r#"<w:document xmlns:w="{}" xmlns:r="{}" xmlns:wp="{}" xmlns:a="{}" xmlns:wps="{}">"#,
        namespace::WML_MAIN,
        namespace::OFC_RELATIONSHIPS,
        namespace::DML_WORDPROCESSING_DRAWING,
        namespace::DML_MAIN,
        namespace::WPS
    )?;
    xml.push_str("<w:body>");

    let mut ids = DrawingIds::new();
    let last = pages.len().saturating_sub(1);
    for (i, page) in pages.iter().enumerate() {
        log::debug!("writing section {} ({} elements)", i + 1, page.len());
        let ends_with_paragraph = write_page_body(&mut xml, page, &mut ids)?;
        let section = SectionProperties::from(page.canvas());

        if i < last {
            // A section ends with the paragraph that carries its properties.
            xml.push_str("<w:p><w:pPr>");
            section.write(&mut xml)?;
            xml.push_str("</w:pPr></w:p>");
        } else {
            if !ends_with_paragraph {
                xml.push_str("<w:p/>");
            }
            section.write(&mut xml)?;
        }
    }

    xml.push_str("</w:body></w:document>");
    Ok(xml)
}

/// Write the content of one page. Returns whether the last block written is
/// a paragraph.
fn write_page_body(xml: &mut String, page: &Page, ids: &mut DrawingIds) -> Result<bool> {
    let content_width = page.canvas().content_width();
    let mut anchor_open = false;
    let mut ends_with_paragraph = false;

    for element in page.elements() {
        match element {
            Element::Shape(shape) => {
                if !anchor_open {
                    xml.push_str("<w:p>");
                    anchor_open = true;
                }
                write_drawing(xml, ids, Floating::Shape(shape))?;
            },
            Element::TextBox(text_box) => {
                if !anchor_open {
                    xml.push_str("<w:p>");
                    anchor_open = true;
                }
                write_drawing(xml, ids, Floating::TextBox(text_box))?;
            },
            Element::Table(table) => {
                if anchor_open {
                    xml.push_str("</w:p>");
                    anchor_open = false;
                }
                write_table(xml, table, content_width)?;
                ends_with_paragraph = false;
            },
            Element::Paragraph(paragraph) => {
                if anchor_open {
                    xml.push_str("</w:p>");
                    anchor_open = false;
                }
                write_paragraph(xml, paragraph);
                ends_with_paragraph = true;
            },
        }
    }

    if anchor_open {
        xml.push_str("</w:p>");
        ends_with_paragraph = true;
    }
    Ok(ends_with_paragraph)
}
