/// Presentation writer for PPTX.
use std::fmt::Write as FmtWrite;

use crate::common::xml::XML_DECLARATION;
use crate::common::{Error, Result};
use crate::layout::{Canvas, Document};
use crate::ooxml::metadata::add_property_parts;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{BlobPart, OpcPackage, PackURI, Part};
use crate::ooxml::pptx::template;
use crate::ooxml::pptx::writer::slide::slide_xml;
use crate::render::Backend;

/// Id of the slide master in `p:sldMasterIdLst`.
const SLIDE_MASTER_ID: u32 = 2_147_483_648;

/// Id of the first slide in `p:sldIdLst`.
const FIRST_SLIDE_ID: u32 = 256;

/// Builds `.pptx` packages; each page of the document becomes one slide.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresentationWriter;

impl PresentationWriter {
    pub fn new() -> Self {
        Self
    }

    /// The slide size shared by every page.
    fn slide_size(document: &Document) -> Result<Canvas> {
        let mut pages = document.pages().iter().enumerate();
        let Some((_, first)) = pages.next() else {
            return Err(Error::EmptyDocument);
        };
        let size = *first.canvas();
        for (i, page) in pages {
            let canvas = page.canvas();
            if canvas.width() != size.width() || canvas.height() != size.height() {
                return Err(Error::Unsupported(format!(
                    "page {i} is {}x{} EMU but the slide size is {}x{} EMU; all slides share one size",
                    canvas.width().emus(),
                    canvas.height().emus(),
                    size.width().emus(),
                    size.height().emus()
                )));
            }
        }
        Ok(size)
    }
}

impl Backend for PresentationWriter {
    fn build_package(&self, document: &Document) -> Result<OpcPackage> {
        let size = Self::slide_size(document)?;
        let mut package = OpcPackage::new();

        let presentation_uri = PackURI::new("/ppt/presentation.xml")?;
        let master_uri = PackURI::new("/ppt/slideMasters/slideMaster1.xml")?;
        let layout_uri = PackURI::new("/ppt/slideLayouts/slideLayout1.xml")?;
        let theme_uri = PackURI::new("/ppt/theme/theme1.xml")?;
        let pres_props_uri = PackURI::new("/ppt/presProps.xml")?;
        let view_props_uri = PackURI::new("/ppt/viewProps.xml")?;
        let table_styles_uri = PackURI::new("/ppt/tableStyles.xml")?;

        package.relate_to(&presentation_uri, rt::OFFICE_DOCUMENT);

        let mut presentation =
            BlobPart::new(presentation_uri, ct::PML_PRESENTATION_MAIN, Vec::new());
        let master_r_id = presentation.relate_to(&master_uri, rt::SLIDE_MASTER);

        let mut slides = Vec::with_capacity(document.pages().len());
        let mut slide_r_ids = Vec::with_capacity(document.pages().len());
        for (i, page) in document.pages().iter().enumerate() {
            log::debug!("writing slide {} ({} elements)", i + 1, page.len());
            let slide_uri = PackURI::new(format!("/ppt/slides/slide{}.xml", i + 1))?;
            slide_r_ids.push(presentation.relate_to(&slide_uri, rt::SLIDE));

            let mut slide =
                BlobPart::xml(slide_uri, ct::PML_SLIDE, slide_xml(page, &format!("page {i}"))?);
            slide.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
            slides.push(slide);
        }

        presentation.relate_to(&pres_props_uri, rt::PRES_PROPS);
        presentation.relate_to(&view_props_uri, rt::VIEW_PROPS);
        presentation.relate_to(&theme_uri, rt::THEME);
        presentation.relate_to(&table_styles_uri, rt::TABLE_STYLES);
        presentation.set_blob(presentation_xml(&master_r_id, &slide_r_ids, &size)?.into_bytes());
        package.add_part(Box::new(presentation))?;

        let mut master = BlobPart::xml(
            master_uri.clone(),
            ct::PML_SLIDE_MASTER,
            template::slide_master_xml().to_string(),
        );
        master.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
        master.relate_to(&theme_uri, rt::THEME);
        package.add_part(Box::new(master))?;

        let mut layout = BlobPart::xml(
            layout_uri,
            ct::PML_SLIDE_LAYOUT,
            template::slide_layout_blank_xml().to_string(),
        );
        layout.relate_to(&master_uri, rt::SLIDE_MASTER);
        package.add_part(Box::new(layout))?;

        package.add_part(Box::new(BlobPart::xml(
            theme_uri,
            ct::OFC_THEME,
            template::theme_xml().to_string(),
        )))?;

        for slide in slides {
            package.add_part(Box::new(slide))?;
        }

        package.add_part(Box::new(BlobPart::xml(
            pres_props_uri,
            ct::PML_PRES_PROPS,
            template::pres_props_xml().to_string(),
        )))?;
        package.add_part(Box::new(BlobPart::xml(
            view_props_uri,
            ct::PML_VIEW_PROPS,
            template::view_props_xml().to_string(),
        )))?;
        package.add_part(Box::new(BlobPart::xml(
            table_styles_uri,
            ct::PML_TABLE_STYLES,
            template::table_styles_xml().to_string(),
        )))?;

        add_property_parts(
            &mut package,
            document.properties(),
            Some(document.pages().len()),
        )?;
        Ok(package)
    }
}

/// Generate presentation.xml content with the actual relationship IDs.
fn presentation_xml(master_r_id: &str, slide_r_ids: &[String], size: &Canvas) -> Result<String> {
    let mut xml = String::with_capacity(1024 + slide_r_ids.len() * 48);

    xml.push_str(XML_DECLARATION);
    xml.push('\n');
    xml.push_str(r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" saveSubsetFonts="1">"#);

    xml.push_str("<p:sldMasterIdLst>");
    write!(
        xml,
        r#"<p:sldMasterId id="{}" r:id="{}"/>"#,
        SLIDE_MASTER_ID, master_r_id
    )?;
    xml.push_str("</p:sldMasterIdLst>");

    if !slide_r_ids.is_empty() {
        xml.push_str("<p:sldIdLst>");
        for (slide_id, r_id) in (FIRST_SLIDE_ID..).zip(slide_r_ids) {
            write!(xml, r#"<p:sldId id="{}" r:id="{}"/>"#, slide_id, r_id)?;
        }
        xml.push_str("</p:sldIdLst>");
    }

    write!(
        xml,
        r#"<p:sldSz cx="{}" cy="{}"/>"#,
        size.width().emus(),
        size.height().emus()
    )?;
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("</p:presentation>");

    Ok(xml)
}
