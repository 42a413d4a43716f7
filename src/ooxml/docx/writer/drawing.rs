/// Anchored rectangles and text boxes in a DOCX body.
///
/// Word has no free-standing shapes; each one is a `wp:anchor` drawing inside
/// a run, positioned from the page corner with text wrapping turned off. The
/// shape itself is a WordprocessingML shape (`wps:wsp`) whose text box holds
/// ordinary `w:p` paragraphs.
use std::fmt::Write as FmtWrite;

use crate::common::{Length, Result};
use crate::layout::{Paragraph, Rect, Shape, TextBox};
use crate::ooxml::docx::writer::paragraph::write_paragraph;
use crate::ooxml::drawings::{write_fill, write_line, write_prst_geom_rect, write_xfrm};
use crate::ooxml::opc::constants::namespace;

/// An element drawn at absolute page coordinates.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Floating<'a> {
    Shape(&'a Shape),
    TextBox(&'a TextBox),
}

impl Floating<'_> {
    fn frame(&self) -> &Rect {
        match self {
            Floating::Shape(shape) => &shape.frame,
            Floating::TextBox(text_box) => &text_box.frame,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Floating::Shape(_) => "Rectangle",
            Floating::TextBox(_) => "TextBox",
        }
    }
}

/// Hands out `wp:docPr` ids, unique across the whole document.
///
/// The id doubles as the anchor's `relativeHeight`, so drawings written later
/// stack above earlier ones.
#[derive(Debug)]
pub(crate) struct DrawingIds {
    next: u32,
}

impl DrawingIds {
    pub(crate) fn new() -> Self {
        Self { next: 1 }
    }

    fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Write one `w:r` holding an anchored drawing.
pub(crate) fn write_drawing(
    xml: &mut String,
    ids: &mut DrawingIds,
    floating: Floating<'_>,
) -> Result<()> {
    let id = ids.next_id();
    let frame = floating.frame();

    xml.push_str("<w:r><w:drawing>");
    write!(
        xml,
        r#"<wp:anchor distT="0" distB="0" distL="0" distR="0" simplePos="0" relativeHeight="{}" behindDoc="0" locked="0" layoutInCell="1" allowOverlap="1">"#,
        id
    )?;
    xml.push_str(r#"<wp:simplePos x="0" y="0"/>"#);
    write!(
        xml,
        r#"<wp:positionH relativeFrom="page"><wp:posOffset>{}</wp:posOffset></wp:positionH>"#,
        frame.x.emus()
    )?;
    write!(
        xml,
        r#"<wp:positionV relativeFrom="page"><wp:posOffset>{}</wp:posOffset></wp:positionV>"#,
        frame.y.emus()
    )?;
    write!(
        xml,
        r#"<wp:extent cx="{}" cy="{}"/>"#,
        frame.width.emus(),
        frame.height.emus()
    )?;
    xml.push_str(r#"<wp:effectExtent l="0" t="0" r="0" b="0"/>"#);
    xml.push_str("<wp:wrapNone/>");
    write!(
        xml,
        r#"<wp:docPr id="{}" name="{} {}"/>"#,
        id,
        floating.name(),
        id
    )?;
    xml.push_str("<wp:cNvGraphicFramePr/>");

    write!(
        xml,
        r#"<a:graphic xmlns:a="{}"><a:graphicData uri="{}">"#,
        namespace::DML_MAIN,
        namespace::WPS
    )?;
    xml.push_str("<wps:wsp>");
    write_shape_body(xml, floating)?;
    xml.push_str("</wps:wsp>");
    xml.push_str("</a:graphicData></a:graphic>");

    xml.push_str("</wp:anchor></w:drawing></w:r>");
    Ok(())
}

fn write_shape_body(xml: &mut String, floating: Floating<'_>) -> Result<()> {
    // The anchor places the shape; its own transform sits at the origin.
    let frame = floating.frame();
    let local = Rect::new(Length::ZERO, Length::ZERO, frame.width, frame.height);

    match floating {
        Floating::Shape(shape) => {
            xml.push_str("<wps:cNvSpPr/>");
            xml.push_str("<wps:spPr>");
            write_xfrm(xml, "a:xfrm", &local);
            write_prst_geom_rect(xml);
            write_fill(xml, shape.fill);
            write_line(xml, shape.line.as_ref());
            xml.push_str("</wps:spPr>");
            xml.push_str(r#"<wps:bodyPr rot="0" vert="horz" wrap="square" anchor="t"><a:noAutofit/></wps:bodyPr>"#);
        },
        Floating::TextBox(text_box) => {
            xml.push_str(r#"<wps:cNvSpPr txBox="1"/>"#);
            xml.push_str("<wps:spPr>");
            write_xfrm(xml, "a:xfrm", &local);
            write_prst_geom_rect(xml);
            write_fill(xml, None);
            write_line(xml, None);
            xml.push_str("</wps:spPr>");

            xml.push_str("<wps:txbx><w:txbxContent>");
            if text_box.paragraphs.is_empty() {
                write_paragraph(xml, &Paragraph::new());
            }
            for paragraph in &text_box.paragraphs {
                write_paragraph(xml, paragraph);
            }
            xml.push_str("</w:txbxContent></wps:txbx>");

            write!(
                xml,
                r#"<wps:bodyPr rot="0" vert="horz" wrap="{}" anchor="t"><a:noAutofit/></wps:bodyPr>"#,
                if text_box.wrap { "square" } else { "none" }
            )?;
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use crate::layout::{Alignment, RunStyle};

    #[test]
    fn test_anchor_positions_from_page_corner() {
        let shape = Shape::rect(Rect::from_inches(0.75, 0.5, 7.0, 0.1))
            .fill(RGBColor::new(0x00, 0x97, 0x9C));
        let mut ids = DrawingIds::new();
        let mut xml = String::new();
        write_drawing(&mut xml, &mut ids, Floating::Shape(&shape)).unwrap();

        let pos_h = xml
            .find(r#"<wp:positionH relativeFrom="page"><wp:posOffset>685800</wp:posOffset>"#)
            .unwrap();
        let pos_v = xml
            .find(r#"<wp:positionV relativeFrom="page"><wp:posOffset>457200</wp:posOffset>"#)
            .unwrap();
        let extent = xml.find(r#"<wp:extent cx="6400800" cy="91440"/>"#).unwrap();
        let wrap = xml.find("<wp:wrapNone/>").unwrap();
        let doc_pr = xml.find(r#"<wp:docPr id="1" name="Rectangle 1"/>"#).unwrap();
        assert!(pos_h < pos_v && pos_v < extent && extent < wrap && wrap < doc_pr);

        assert!(xml.contains(r#"<a:off x="0" y="0"/><a:ext cx="6400800" cy="91440"/>"#));
        assert!(xml.contains(r#"<a:srgbClr val="00979C"/>"#));
        assert!(xml.starts_with("<w:r><w:drawing>") && xml.ends_with("</w:drawing></w:r>"));
    }

    #[test]
    fn test_ids_are_unique_and_stack_in_order() {
        let shape = Shape::rect(Rect::from_inches(0.0, 0.0, 1.0, 1.0));
        let text_box = TextBox::new(Rect::from_inches(0.0, 0.0, 1.0, 1.0));
        let mut ids = DrawingIds::new();
        let mut xml = String::new();
        write_drawing(&mut xml, &mut ids, Floating::Shape(&shape)).unwrap();
        write_drawing(&mut xml, &mut ids, Floating::TextBox(&text_box)).unwrap();

        assert!(xml.contains(r#"relativeHeight="1""#));
        assert!(xml.contains(r#"relativeHeight="2""#));
        assert!(xml.contains(r#"<wp:docPr id="2" name="TextBox 2"/>"#));
    }

    #[test]
    fn test_text_box_holds_paragraphs() {
        let text_box = TextBox::with_text(
            Rect::from_inches(1.0, 1.0, 3.0, 0.5),
            "Name:\nDate:",
            RunStyle::new(11.0, RGBColor::BLACK),
            Alignment::Right,
        )
        .wrap(false);
        let mut ids = DrawingIds::new();
        let mut xml = String::new();
        write_drawing(&mut xml, &mut ids, Floating::TextBox(&text_box)).unwrap();

        assert!(xml.contains(r#"<wps:cNvSpPr txBox="1"/>"#));
        assert!(xml.contains(r#"<w:txbxContent><w:p><w:pPr><w:jc w:val="right"/></w:pPr>"#));
        assert!(xml.contains(r#"Name:</w:t><w:br/><w:t xml:space="preserve">Date:"#));
        assert!(xml.contains(r#"<a:noFill/><a:ln><a:noFill/></a:ln>"#));
        assert!(xml.contains(r#"wrap="none""#));
    }

    #[test]
    fn test_negative_offset_is_kept() {
        let shape = Shape::rect(Rect::new(
            Length::from_emus(-100),
            Length::from_emus(-200),
            Length::from_emus(10),
            Length::from_emus(10),
        ));
        let mut xml = String::new();
        write_drawing(&mut xml, &mut DrawingIds::new(), Floating::Shape(&shape)).unwrap();
        assert!(xml.contains("<wp:posOffset>-100</wp:posOffset>"));
        assert!(xml.contains("<wp:posOffset>-200</wp:posOffset>"));
    }
}
