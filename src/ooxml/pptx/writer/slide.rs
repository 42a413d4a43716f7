/// Slide XML generation.
use crate::common::xml::XML_DECLARATION;
use crate::common::{Error, Result};
use crate::layout::{Element, Page};
use crate::ooxml::pptx::writer::shape::{write_shape, write_text_box};
use crate::ooxml::pptx::writer::table::write_table;

/// Shape id of the first element; id 1 is the slide's group shape.
const FIRST_SHAPE_ID: u32 = 2;

/// Generate the XML of one slide.
///
/// Elements are written into the shape tree in paint order, which is also
/// the order PowerPoint stacks them.
pub(crate) fn slide_xml(page: &Page, what: &str) -> Result<String> {
    let mut xml = String::with_capacity(1024 + page.len() * 768);

    xml.push_str(XML_DECLARATION);
    xml.push('\n');
    xml.push_str(r#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
    xml.push_str(r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#);
    xml.push_str(r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#);

    xml.push_str("<p:cSld><p:spTree>");
    xml.push_str("<p:nvGrpSpPr>");
    xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
    xml.push_str("<p:cNvGrpSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGrpSpPr>");
    xml.push_str("<p:grpSpPr>");
    xml.push_str("<a:xfrm>");
    xml.push_str(r#"<a:off x="0" y="0"/>"#);
    xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
    xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
    xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
    xml.push_str("</a:xfrm>");
    xml.push_str("</p:grpSpPr>");

    for (shape_id, (i, element)) in (FIRST_SHAPE_ID..).zip(page.elements().iter().enumerate()) {
        match element {
            Element::Shape(shape) => write_shape(&mut xml, shape_id, shape)?,
            Element::TextBox(text_box) => write_text_box(&mut xml, shape_id, text_box)?,
            Element::Table(table) => write_table(
                &mut xml,
                shape_id,
                table,
                &format!("{what} element {i} (table)"),
            )?,
            Element::Paragraph(_) => {
                return Err(Error::Unsupported(format!(
                    "{what} element {i} is a flowing paragraph; slides only hold positioned elements"
                )));
            },
        }
    }

    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sld>");
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use crate::layout::{Canvas, Paragraph, Rect, RunStyle, Shape, Table, TextBox};

    #[test]
    fn test_ids_follow_paint_order() {
        let mut page = Page::new(Canvas::widescreen());
        page.add_shape(Shape::rect(Rect::from_inches(0.0, 0.0, 1.0, 1.0)).fill(RGBColor::BLACK))
            .add_text_box(TextBox::new(Rect::from_inches(0.0, 0.0, 1.0, 1.0)))
            .add_table(Table::new(1, 1).with_frame(Rect::from_inches(0.0, 0.0, 1.0, 1.0)));

        let xml = slide_xml(&page, "page 0").unwrap();
        let rect = xml.find(r#"<p:cNvPr id="2" name="Rectangle 1"/>"#).unwrap();
        let text = xml.find(r#"<p:cNvPr id="3" name="TextBox 2"/>"#).unwrap();
        let table = xml.find(r#"<p:cNvPr id="4" name="Table 3"/>"#).unwrap();
        assert!(rect < text && text < table);
    }

    #[test]
    fn test_flowing_paragraph_is_rejected() {
        let mut page = Page::new(Canvas::widescreen());
        page.add_paragraph(Paragraph::with_run("flow", RunStyle::default()));
        let err = slide_xml(&page, "page 2").unwrap_err();
        assert!(matches!(err, Error::Unsupported(_)));
        assert!(err.to_string().contains("page 2 element 0"));
    }

    #[test]
    fn test_empty_slide() {
        let xml = slide_xml(&Page::new(Canvas::widescreen()), "page 0").unwrap();
        assert!(xml.contains("<p:spTree>"));
        assert!(xml.ends_with("</p:sld>"));
    }
}
