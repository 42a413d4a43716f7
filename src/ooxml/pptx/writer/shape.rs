/// Rectangles and text boxes on a slide.
use std::fmt::Write as FmtWrite;

use crate::common::Result;
use crate::layout::{Paragraph, Shape, TextBox};
use crate::ooxml::drawings::{
    write_a_xfrm, write_fill, write_line, write_paragraph, write_prst_geom_rect,
};

/// Write a `p:sp` rectangle with its fill and outline.
pub(crate) fn write_shape(xml: &mut String, shape_id: u32, shape: &Shape) -> Result<()> {
    xml.push_str("<p:sp><p:nvSpPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="Rectangle {}"/>"#,
        shape_id,
        shape_id - 1
    )?;
    xml.push_str("<p:cNvSpPr/><p:nvPr/></p:nvSpPr>");

    xml.push_str("<p:spPr>");
    write_a_xfrm(xml, &shape.frame);
    write_prst_geom_rect(xml);
    write_fill(xml, shape.fill);
    write_line(xml, shape.line.as_ref());
    xml.push_str("</p:spPr>");

    xml.push_str("</p:sp>");
    Ok(())
}

/// Write a transparent `p:sp` text box.
pub(crate) fn write_text_box(xml: &mut String, shape_id: u32, text_box: &TextBox) -> Result<()> {
    xml.push_str("<p:sp><p:nvSpPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="TextBox {}"/>"#,
        shape_id,
        shape_id - 1
    )?;
    xml.push_str(r#"<p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>"#);

    xml.push_str("<p:spPr>");
    write_a_xfrm(xml, &text_box.frame);
    write_prst_geom_rect(xml);
    write_fill(xml, None);
    xml.push_str("</p:spPr>");

    xml.push_str("<p:txBody>");
    write!(
        xml,
        r#"<a:bodyPr wrap="{}" rtlCol="0"><a:noAutofit/></a:bodyPr>"#,
        if text_box.wrap { "square" } else { "none" }
    )?;
    xml.push_str("<a:lstStyle/>");
    if text_box.paragraphs.is_empty() {
        write_paragraph(xml, &Paragraph::new());
    }
    for paragraph in &text_box.paragraphs {
        write_paragraph(xml, paragraph);
    }
    xml.push_str("</p:txBody>");

    xml.push_str("</p:sp>");
    Ok(())
}
