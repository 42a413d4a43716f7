//! DrawingML text paragraphs (`a:p`), used in slide text boxes and slide
//! table cells.

use crate::common::unit::pt_to_centipoints;
use crate::common::xml::{escape_xml, push_int, push_int_attr};
use crate::layout::{Paragraph, RunStyle};
use crate::ooxml::drawings::fill::write_solid_fill;

/// Write one paragraph.
///
/// Every run carries its complete formatting. Line feeds inside a run become
/// `a:br` elements between `a:r` elements of the same paragraph.
pub fn write_paragraph(xml: &mut String, paragraph: &Paragraph) {
    xml.push_str("<a:p>");
    write_paragraph_properties(xml, paragraph);

    for run in &paragraph.runs {
        for (i, line) in run.lines().enumerate() {
            if i > 0 {
                xml.push_str("<a:br>");
                write_run_properties(xml, "a:rPr", &run.style);
                xml.push_str("</a:br>");
            }
            if line.is_empty() {
                continue;
            }
            xml.push_str("<a:r>");
            write_run_properties(xml, "a:rPr", &run.style);
            xml.push_str("<a:t>");
            xml.push_str(&escape_xml(line));
            xml.push_str("</a:t></a:r>");
        }
    }

    let end_style = paragraph
        .runs
        .last()
        .map(|run| run.style)
        .unwrap_or_default();
    write_run_properties(xml, "a:endParaRPr", &end_style);
    xml.push_str("</a:p>");
}

fn write_paragraph_properties(xml: &mut String, paragraph: &Paragraph) {
    xml.push_str(r#"<a:pPr algn=""#);
    xml.push_str(paragraph.alignment.drawingml());
    xml.push('"');
    if let Some(indent) = paragraph.indent_left {
        push_int_attr(xml, "marL", indent.emus());
    }

    if paragraph.space_before.is_none() && paragraph.space_after.is_none() {
        xml.push_str("/>");
        return;
    }
    xml.push('>');
    if let Some(pt) = paragraph.space_before {
        xml.push_str(r#"<a:spcBef><a:spcPts val=""#);
        push_int(xml, pt_to_centipoints(pt));
        xml.push_str(r#""/></a:spcBef>"#);
    }
    if let Some(pt) = paragraph.space_after {
        xml.push_str(r#"<a:spcAft><a:spcPts val=""#);
        push_int(xml, pt_to_centipoints(pt));
        xml.push_str(r#""/></a:spcAft>"#);
    }
    xml.push_str("</a:pPr>");
}

fn write_run_properties(xml: &mut String, tag: &str, style: &RunStyle) {
    xml.push('<');
    xml.push_str(tag);
    xml.push_str(r#" lang="en-US""#);
    push_int_attr(xml, "sz", pt_to_centipoints(style.font_size));
    push_int_attr(xml, "b", u8::from(style.is_bold()));
    push_int_attr(xml, "i", u8::from(style.is_italic()));
    xml.push_str(r#" dirty="0">"#);
    write_solid_fill(xml, style.color);
    xml.push_str("</");
    xml.push_str(tag);
    xml.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use crate::layout::Alignment;

    #[test]
    fn test_line_feed_becomes_break() {
        let mut xml = String::new();
        write_paragraph(
            &mut xml,
            &Paragraph::with_run("Line 1\nLine 2", RunStyle::new(24.0, RGBColor::WHITE).bold(true))
                .align(Alignment::Center),
        );

        assert!(xml.starts_with(r#"<a:p><a:pPr algn="ctr"/>"#), "{xml}");
        let first = xml.find("<a:t>Line 1</a:t>").unwrap();
        let br = xml.find("<a:br>").unwrap();
        let second = xml.find("<a:t>Line 2</a:t>").unwrap();
        assert!(first < br && br < second);
        assert!(xml.contains(r#"sz="2400" b="1" i="0""#));
        assert!(xml.contains(r#"<a:srgbClr val="FFFFFF"/>"#));
        assert_eq!(xml.matches("<a:p>").count(), 1);
    }

    #[test]
    fn test_spacing_in_hundredths_of_a_point() {
        let mut xml = String::new();
        write_paragraph(
            &mut xml,
            &Paragraph::with_run("x", RunStyle::default())
                .space_before(6.0)
                .space_after(2.5),
        );
        assert!(xml.contains(
            r#"<a:spcBef><a:spcPts val="600"/></a:spcBef><a:spcAft><a:spcPts val="250"/></a:spcAft>"#
        ));
    }

    #[test]
    fn test_runs_keep_their_own_style() {
        let mut xml = String::new();
        let paragraph = Paragraph::new()
            .run("Step 1: ", RunStyle::new(16.0, RGBColor::BLACK).bold(true))
            .run("Read <carefully> & plan", RunStyle::new(16.0, RGBColor::BLACK).italic(true));
        write_paragraph(&mut xml, &paragraph);

        assert!(xml.contains(r#"b="1" i="0" dirty="0"><a:solidFill><a:srgbClr val="000000"/></a:solidFill></a:rPr><a:t>Step 1: </a:t>"#));
        assert!(xml.contains("<a:t>Read &lt;carefully&gt; &amp; plan</a:t>"));
        assert!(xml.contains(r#"b="0" i="1""#));
    }

    #[test]
    fn test_empty_paragraph() {
        let mut xml = String::new();
        write_paragraph(&mut xml, &Paragraph::new());
        assert!(xml.contains("<a:endParaRPr"));
        assert!(!xml.contains("<a:r>"));
    }
}
