/// Run writer for DOCX documents.
use crate::common::unit::pt_to_half_points;
use crate::common::xml::{escape_xml, push_int};
use crate::layout::{Run, RunStyle};

/// Write one `w:r`.
///
/// Line feeds in the text become `w:br` elements inside the same run.
pub(crate) fn write_run(xml: &mut String, run: &Run) {
    xml.push_str("<w:r>");
    write_run_properties(xml, &run.style);

    for (i, line) in run.lines().enumerate() {
        if i > 0 {
            xml.push_str("<w:br/>");
        }
        if !line.is_empty() {
            xml.push_str(r#"<w:t xml:space="preserve">"#);
            xml.push_str(&escape_xml(line));
            xml.push_str("</w:t>");
        }
    }

    xml.push_str("</w:r>");
}

/// `w:rPr` with every attribute written, in schema order.
fn write_run_properties(xml: &mut String, style: &RunStyle) {
    xml.push_str("<w:rPr>");
    xml.push_str(if style.is_bold() {
        "<w:b/>"
    } else {
        r#"<w:b w:val="0"/>"#
    });
    xml.push_str(if style.is_italic() {
        "<w:i/>"
    } else {
        r#"<w:i w:val="0"/>"#
    });

    xml.push_str(r#"<w:color w:val=""#);
    xml.push_str(&style.color.to_hex());
    xml.push_str(r#""/>"#);

    let half_points = pt_to_half_points(style.font_size);
    xml.push_str(r#"<w:sz w:val=""#);
    push_int(xml, half_points);
    xml.push_str(r#""/><w:szCs w:val=""#);
    push_int(xml, half_points);
    xml.push_str(r#""/>"#);

    xml.push_str("</w:rPr>");
}
