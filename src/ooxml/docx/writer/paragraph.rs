/// Paragraph writer for DOCX documents.
use crate::common::unit::pt_to_twips;
use crate::common::xml::push_int_attr;
use crate::layout::Paragraph;
use crate::ooxml::docx::writer::run::write_run;

/// Write one `w:p` with its spacing, indentation and alignment.
pub(crate) fn write_paragraph(xml: &mut String, paragraph: &Paragraph) {
    xml.push_str("<w:p><w:pPr>");

    if paragraph.space_before.is_some() || paragraph.space_after.is_some() {
        xml.push_str("<w:spacing");
        if let Some(pt) = paragraph.space_before {
            push_int_attr(xml, "w:before", pt_to_twips(pt));
        }
        if let Some(pt) = paragraph.space_after {
            push_int_attr(xml, "w:after", pt_to_twips(pt));
        }
        xml.push_str("/>");
    }

    if let Some(indent) = paragraph.indent_left {
        xml.push_str("<w:ind");
        push_int_attr(xml, "w:left", indent.twips());
        xml.push_str("/>");
    }

    xml.push_str(r#"<w:jc w:val=""#);
    xml.push_str(paragraph.alignment.wordprocessingml());
    xml.push_str(r#""/></w:pPr>"#);

    for run in &paragraph.runs {
        write_run(xml, run);
    }

    xml.push_str("</w:p>");
}
