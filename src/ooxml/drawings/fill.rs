//! Solid fills, outlines and table cell borders.

use crate::common::RGBColor;
use crate::common::xml::push_int_attr;
use crate::layout::{Border, BorderStyle, Line};

pub fn write_solid_fill(xml: &mut String, color: RGBColor) {
    xml.push_str(r#"<a:solidFill><a:srgbClr val=""#);
    xml.push_str(&color.to_hex());
    xml.push_str(r#""/></a:solidFill>"#);
}

/// `a:solidFill` for `Some`, `a:noFill` for `None`.
pub fn write_fill(xml: &mut String, fill: Option<RGBColor>) {
    match fill {
        Some(color) => write_solid_fill(xml, color),
        None => xml.push_str("<a:noFill/>"),
    }
}

/// Shape outline. Without a line the outline is explicitly turned off, so
/// theme defaults never draw one.
pub fn write_line(xml: &mut String, line: Option<&Line>) {
    match line {
        Some(line) => {
            xml.push_str("<a:ln");
            push_int_attr(xml, "w", line.width.emus());
            xml.push('>');
            write_solid_fill(xml, line.color);
            xml.push_str("</a:ln>");
        },
        None => xml.push_str("<a:ln><a:noFill/></a:ln>"),
    }
}

/// One side of a table cell: `a:lnL`, `a:lnR`, `a:lnT` or `a:lnB`.
pub fn write_cell_border(xml: &mut String, tag: &str, border: Option<&Border>) {
    xml.push('<');
    xml.push_str(tag);
    match border {
        Some(border) => {
            push_int_attr(xml, "w", border.width.emus());
            xml.push_str(r#" cap="flat""#);
            xml.push_str(match border.style {
                BorderStyle::Double => r#" cmpd="dbl""#,
                _ => r#" cmpd="sng""#,
            });
            xml.push_str(r#" algn="ctr">"#);
            write_solid_fill(xml, border.color);
            xml.push_str(r#"<a:prstDash val=""#);
            xml.push_str(border.style.drawingml_dash());
            xml.push_str(r#""/>"#);
        },
        None => xml.push_str("><a:noFill/>"),
    }
    xml.push_str("</");
    xml.push_str(tag);
    xml.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Length;

    #[test]
    fn test_fill_and_no_fill() {
        let mut xml = String::new();
        write_fill(&mut xml, Some(RGBColor::new(0x1A, 0x23, 0x5C)));
        write_fill(&mut xml, None);
        assert_eq!(
            xml,
            r#"<a:solidFill><a:srgbClr val="1A235C"/></a:solidFill><a:noFill/>"#
        );
    }

    #[test]
    fn test_line_width() {
        let mut xml = String::new();
        let line = Line {
            color: RGBColor::BLACK,
            width: Length::from_pt(2.0),
        };
        write_line(&mut xml, Some(&line));
        assert!(xml.starts_with(r#"<a:ln w="25400">"#), "{xml}");

        xml.clear();
        write_line(&mut xml, None);
        assert_eq!(xml, "<a:ln><a:noFill/></a:ln>");
    }

    #[test]
    fn test_cell_border() {
        let mut xml = String::new();
        write_cell_border(&mut xml, "a:lnT", Some(&Border::thin()));
        assert!(xml.starts_with(r#"<a:lnT w="6350" cap="flat" cmpd="sng" algn="ctr">"#), "{xml}");
        assert!(xml.ends_with(r#"<a:prstDash val="solid"/></a:lnT>"#));

        xml.clear();
        write_cell_border(&mut xml, "a:lnB", None);
        assert_eq!(xml, "<a:lnB><a:noFill/></a:lnB>");
    }
}
