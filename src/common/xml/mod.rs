//! XML text helpers shared by the package writers.

mod escape;

pub use escape::escape_xml;

/// Declaration written at the top of every XML part.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Append an integer without going through `fmt`.
#[inline]
pub fn push_int<I: itoa::Integer>(xml: &mut String, value: I) {
    let mut buf = itoa::Buffer::new();
    xml.push_str(buf.format(value));
}

/// Append ` name="value"` for an integer attribute.
#[inline]
pub fn push_int_attr<I: itoa::Integer>(xml: &mut String, name: &str, value: I) {
    xml.push(' ');
    xml.push_str(name);
    xml.push_str("=\"");
    push_int(xml, value);
    xml.push('"');
}
