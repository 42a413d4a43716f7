use crate::common::xml::push_int_attr;
use crate::layout::Rect;

/// `<a:xfrm>` with the offset and extent of `frame`, in EMUs.
pub fn write_a_xfrm(xml: &mut String, frame: &Rect) {
    write_xfrm(xml, "a:xfrm", frame);
}

/// Transform element named `tag` (`a:xfrm`, or `p:xfrm` on graphic frames).
pub fn write_xfrm(xml: &mut String, tag: &str, frame: &Rect) {
    xml.push('<');
    xml.push_str(tag);
    xml.push_str("><a:off");
    push_int_attr(xml, "x", frame.x.emus());
    push_int_attr(xml, "y", frame.y.emus());
    xml.push_str("/><a:ext");
    push_int_attr(xml, "cx", frame.width.emus());
    push_int_attr(xml, "cy", frame.height.emus());
    xml.push_str("/></");
    xml.push_str(tag);
    xml.push('>');
}

pub fn write_prst_geom_rect(xml: &mut String) {
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
}
