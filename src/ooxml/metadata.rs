/// Document property parts shared by both formats.
///
/// `docProps/core.xml` carries the Dublin Core title, subject and creator.
/// No timestamps are written, so repeated renders of the same document stay
/// byte-identical. `docProps/app.xml` names the producing application.
use crate::common::Result;
use crate::common::xml::{XML_DECLARATION, escape_xml, push_int};
use crate::layout::DocumentProperties;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{BlobPart, OpcPackage, PackURI};

const APPLICATION: &str = "lessonkit";

/// Add both property parts to `package` and relate them from the package root.
///
/// `slide_count` is written to app.xml for presentations.
pub(crate) fn add_property_parts(
    package: &mut OpcPackage,
    properties: &DocumentProperties,
    slide_count: Option<usize>,
) -> Result<()> {
    let core_uri = PackURI::new("/docProps/core.xml")?;
    package.relate_to(&core_uri, rt::CORE_PROPERTIES);
    package.add_part(Box::new(BlobPart::xml(
        core_uri,
        ct::OPC_CORE_PROPERTIES,
        core_xml(properties),
    )))?;

    let app_uri = PackURI::new("/docProps/app.xml")?;
    package.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);
    package.add_part(Box::new(BlobPart::xml(
        app_uri,
        ct::OFC_EXTENDED_PROPERTIES,
        app_xml(slide_count),
    )))?;
    Ok(())
}

fn core_xml(properties: &DocumentProperties) -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_DECLARATION);
    xml.push('\n');
    xml.push_str(concat!(
        r#"<cp:coreProperties"#,
        r#" xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties""#,
        r#" xmlns:dc="http://purl.org/dc/elements/1.1/""#,
        r#" xmlns:dcterms="http://purl.org/dc/terms/""#,
        r#" xmlns:dcmitype="http://purl.org/dc/dcmitype/""#,
        r#" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#
    ));

    let fields = [
        ("dc:title", &properties.title),
        ("dc:subject", &properties.subject),
        ("dc:creator", &properties.author),
    ];
    for (tag, value) in fields {
        if let Some(value) = value {
            xml.push('<');
            xml.push_str(tag);
            xml.push('>');
            xml.push_str(&escape_xml(value));
            xml.push_str("</");
            xml.push_str(tag);
            xml.push('>');
        }
    }

    xml.push_str("</cp:coreProperties>");
    xml
}

fn app_xml(slide_count: Option<usize>) -> String {
    let mut xml = String::with_capacity(384);
    xml.push_str(XML_DECLARATION);
    xml.push('\n');
    xml.push_str(concat!(
        r#"<Properties"#,
        r#" xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties""#,
        r#" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#
    ));
    xml.push_str("<Application>");
    xml.push_str(APPLICATION);
    xml.push_str("</Application>");
    if let Some(count) = slide_count {
        xml.push_str("<Slides>");
        push_int(&mut xml, count);
        xml.push_str("</Slides>");
    }
    xml.push_str("</Properties>");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_xml_escapes_and_skips_missing() {
        let properties = DocumentProperties {
            title: Some("Ex 1K & more".into()),
            subject: None,
            author: Some("Maths <Dept>".into()),
        };
        let xml = core_xml(&properties);
        assert!(xml.contains("<dc:title>Ex 1K &amp; more</dc:title>"));
        assert!(xml.contains("<dc:creator>Maths &lt;Dept&gt;</dc:creator>"));
        assert!(!xml.contains("dc:subject"));
        assert!(!xml.contains("dcterms:created"));
    }

    #[test]
    fn test_app_xml_slide_count() {
        assert!(app_xml(Some(14)).contains("<Slides>14</Slides>"));
        assert!(!app_xml(None).contains("<Slides>"));
    }

    #[test]
    fn test_parts_are_related_from_package() {
        let mut package = OpcPackage::new();
        add_property_parts(&mut package, &DocumentProperties::titled("T"), None).unwrap();
        assert_eq!(package.part_count(), 2);
        let targets: Vec<_> = package.rels().iter().map(|r| r.target_ref()).collect();
        assert_eq!(targets, ["docProps/core.xml", "docProps/app.xml"]);
    }
}
