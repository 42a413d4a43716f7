/// Open Packaging Convention (OPC) objects related to package parts.
///
/// Parts are the units of content in a package, each with a unique partname,
/// a content type and optional relationships to other parts.
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;

/// Trait representing a part in an OPC package.
pub trait Part {
    /// Get the partname of this part.
    fn partname(&self) -> &PackURI;

    /// Get the content type of this part.
    fn content_type(&self) -> &str;

    /// Get the binary content of this part.
    fn blob(&self) -> &[u8];

    /// Get the relationships for this part.
    fn rels(&self) -> &Relationships;

    /// Get mutable access to the relationships for this part.
    fn rels_mut(&mut self) -> &mut Relationships;

    /// Add or get a relationship to another part and return its rId.
    ///
    /// The target is stored relative to this part's base URI.
    fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        let target_ref = target.relative_ref(self.partname().base_uri());
        self.rels_mut().get_or_add(reltype, &target_ref)
    }
}

/// A part that stores its serialized content as bytes.
#[derive(Debug, Clone)]
pub struct BlobPart {
    partname: PackURI,
    content_type: String,
    blob: Vec<u8>,
    rels: Relationships,
}

impl BlobPart {
    /// Create a new BlobPart.
    ///
    /// # Arguments
    /// * `partname` - The partname (URI) of this part
    /// * `content_type` - The content type of this part
    /// * `blob` - The binary content of this part
    pub fn new(partname: PackURI, content_type: impl Into<String>, blob: Vec<u8>) -> Self {
        Self {
            partname,
            content_type: content_type.into(),
            blob,
            rels: Relationships::new(),
        }
    }

    /// Create a part from already serialized XML.
    pub fn xml(partname: PackURI, content_type: impl Into<String>, xml: String) -> Self {
        Self::new(partname, content_type, xml.into_bytes())
    }

    /// Replace the content, for parts whose XML refers to their own rIds.
    pub fn set_blob(&mut self, blob: Vec<u8>) {
        self.blob = blob;
    }
}

impl Part for BlobPart {
    fn partname(&self) -> &PackURI {
        &self.partname
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn blob(&self) -> &[u8] {
        &self.blob
    }

    fn rels(&self) -> &Relationships {
        &self.rels
    }

    fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::{content_type as CT, relationship_type as RT};

    #[test]
    fn test_relate_to_uses_relative_target() {
        let mut slide = BlobPart::xml(
            PackURI::new("/ppt/slides/slide1.xml").unwrap(),
            CT::PML_SLIDE,
            String::from("<p:sld/>"),
        );
        let layout = PackURI::new("/ppt/slideLayouts/slideLayout1.xml").unwrap();

        assert_eq!(slide.relate_to(&layout, RT::SLIDE_LAYOUT), "rId1");
        assert_eq!(slide.relate_to(&layout, RT::SLIDE_LAYOUT), "rId1");
        assert_eq!(
            slide.rels().get("rId1").unwrap().target_ref(),
            "../slideLayouts/slideLayout1.xml"
        );
        assert_eq!(slide.blob(), b"<p:sld/>");
        assert_eq!(slide.content_type(), CT::PML_SLIDE);
    }
}
