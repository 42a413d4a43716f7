/// The in-memory OPC package assembled by the format writers.
///
/// Parts keep the order in which they were added; the package writer emits
/// them in that order.
use crate::common::{Error, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::rel::Relationships;

/// Main container for the parts of a package being written.
#[derive(Default)]
pub struct OpcPackage {
    /// Package-level relationships
    rels: Relationships,

    /// All parts in insertion order
    parts: Vec<Box<dyn Part>>,
}

impl OpcPackage {
    /// Create a new empty OPC package.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part to the package.
    ///
    /// Returns an error if a part with the same partname already exists.
    pub fn add_part(&mut self, part: Box<dyn Part>) -> Result<()> {
        if self.contains_part(part.partname()) {
            return Err(Error::InvalidPackUri(format!(
                "duplicate part '{}'",
                part.partname()
            )));
        }
        self.parts.push(part);
        Ok(())
    }

    /// Get a part by its partname.
    pub fn get_part(&self, partname: &PackURI) -> Option<&dyn Part> {
        self.parts
            .iter()
            .find(|part| part.partname() == partname)
            .map(|part| part.as_ref())
    }

    /// Check if a part with the given partname exists.
    pub fn contains_part(&self, partname: &PackURI) -> bool {
        self.get_part(partname).is_some()
    }

    /// Get an iterator over all parts in insertion order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &dyn Part> {
        self.parts.iter().map(|part| part.as_ref())
    }

    #[inline]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Get the package-level relationships.
    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate the package itself to a part and return the rId.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        let target_ref = target.relative_ref(PACKAGE_URI);
        self.rels.get_or_add(reltype, &target_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::{content_type as CT, relationship_type as RT};
    use crate::ooxml::opc::part::BlobPart;

    fn part(name: &str) -> Box<dyn Part> {
        Box::new(BlobPart::xml(
            PackURI::new(name).unwrap(),
            CT::XML,
            String::from("<x/>"),
        ))
    }

    #[test]
    fn test_parts_keep_insertion_order() {
        let mut package = OpcPackage::new();
        package.add_part(part("/b.xml")).unwrap();
        package.add_part(part("/a.xml")).unwrap();

        let names: Vec<_> = package.iter_parts().map(|p| p.partname().as_str()).collect();
        assert_eq!(names, ["/b.xml", "/a.xml"]);
        assert_eq!(package.part_count(), 2);
    }

    #[test]
    fn test_duplicate_part_is_rejected() {
        let mut package = OpcPackage::new();
        package.add_part(part("/a.xml")).unwrap();
        assert!(matches!(
            package.add_part(part("/a.xml")),
            Err(Error::InvalidPackUri(_))
        ));
    }

    #[test]
    fn test_package_relationship_targets_membername() {
        let mut package = OpcPackage::new();
        let document = PackURI::new("/word/document.xml").unwrap();
        assert_eq!(package.relate_to(&document, RT::OFFICE_DOCUMENT), "rId1");
        assert_eq!(
            package.rels().get("rId1").unwrap().target_ref(),
            "word/document.xml"
        );
    }
}
