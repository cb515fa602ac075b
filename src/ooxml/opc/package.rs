/// In-memory OPC package.
///
/// OpcPackage owns the package-level relationships and every part, keyed by
/// partname so iteration (and therefore the written archive) is deterministic.
use crate::ooxml::opc::constants::relationship_type;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::rel::Relationships;
use std::collections::BTreeMap;

#[derive(Debug)]
pub struct OpcPackage {
    /// Package-level relationships (`/_rels/.rels`)
    rels: Relationships,

    /// All parts in the package, indexed by partname
    parts: BTreeMap<PackURI, Box<dyn Part>>,
}

impl OpcPackage {
    /// Create a new empty OPC package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI.to_string()),
            parts: BTreeMap::new(),
        }
    }

    /// Add a part, replacing any existing part with the same partname.
    pub fn add_part(&mut self, part: Box<dyn Part>) {
        let partname = part.partname().clone();
        if self.parts.insert(partname.clone(), part).is_some() {
            tracing::warn!(%partname, "replaced existing package part");
        }
    }

    /// Get the main document part (`ppt/presentation.xml` for a deck).
    pub fn main_document_part(&self) -> Result<&dyn Part> {
        let rel = self
            .rels
            .part_with_reltype(relationship_type::OFFICE_DOCUMENT)?;
        let partname = rel.target_partname()?;
        self.get_part(&partname)
    }

    /// Get a part by its partname.
    pub fn get_part(&self, partname: &PackURI) -> Result<&dyn Part> {
        self.parts
            .get(partname)
            .map(|b| &**b as &dyn Part)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    #[inline]
    pub fn contains_part(&self, partname: &PackURI) -> bool {
        self.parts.contains_key(partname)
    }

    /// Iterate over all parts in partname order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &dyn Part> {
        self.parts.values().map(|b| &**b as &dyn Part)
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

    #[inline]
    pub fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }

    /// Relate the package to a part. `target_ref` is relative to the package root.
    pub fn relate_to(&mut self, target_ref: &str, reltype: &str) -> String {
        self.rels.get_or_add(reltype, target_ref).r_id().to_string()
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::content_type as ct;
    use crate::ooxml::opc::part::XmlPart;

    fn xml_part(name: &str, content_type: &str) -> Box<dyn Part> {
        Box::new(XmlPart::new(
            PackURI::new(name).unwrap(),
            content_type,
            "<x/>".to_string(),
        ))
    }

    #[test]
    fn test_main_document_part() {
        let mut pkg = OpcPackage::new();
        pkg.add_part(xml_part("/ppt/presentation.xml", ct::PML_PRESENTATION_MAIN));
        pkg.relate_to("ppt/presentation.xml", relationship_type::OFFICE_DOCUMENT);

        let main = pkg.main_document_part().unwrap();
        assert_eq!(main.content_type(), ct::PML_PRESENTATION_MAIN);
    }

    #[test]
    fn test_parts_iterate_in_partname_order() {
        let mut pkg = OpcPackage::new();
        pkg.add_part(xml_part("/ppt/slides/slide2.xml", ct::PML_SLIDE));
        pkg.add_part(xml_part("/ppt/presentation.xml", ct::PML_PRESENTATION_MAIN));
        pkg.add_part(xml_part("/ppt/slides/slide1.xml", ct::PML_SLIDE));

        let names: Vec<_> = pkg.iter_parts().map(|p| p.partname().as_str()).collect();
        assert_eq!(
            names,
            vec![
                "/ppt/presentation.xml",
                "/ppt/slides/slide1.xml",
                "/ppt/slides/slide2.xml"
            ]
        );
        assert_eq!(pkg.part_count(), 3);
    }

    #[test]
    fn test_missing_part() {
        let pkg = OpcPackage::new();
        let uri = PackURI::new("/ppt/presentation.xml").unwrap();
        assert!(!pkg.contains_part(&uri));
        assert!(pkg.get_part(&uri).is_err());
        assert!(pkg.main_document_part().is_err());
    }
}
