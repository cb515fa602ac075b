use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;
/// Open Packaging Convention (OPC) objects related to package parts.
///
/// Parts are the units of content in an OPC package, each with a unique
/// partname, a content type and optional relationships to other parts.
use std::fmt;

/// Trait representing a part in an OPC package.
pub trait Part: fmt::Debug {
    /// Get the partname of this part.
    fn partname(&self) -> &PackURI;

    /// Get the content type of this part.
    fn content_type(&self) -> &str;

    /// Get the serialized content of this part.
    fn blob(&self) -> &[u8];

    /// Get the relationships for this part.
    fn rels(&self) -> &Relationships;

    /// Get mutable access to the relationships for this part.
    fn rels_mut(&mut self) -> &mut Relationships;

    /// Add or get a relationship to another part, returning its rId.
    ///
    /// `target_ref` is relative to this part's directory.
    fn relate_to(&mut self, target_ref: &str, reltype: &str) -> String {
        self.rels_mut().get_or_add(reltype, target_ref).r_id().to_string()
    }
}

/// A part holding serialized XML.
///
/// Every part a generated deck contains is XML, so this is the only
/// concrete part type.
#[derive(Debug)]
pub struct XmlPart {
    partname: PackURI,
    content_type: String,
    xml: String,
    rels: Relationships,
}

impl XmlPart {
    /// Create a part without relationships.
    pub fn new(partname: PackURI, content_type: &str, xml: String) -> Self {
        let rels = Relationships::new(partname.base_uri().to_string());
        Self::with_rels(partname, content_type, xml, rels)
    }

    /// Create a part whose relationships were built before its XML.
    ///
    /// Slides and the presentation part reference rIds in their markup, so the
    /// relationships are allocated first and handed over here.
    pub fn with_rels(
        partname: PackURI,
        content_type: &str,
        xml: String,
        rels: Relationships,
    ) -> Self {
        Self {
            partname,
            content_type: content_type.to_string(),
            xml,
            rels,
        }
    }

    /// The XML content as a string slice.
    #[inline]
    pub fn xml_str(&self) -> &str {
        &self.xml
    }
}

impl Part for XmlPart {
    fn partname(&self) -> &PackURI {
        &self.partname
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn blob(&self) -> &[u8] {
        self.xml.as_bytes()
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
    use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};

    #[test]
    fn test_xml_part_relate_to() {
        let partname = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        let mut part = XmlPart::new(partname, ct::PML_SLIDE, "<p:sld/>".to_string());

        let r_id = part.relate_to("../slideLayouts/slideLayout1.xml", rt::SLIDE_LAYOUT);
        assert_eq!(r_id, "rId1");
        assert_eq!(
            part.relate_to("../slideLayouts/slideLayout1.xml", rt::SLIDE_LAYOUT),
            "rId1"
        );
        assert_eq!(part.blob(), b"<p:sld/>");
        assert_eq!(part.rels().len(), 1);
    }

    #[test]
    fn test_rels_base_uri_follows_partname() {
        let partname = PackURI::new("/ppt/slides/slide2.xml").unwrap();
        let mut part = XmlPart::new(partname, ct::PML_SLIDE, String::new());
        part.relate_to("../notesSlides/notesSlide2.xml", rt::NOTES_SLIDE);

        let rel = part.rels().part_with_reltype(rt::NOTES_SLIDE).unwrap();
        assert_eq!(
            rel.target_partname().unwrap().as_str(),
            "/ppt/notesSlides/notesSlide2.xml"
        );
    }
}
