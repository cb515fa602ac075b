use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
/// Relationship-related objects for OPC packages.
///
/// This module provides types for managing relationships between parts in an OPC package.
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::BTreeMap;
use std::fmt::Write as FmtWrite;

/// A single relationship from a source part to a target.
///
/// Identified by an rId that is unique within the source's `.rels` part.
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference, relative to the source part's directory
    target_ref: String,

    /// Base URI for resolving relative references
    base_uri: String,
}

impl Relationship {
    pub fn new(r_id: String, reltype: String, target_ref: String, base_uri: String) -> Self {
        Self {
            r_id,
            reltype,
            target_ref,
            base_uri,
        }
    }

    /// Get the relationship ID.
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    /// Get the relationship type.
    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Get the target reference as written in the `.rels` part.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }

    /// Get the absolute target partname.
    pub fn target_partname(&self) -> Result<PackURI> {
        PackURI::from_rel_ref(&self.base_uri, &self.target_ref).map_err(OpcError::InvalidPackUri)
    }
}

/// Collection of relationships from a single source.
///
/// Ordered by rId so serialization is stable.
#[derive(Debug, Clone)]
pub struct Relationships {
    /// Base URI for resolving relative references
    base_uri: String,

    /// Map of relationship ID to Relationship
    rels: BTreeMap<String, Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    ///
    /// # Arguments
    /// * `base_uri` - Directory of the source part, used to resolve targets
    pub fn new(base_uri: String) -> Self {
        Self {
            base_uri,
            rels: BTreeMap::new(),
        }
    }

    /// Parse the content of a `.rels` part.
    ///
    /// External relationships are skipped; a generated deck never contains them.
    pub fn from_xml(base_uri: &str, xml: &[u8]) -> Result<Self> {
        let mut rels = Self::new(base_uri.to_string());
        let mut reader = Reader::from_reader(xml);

        loop {
            match reader.read_event()? {
                Event::Start(ref e) | Event::Empty(ref e)
                    if e.local_name().as_ref() == b"Relationship" =>
                {
                    let mut r_id = None;
                    let mut reltype = None;
                    let mut target = None;
                    let mut external = false;

                    for attr in e.attributes() {
                        let attr = attr?;
                        let value = std::str::from_utf8(&attr.value)?.to_string();
                        match attr.key.as_ref() {
                            b"Id" => r_id = Some(value),
                            b"Type" => reltype = Some(value),
                            b"Target" => target = Some(value),
                            b"TargetMode" => external = value == "External",
                            _ => {},
                        }
                    }

                    if external {
                        continue;
                    }

                    match (r_id, reltype, target) {
                        (Some(r_id), Some(reltype), Some(target)) => {
                            rels.add_relationship(reltype, target, r_id);
                        },
                        _ => {
                            return Err(OpcError::InvalidRelationship(format!(
                                "incomplete Relationship element in {}",
                                base_uri
                            )));
                        },
                    }
                },
                Event::Eof => break,
                _ => {},
            }
        }

        Ok(rels)
    }

    /// Add a relationship to the collection, replacing any with the same rId.
    pub fn add_relationship(
        &mut self,
        reltype: String,
        target_ref: String,
        r_id: String,
    ) -> &Relationship {
        let rel = Relationship::new(r_id.clone(), reltype, target_ref, self.base_uri.clone());
        self.rels.insert(r_id.clone(), rel);
        &self.rels[&r_id]
    }

    /// Get a relationship by its ID.
    #[inline]
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.get(r_id)
    }

    /// Get or add a relationship to a target part.
    ///
    /// If a relationship of the given type to the target already exists,
    /// returns that relationship. Otherwise, creates a new one with the
    /// next available rId.
    pub fn get_or_add(&mut self, reltype: &str, target_ref: &str) -> &Relationship {
        let existing = self
            .rels
            .values()
            .find(|rel| rel.reltype() == reltype && rel.target_ref() == target_ref)
            .map(|rel| rel.r_id().to_string());

        let r_id = match existing {
            Some(r_id) => r_id,
            None => {
                let r_id = self.next_r_id();
                self.add_relationship(reltype.to_string(), target_ref.to_string(), r_id.clone());
                r_id
            },
        };

        &self.rels[&r_id]
    }

    /// Get the next available relationship ID, filling gaps first.
    fn next_r_id(&self) -> String {
        let mut used_numbers: Vec<u32> = self
            .rels
            .keys()
            .filter_map(|r_id| {
                r_id.strip_prefix("rId")
                    .and_then(|digits| atoi_simd::parse::<u32>(digits.as_bytes()).ok())
            })
            .collect();
        used_numbers.sort_unstable();

        let mut next_num = 1u32;
        for &num in &used_numbers {
            match num.cmp(&next_num) {
                std::cmp::Ordering::Equal => next_num += 1,
                std::cmp::Ordering::Greater => break,
                std::cmp::Ordering::Less => {},
            }
        }

        format!("rId{}", next_num)
    }

    /// Get the single relationship of a specific type.
    ///
    /// Returns an error if none or more than one exists.
    pub fn part_with_reltype(&self, reltype: &str) -> Result<&Relationship> {
        let mut matching = self.rels.values().filter(|rel| rel.reltype() == reltype);

        match (matching.next(), matching.next()) {
            (Some(rel), None) => Ok(rel),
            (None, _) => Err(OpcError::RelationshipNotFound(format!(
                "No relationship of type '{}'",
                reltype
            ))),
            (Some(_), Some(_)) => Err(OpcError::InvalidRelationship(format!(
                "Multiple relationships of type '{}'",
                reltype
            ))),
        }
    }

    /// Get an iterator over all relationships, in rId order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.values()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize relationships to the XML of a `.rels` part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        let _ = write!(
            xml,
            r#"<Relationships xmlns="{}">"#,
            namespace::OPC_RELATIONSHIPS
        );

        for rel in self.rels.values() {
            let _ = write!(
                xml,
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(rel.r_id()),
                escape_xml(rel.reltype()),
                escape_xml(rel.target_ref()),
            );
        }

        xml.push_str("</Relationships>");

        xml
    }
}

impl Default for Relationships {
    fn default() -> Self {
        Self::new("/".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    #[test]
    fn test_next_r_id_fills_gaps() {
        let mut rels = Relationships::new("/ppt".to_string());
        assert_eq!(rels.next_r_id(), "rId1");

        rels.add_relationship("t".to_string(), "a.xml".to_string(), "rId1".to_string());
        rels.add_relationship("t".to_string(), "c.xml".to_string(), "rId3".to_string());
        assert_eq!(rels.next_r_id(), "rId2");
    }

    #[test]
    fn test_get_or_add_reuses_existing() {
        let mut rels = Relationships::new("/ppt".to_string());

        let first = rels.get_or_add(rt::SLIDE, "slides/slide1.xml").r_id().to_string();
        let again = rels.get_or_add(rt::SLIDE, "slides/slide1.xml").r_id().to_string();
        let other = rels.get_or_add(rt::SLIDE, "slides/slide2.xml").r_id().to_string();

        assert_eq!(first, "rId1");
        assert_eq!(again, "rId1");
        assert_eq!(other, "rId2");
        assert_eq!(rels.len(), 2);
    }

    #[test]
    fn test_part_with_reltype() {
        let mut rels = Relationships::new("/".to_string());
        rels.get_or_add(rt::OFFICE_DOCUMENT, "ppt/presentation.xml");

        let rel = rels.part_with_reltype(rt::OFFICE_DOCUMENT).unwrap();
        assert_eq!(
            rel.target_partname().unwrap().as_str(),
            "/ppt/presentation.xml"
        );
        assert!(rels.part_with_reltype(rt::THEME).is_err());
    }

    #[test]
    fn test_xml_round_trip() {
        let mut rels = Relationships::new("/ppt/slides".to_string());
        rels.get_or_add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
        rels.get_or_add(rt::NOTES_SLIDE, "../notesSlides/notesSlide1.xml");

        let xml = rels.to_xml();
        assert!(xml.contains(r#"Id="rId2""#));

        let parsed = Relationships::from_xml("/ppt/slides", xml.as_bytes()).unwrap();
        let notes = parsed.part_with_reltype(rt::NOTES_SLIDE).unwrap();
        assert_eq!(
            notes.target_partname().unwrap().as_str(),
            "/ppt/notesSlides/notesSlide1.xml"
        );
    }

    #[test]
    fn test_from_xml_rejects_incomplete_element() {
        let xml = br#"<Relationships><Relationship Id="rId1" Type="x"/></Relationships>"#;
        assert!(Relationships::from_xml("/", xml).is_err());
    }
}
