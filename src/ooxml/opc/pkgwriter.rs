//! Package writer for OPC packages.
//!
//! Serializes an [`OpcPackage`] into a ZIP archive: `[Content_Types].xml`
//! first, then the package relationships, then every part followed by its
//! own `.rels` part.

use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::{content_type as ct, namespace};
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::package::OpcPackage;
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PACKAGE_URI, PackURI};
use crate::ooxml::opc::phys_pkg::PhysPkgWriter;
use phf::phf_map;
use std::collections::BTreeMap;
use std::fmt::Write as FmtWrite;
use std::path::Path;

/// Extensions whose content type is declared once as a `Default` element.
static DEFAULT_CONTENT_TYPES: phf::Map<&'static str, &'static str> = phf_map! {
    "rels" => ct::OPC_RELATIONSHIPS,
    "xml" => ct::XML,
    "png" => ct::PNG,
    "jpeg" => ct::JPEG,
    "jpg" => ct::JPEG,
    "gif" => ct::GIF,
};

/// Package writer that serializes an OPC package to a ZIP file.
///
/// # Example
///
/// ```no_run
/// use deckgen::ooxml::opc::{OpcPackage, PackageWriter};
///
/// let pkg = OpcPackage::new();
/// PackageWriter::write("output.pptx", &pkg)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct PackageWriter;

impl PackageWriter {
    /// Write an OPC package to a file.
    pub fn write<P: AsRef<Path>>(path: P, package: &OpcPackage) -> Result<()> {
        let bytes = Self::to_bytes(package)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Serialize an OPC package to bytes.
    pub fn to_bytes(package: &OpcPackage) -> Result<Vec<u8>> {
        let mut phys_writer = PhysPkgWriter::new();

        Self::write_content_types(&mut phys_writer, package)?;
        Self::write_pkg_rels(&mut phys_writer, package)?;
        Self::write_parts(&mut phys_writer, package)?;

        phys_writer.finish()
    }

    fn write_content_types(phys_writer: &mut PhysPkgWriter, package: &OpcPackage) -> Result<()> {
        let blob = ContentTypesItem::from_package(package).to_xml();
        let content_types_uri = PackURI::new(CONTENT_TYPES_URI).map_err(OpcError::InvalidPackUri)?;
        phys_writer.write(&content_types_uri, blob.as_bytes())
    }

    fn write_pkg_rels(phys_writer: &mut PhysPkgWriter, package: &OpcPackage) -> Result<()> {
        let package_uri = PackURI::new(PACKAGE_URI).map_err(OpcError::InvalidPackUri)?;
        let rels_uri = package_uri.rels_uri().map_err(OpcError::InvalidPackUri)?;
        phys_writer.write(&rels_uri, package.rels().to_xml().as_bytes())
    }

    fn write_parts(phys_writer: &mut PhysPkgWriter, package: &OpcPackage) -> Result<()> {
        for part in package.iter_parts() {
            tracing::debug!(
                partname = %part.partname(),
                bytes = part.blob().len(),
                "writing part"
            );
            phys_writer.write(part.partname(), part.blob())?;

            if !part.rels().is_empty() {
                let rels_uri = part
                    .partname()
                    .rels_uri()
                    .map_err(OpcError::InvalidPackUri)?;
                phys_writer.write(&rels_uri, part.rels().to_xml().as_bytes())?;
            }
        }

        Ok(())
    }
}

/// Builder for `[Content_Types].xml`.
struct ContentTypesItem {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,

    /// Override content types by partname
    overrides: BTreeMap<String, String>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    fn from_package(package: &OpcPackage) -> Self {
        let mut cti = Self::new();

        for part in package.iter_parts() {
            cti.add_content_type(part.partname(), part.content_type());
        }

        cti
    }

    /// Use a `Default` when the extension maps to this content type, an
    /// `Override` for the partname otherwise.
    fn add_content_type(&mut self, partname: &PackURI, content_type: &str) {
        let ext = partname.ext().to_ascii_lowercase();

        if DEFAULT_CONTENT_TYPES.get(ext.as_str()) == Some(&content_type) {
            self.defaults.insert(ext, content_type.to_string());
        } else {
            self.overrides
                .insert(partname.to_string(), content_type.to_string());
        }
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.overrides.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        let _ = write!(xml, r#"<Types xmlns="{}">"#, namespace::OPC_CONTENT_TYPES);

        for (ext, content_type) in &self.defaults {
            let _ = write!(
                xml,
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(content_type)
            );
        }

        for (partname, content_type) in &self.overrides {
            let _ = write!(
                xml,
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type)
            );
        }

        xml.push_str("</Types>");

        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;
    use crate::ooxml::opc::part::{Part, XmlPart};
    use crate::ooxml::opc::phys_pkg::PhysPkgReader;

    #[test]
    fn test_content_types_xml() {
        let mut cti = ContentTypesItem::new();
        cti.add_content_type(&PackURI::new("/media/image1.png").unwrap(), ct::PNG);
        cti.add_content_type(
            &PackURI::new("/ppt/presentation.xml").unwrap(),
            ct::PML_PRESENTATION_MAIN,
        );

        let xml = cti.to_xml();

        assert!(xml.contains(r#"<Default Extension="png" ContentType="image/png"/>"#));
        assert!(xml.contains(r#"<Override PartName="/ppt/presentation.xml""#));
        assert!(!xml.contains(r#"PartName="/media/image1.png""#));
    }

    #[test]
    fn test_content_types_written_first() {
        let mut pkg = OpcPackage::new();
        let mut part = XmlPart::new(
            PackURI::new("/ppt/presentation.xml").unwrap(),
            ct::PML_PRESENTATION_MAIN,
            "<p:presentation/>".to_string(),
        );
        part.relate_to("theme/theme1.xml", rt::THEME);
        pkg.add_part(Box::new(part));
        pkg.relate_to("ppt/presentation.xml", rt::OFFICE_DOCUMENT);

        let bytes = PackageWriter::to_bytes(&pkg).unwrap();
        let reader = PhysPkgReader::from_bytes(bytes).unwrap();

        assert_eq!(
            reader.member_names(),
            vec![
                "[Content_Types].xml".to_string(),
                "_rels/.rels".to_string(),
                "ppt/presentation.xml".to_string(),
                "ppt/_rels/presentation.xml.rels".to_string(),
            ]
        );
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.pptx");

        PackageWriter::write(&path, &OpcPackage::new()).unwrap();
        let reader = PhysPkgReader::open(&path).unwrap();
        assert!(reader.content_types_xml().is_ok());
    }
}
