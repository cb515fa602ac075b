//! Physical access to an OPC package (the ZIP container).
//!
//! [`PhysPkgWriter`] streams members into an in-memory archive and
//! [`PhysPkgReader`] reads members back by name.

use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PackURI};
use std::cell::RefCell;
use std::io::{Cursor, Read, Write};
use std::path::Path;
use zip::ZipArchive;
use zip::write::{SimpleFileOptions, ZipWriter};

/// Physical package reader over an owned ZIP buffer.
pub struct PhysPkgReader {
    /// `ZipArchive::by_name` needs `&mut`; reads are otherwise logically shared.
    archive: RefCell<ZipArchive<Cursor<Vec<u8>>>>,
}

impl PhysPkgReader {
    /// Open an OPC package from a file path.
    ///
    /// # Errors
    /// Returns an error if the file doesn't exist or isn't a valid ZIP file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(OpcError::PackageNotFound(path.display().to_string()));
        }

        let data = std::fs::read(path)?;
        Self::from_bytes(data)
    }

    /// Create a reader from owned bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let archive = ZipArchive::new(Cursor::new(data))?;
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Get the binary content for a part by its PackURI.
    pub fn blob_for(&self, pack_uri: &PackURI) -> Result<Vec<u8>> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive
            .by_name(pack_uri.membername())
            .map_err(|_| OpcError::PartNotFound(pack_uri.to_string()))?;

        let mut blob = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut blob)?;
        Ok(blob)
    }

    /// Get the `[Content_Types].xml` content.
    pub fn content_types_xml(&self) -> Result<Vec<u8>> {
        let content_types_uri = PackURI::new(CONTENT_TYPES_URI).map_err(OpcError::InvalidPackUri)?;
        self.blob_for(&content_types_uri)
    }

    /// Get the relationships XML for a source, or `None` if it has none.
    pub fn rels_xml_for(&self, source_uri: &PackURI) -> Result<Option<Vec<u8>>> {
        let rels_uri = source_uri.rels_uri().map_err(OpcError::InvalidPackUri)?;

        match self.blob_for(&rels_uri) {
            Ok(blob) => Ok(Some(blob)),
            Err(OpcError::PartNotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Check if a specific member exists in the package.
    pub fn contains(&self, pack_uri: &PackURI) -> bool {
        self.archive
            .borrow()
            .index_for_name(pack_uri.membername())
            .is_some()
    }

    /// List all member names in archive order.
    pub fn member_names(&self) -> Vec<String> {
        self.archive
            .borrow()
            .file_names()
            .map(str::to_string)
            .collect()
    }

    /// Number of members in the archive.
    pub fn len(&self) -> usize {
        self.archive.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Physical package writer producing an in-memory ZIP archive.
pub struct PhysPkgWriter {
    zip_writer: ZipWriter<Cursor<Vec<u8>>>,
}

impl PhysPkgWriter {
    pub fn new() -> Self {
        Self {
            zip_writer: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Write a member, deflate-compressed.
    pub fn write(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        self.zip_writer.start_file(pack_uri.membername(), options)?;
        self.zip_writer.write_all(blob)?;
        Ok(())
    }

    /// Finish the archive and return its bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.zip_writer.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read_members() {
        let uri = PackURI::new("/ppt/presentation.xml").unwrap();

        let mut writer = PhysPkgWriter::new();
        writer.write(&uri, b"<p:presentation/>").unwrap();
        let bytes = writer.finish().unwrap();

        let reader = PhysPkgReader::from_bytes(bytes).unwrap();
        assert_eq!(reader.len(), 1);
        assert!(reader.contains(&uri));
        assert_eq!(reader.member_names(), vec!["ppt/presentation.xml".to_string()]);
        assert_eq!(reader.blob_for(&uri).unwrap(), b"<p:presentation/>");
    }

    #[test]
    fn test_missing_member_is_part_not_found() {
        let bytes = PhysPkgWriter::new().finish().unwrap();
        let reader = PhysPkgReader::from_bytes(bytes).unwrap();
        let uri = PackURI::new("/ppt/slides/slide1.xml").unwrap();

        assert!(reader.is_empty());
        assert!(matches!(
            reader.blob_for(&uri),
            Err(OpcError::PartNotFound(_))
        ));
        assert!(reader.rels_xml_for(&uri).unwrap().is_none());
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = PhysPkgReader::open(dir.path().join("missing.pptx"));
        assert!(matches!(result, Err(OpcError::PackageNotFound(_))));
    }

    #[test]
    fn test_rejects_non_zip() {
        assert!(PhysPkgReader::from_bytes(b"not a zip".to_vec()).is_err());
    }
}
