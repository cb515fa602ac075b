/// Open Packaging Conventions (OPC) implementation.
///
/// This module provides the packaging layer underneath the presentation writer:
///
/// - Package structure (parts, relationships)
/// - Content type management (`[Content_Types].xml`)
/// - ZIP-based physical packaging, both writing and reading back
///
/// Parts are kept in partname order so that the same package always
/// serializes to the same sequence of ZIP entries.

pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::{Part, XmlPart};
pub use phys_pkg::{PhysPkgReader, PhysPkgWriter};
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
