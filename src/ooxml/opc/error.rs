//! Errors raised while assembling or opening an OPC package.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpcError {
    /// No file at the given path
    #[error("package file {0} does not exist")]
    PackageNotFound(String),

    #[error("'{0}' is not a valid pack URI")]
    InvalidPackUri(String),

    #[error("package has no part {0}")]
    PartNotFound(String),

    #[error("missing relationship: {0}")]
    RelationshipNotFound(String),

    #[error("malformed relationship: {0}")]
    InvalidRelationship(String),

    /// Malformed XML, bad attributes or non-UTF-8 text in a package item
    #[error("bad package XML: {0}")]
    Xml(String),

    #[error("ZIP container: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::Error> for OpcError {
    fn from(err: quick_xml::Error) -> Self {
        OpcError::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for OpcError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        OpcError::Xml(err.to_string())
    }
}

impl From<std::str::Utf8Error> for OpcError {
    fn from(err: std::str::Utf8Error) -> Self {
        OpcError::Xml(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OpcError>;
