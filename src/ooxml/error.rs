//! Errors from the PresentationML writer and reader.
use crate::ooxml::opc::error::OpcError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OoxmlError>;

#[derive(Error, Debug)]
pub enum OoxmlError {
    #[error(transparent)]
    Opc(#[from] OpcError),

    /// Part XML could not be written or parsed
    #[error("XML error: {0}")]
    Xml(String),

    #[error("part not found: {0}")]
    PartNotFound(String),

    /// A part was found under the expected name with another content type
    #[error("expected content type {expected}, got {got}")]
    InvalidContentType { expected: String, got: String },

    #[error("invalid presentation: {0}")]
    InvalidFormat(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl From<quick_xml::Error> for OoxmlError {
    fn from(err: quick_xml::Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for OoxmlError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}

impl From<std::str::Utf8Error> for OoxmlError {
    fn from(err: std::str::Utf8Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}
