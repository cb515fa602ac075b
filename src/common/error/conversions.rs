//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from internal
//! error types to the unified Error type.

use super::types::Error;
use crate::ooxml::error::OoxmlError;
use crate::ooxml::opc::error::OpcError;

impl From<OpcError> for Error {
    fn from(err: OpcError) -> Self {
        match err {
            OpcError::Io(e) => Error::Io(e),
            OpcError::PackageNotFound(s) => Error::ComponentNotFound(format!("package {}", s)),
            OpcError::PartNotFound(s) | OpcError::RelationshipNotFound(s) => {
                Error::ComponentNotFound(s)
            },
            OpcError::Zip(e) => Error::ZipError(e.to_string()),
            OpcError::Xml(s) => Error::XmlError(s),
            OpcError::InvalidPackUri(s) | OpcError::InvalidRelationship(s) => {
                Error::InvalidFormat(s)
            },
        }
    }
}

impl From<OoxmlError> for Error {
    fn from(err: OoxmlError) -> Self {
        match err {
            OoxmlError::Opc(e) => Error::from(e),
            OoxmlError::Xml(s) => Error::XmlError(s),
            OoxmlError::PartNotFound(s) => Error::ComponentNotFound(s),
            OoxmlError::InvalidContentType { expected, got } => Error::InvalidFormat(format!(
                "expected content type {}, got {}",
                expected, got
            )),
            OoxmlError::InvalidFormat(s) => Error::InvalidFormat(s),
            OoxmlError::Io(e) => Error::Io(e),
            OoxmlError::Other(s) => Error::Other(s),
        }
    }
}
