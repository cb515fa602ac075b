//! Unified error types for deckgen.
use thiserror::Error;

/// Main error type for deckgen operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid file format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Package part or relationship not found
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    /// XML writing or parsing error
    #[error("XML error: {0}")]
    XmlError(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// Deck definition could not be read or written as YAML
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Color string is not a six digit hex value
    #[error("Invalid color '{0}': expected RRGGBB or #RRGGBB")]
    InvalidColor(String),

    /// No built-in deck with the requested name
    #[error("Unknown deck '{0}'")]
    UnknownDeck(String),

    /// Deck definition is structurally unusable
    #[error("Invalid deck: {0}")]
    InvalidDeck(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for deckgen operations.
pub type Result<T> = std::result::Result<T, Error>;
