//! Office Open XML (OOXML) packaging and PresentationML.
//!
//! # Architecture
//!
//! 1. **OPC Layer** (`opc`): Low-level package handling (ZIP, parts, relationships)
//! 2. **Shared Utilities** (`common`, `error`): Document properties and error types
//! 3. **PresentationML** (`pptx`): Writing decks and reading back their text
//!
//! # Example
//!
//! ```rust,no_run
//! use deckgen::ooxml::pptx::PresentationSummary;
//!
//! let summary = PresentationSummary::open("deck.pptx")?;
//! println!("{} slides", summary.slides.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod common;
pub mod error;
pub mod opc;
pub mod pptx;

// Re-export commonly used types from OPC layer
pub use opc::{OpcPackage, PackURI};

pub use common::DocumentProperties;

pub use error::{OoxmlError, Result};
