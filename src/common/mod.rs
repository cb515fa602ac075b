//! Common types and utilities shared by the writer, the reader and the deck model.

// Submodule declarations
pub mod error;
pub mod style;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
pub use style::RGBColor;
pub use unit::{inches, pt};
