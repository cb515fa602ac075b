//! Unified error types for deckgen.
//!
//! This module provides the crate-level error type that encompasses packaging,
//! presentation writing and deck-definition errors, presenting a consistent API
//! to callers of the library and the CLI.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
