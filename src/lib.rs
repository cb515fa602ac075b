//! deckgen - PowerPoint decks from declarative slide definitions
//!
//! This library writes Office Open XML presentations (`.pptx`) without any
//! Office installation, and reads them back for inspection.
//!
//! # Features
//!
//! - **Deck model**: Title, content, architecture, features and closing layouts
//!   described as plain data, with built-in ParallaxPay decks
//! - **YAML definitions**: Load and export decks with serde
//! - **PPTX writer**: Slides, text boxes, preset shapes, solid backgrounds and
//!   speaker notes, packaged as a valid OPC container
//! - **PPTX reader**: Slide order, texts, titles and notes of a saved deck
//!
//! # Example - Building a built-in deck
//!
//! ```no_run
//! use deckgen::deck;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pitch = deck::builtin("pitch")?;
//! let path = deck::generate(&pitch, None, |slide| println!("{}", slide.announce))?;
//! println!("Saved {}", path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Writing slides directly
//!
//! ```no_run
//! use deckgen::common::RGBColor;
//! use deckgen::ooxml::pptx::{Bounds, MutablePresentation, Package, Paragraph, SlideBackground};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide();
//! slide.set_background(SlideBackground::solid(RGBColor::new(20, 20, 35)));
//! slide
//!     .add_text_box(Bounds::inches(0.5, 2.0, 9.0, 1.5))
//!     .add_paragraph(Paragraph::new("Hello").size(72.0).bold(true));
//! slide.set_notes("Say hello.");
//!
//! Package::from_presentation(&pres)?.save("hello.pptx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Reading a deck back
//!
//! ```no_run
//! use deckgen::ooxml::pptx::PresentationSummary;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let summary = PresentationSummary::open("hello.pptx")?;
//! for slide in &summary.slides {
//!     println!("{}: {}", slide.number, slide.title.as_deref().unwrap_or(""));
//! }
//! # Ok(())
//! # }
//! ```

/// Shared units, colors, XML escaping and the crate error type
pub mod common;

/// Deck definitions, built-in decks and the slide renderer
pub mod deck;

/// OOXML packaging and the PresentationML writer and reader
pub mod ooxml;

pub use common::{Error, Result};
pub use deck::{Deck, Slide, SlideLayout};
