//! PowerPoint (.pptx) presentation support.
//!
//! Writing follows the shape of a presentation: a [`MutablePresentation`]
//! owns [`MutableSlide`]s, which own [`MutableShape`]s with text frames made of
//! [`Paragraph`]s. [`Package`] turns the result into an OPC package and
//! [`PresentationSummary`] reads a saved deck back.
//!
//! # Example
//!
//! ```rust,no_run
//! use deckgen::common::RGBColor;
//! use deckgen::ooxml::pptx::{Alignment, Bounds, MutablePresentation, Package, Paragraph};
//!
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide();
//! slide
//!     .add_text_box(Bounds::inches(0.5, 2.0, 9.0, 1.5))
//!     .add_paragraph(
//!         Paragraph::new("ParallaxPay")
//!             .align(Alignment::Center)
//!             .size(72.0)
//!             .color(RGBColor::new(0, 255, 163)),
//!     );
//!
//! Package::from_presentation(&pres)?.save("deck.pptx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod backgrounds;
pub mod format;
pub mod package;
pub mod reader;
pub mod template;
pub mod writer;

pub use backgrounds::SlideBackground;
pub use format::{Alignment, AutoShapeType, Bounds, LineFormat, TextFormat, VerticalAnchor};
pub use package::Package;
pub use reader::{PresentationSummary, SlideSummary};
pub use writer::{
    MutablePresentation, MutableShape, MutableSlide, Paragraph, ShapeKind, TextFrame,
};
