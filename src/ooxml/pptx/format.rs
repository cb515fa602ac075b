//! Format types for PPTX presentations.

use crate::common::style::RGBColor;
use crate::common::unit::{inches, pt};

/// Position and size of a shape, in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Bounds {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build bounds from inch measurements.
    pub fn inches(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(inches(x), inches(y), inches(width), inches(height))
    }

    #[inline]
    pub fn bottom(&self) -> i64 {
        self.y + self.height
    }
}

/// Run-level text formatting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFormat {
    /// Font family
    pub font: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Bold text
    pub bold: Option<bool>,
    /// Italic text
    pub italic: Option<bool>,
    /// Text color
    pub color: Option<RGBColor>,
}

impl TextFormat {
    /// Size in hundredths of a point, as stored in `a:rPr/@sz`.
    pub fn size_centipoints(&self) -> Option<u32> {
        self.size.map(crate::common::unit::pt_to_centipoints)
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// Value of `a:pPr/@algn`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
            Self::Justify => "just",
        }
    }
}

/// Vertical anchoring of text inside its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAnchor {
    Top,
    Middle,
    Bottom,
}

impl VerticalAnchor {
    /// Value of `a:bodyPr/@anchor`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "t",
            Self::Middle => "ctr",
            Self::Bottom => "b",
        }
    }
}

/// Outline of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LineFormat {
    /// Whatever the shape style supplies
    #[default]
    Inherit,
    /// No outline
    None,
    /// Solid outline
    Solid {
        color: RGBColor,
        /// Width in EMUs
        width: i64,
    },
}

impl LineFormat {
    pub fn solid(color: RGBColor, width_pt: f64) -> Self {
        Self::Solid {
            color,
            width: pt(width_pt),
        }
    }
}

/// Preset geometries used by the deck renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoShapeType {
    Rectangle,
    RoundedRectangle,
    DownArrow,
}

impl AutoShapeType {
    /// Value of `a:prstGeom/@prst`.
    pub fn preset(&self) -> &'static str {
        match self {
            Self::Rectangle => "rect",
            Self::RoundedRectangle => "roundRect",
            Self::DownArrow => "downArrow",
        }
    }

    /// Base name PowerPoint gives new shapes of this type.
    pub fn base_name(&self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::RoundedRectangle => "Rounded Rectangle",
            Self::DownArrow => "Down Arrow",
        }
    }
}
