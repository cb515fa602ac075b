//! Slide background support.
//!
//! Every generated slide carries its own solid background rather than
//! inheriting the master's.

use crate::common::style::RGBColor;

/// Slide background configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideBackground {
    /// Inherit the master background
    #[default]
    None,
    /// Solid color background
    Solid(RGBColor),
}

impl SlideBackground {
    /// Create a solid color background.
    pub fn solid(color: RGBColor) -> Self {
        Self::Solid(color)
    }

    /// The fill color, if this background sets one.
    pub fn color(&self) -> Option<RGBColor> {
        match self {
            Self::None => None,
            Self::Solid(color) => Some(*color),
        }
    }

    /// Append the `p:bg` element. Must precede `p:spTree` inside `p:cSld`.
    pub(crate) fn write_xml(&self, xml: &mut String) {
        if let Self::Solid(color) = self {
            xml.push_str("<p:bg><p:bgPr><a:solidFill><a:srgbClr val=\"");
            xml.push_str(&color.to_hex());
            xml.push_str("\"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>");
        }
    }
}
