//! Named deck colors.

use crate::common::style::RGBColor;
use serde::{Deserialize, Serialize};

/// The six colors every slide layout draws from.
///
/// Missing entries in a YAML definition fall back to the ParallaxPay values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Feature card fill
    pub primary: RGBColor,
    /// Titles and headline text
    pub accent: RGBColor,
    /// Slide background
    pub dark: RGBColor,
    /// Body text and card outlines
    pub white: RGBColor,
    /// Taglines, footers and diagram arrows
    pub gray: RGBColor,
    pub highlight: RGBColor,
}

impl Palette {
    /// Parallax purple on near-black with Solana green accents.
    pub const PARALLAX: Palette = Palette {
        primary: RGBColor::new(148, 0, 211),
        accent: RGBColor::new(0, 255, 163),
        dark: RGBColor::new(20, 20, 35),
        white: RGBColor::WHITE,
        gray: RGBColor::new(180, 180, 200),
        highlight: RGBColor::new(138, 43, 226),
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::PARALLAX
    }
}
