use crate::common::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RGB color representation.
///
/// Represents a color using red, green, and blue components, each in the range 0-255.
/// Serialized as a `"#RRGGBB"` string so deck definitions stay readable.
///
/// # Examples
///
/// ```rust
/// use deckgen::common::RGBColor;
///
/// let purple = RGBColor::new(148, 0, 211);
/// assert_eq!(purple.to_hex(), "9400D3");
///
/// let green: RGBColor = "#00FFA3".parse().unwrap();
/// assert_eq!(green, RGBColor::new(0, 255, 163));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    pub const WHITE: RGBColor = RGBColor::new(255, 255, 255);
    pub const BLACK: RGBColor = RGBColor::new(0, 0, 0);

    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string.
    ///
    /// Accepts `"FF0000"` or `"#FF0000"`, case-insensitive.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to hex string (without # prefix), the form `a:srgbClr` expects.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl FromStr for RGBColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s.trim()).ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for RGBColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RGBColor> for String {
    fn from(color: RGBColor) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hex_formatting() {
        assert_eq!(RGBColor::new(20, 20, 35).to_hex(), "141423");
        assert_eq!(RGBColor::new(255, 215, 0).to_string(), "#FFD700");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(RGBColor::from_hex("FFF").is_none());
        assert!(RGBColor::from_hex("GG0000").is_none());
        assert!(RGBColor::from_hex("#00FFA3FF").is_none());
        assert!(RGBColor::from_hex("ééé").is_none());
        assert!(matches!(
            "purple".parse::<RGBColor>(),
            Err(Error::InvalidColor(_))
        ));
    }

    #[test]
    fn test_lowercase_accepted() {
        assert_eq!(
            RGBColor::from_hex("8a2be2"),
            Some(RGBColor::new(138, 43, 226))
        );
    }

    proptest! {
        #[test]
        fn hex_parse_inverts_display(r: u8, g: u8, b: u8) {
            let color = RGBColor::new(r, g, b);
            prop_assert_eq!(color.to_string().parse::<RGBColor>().unwrap(), color);
        }
    }
}
