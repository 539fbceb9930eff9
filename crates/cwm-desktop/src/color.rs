//! Colors for window and button chrome
//!
//! A [`Color`] is kept as the CSS string handed to the drawing surface.
//! It can be built from any CSS color string or from an 8-bit RGB triple.

use core::fmt;
use serde::{Deserialize, Serialize};

/// A CSS color string (`#rrggbb`, `#rgb`, or any other CSS color)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Default window background
    pub fn white() -> Self {
        Color("#ffffff".to_string())
    }

    /// Build a color from 8-bit RGB components
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(rgb_to_hex(r, g, b))
    }

    /// Build a color from integer components, rejecting anything outside 0..=255
    pub fn try_rgb(r: i32, g: i32, b: i32) -> Result<Self, ColorError> {
        let r = channel("r", r)?;
        let g = channel("g", g)?;
        let b = channel("b", b)?;
        Ok(Self::rgb(r, g, b))
    }

    /// CSS representation
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Color(s.to_string())
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color(s)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::rgb(r, g, b)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::rgb(r, g, b)
    }
}

/// Convert RGB components to a lowercase `#rrggbb` string.
///
/// Packs `1 << 24 | r << 16 | g << 8 | b` and drops the leading `1` digit,
/// which keeps leading zeros of the red channel.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    let packed = (1u32 << 24) | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b);
    let digits = format!("{:x}", packed);
    format!("#{}", &digits[1..])
}

fn channel(name: &'static str, value: i32) -> Result<u8, ColorError> {
    u8::try_from(value).map_err(|_| ColorError::ComponentOutOfRange { channel: name, value })
}

/// Errors from color construction
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorError {
    /// A component does not fit in 8 bits
    ComponentOutOfRange {
        /// Which channel (`r`, `g` or `b`)
        channel: &'static str,
        /// The rejected value
        value: i32,
    },
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::ComponentOutOfRange { channel, value } => {
                write!(f, "color component {} out of range: {} (expected 0..=255)", channel, value)
            }
        }
    }
}

impl std::error::Error for ColorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hex_known_values() {
        assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
        assert_eq!(rgb_to_hex(255, 255, 255), "#ffffff");
        assert_eq!(rgb_to_hex(17, 17, 17), "#111111");
    }

    #[test]
    fn test_rgb_to_hex_keeps_leading_zeros() {
        assert_eq!(rgb_to_hex(0, 0, 15), "#00000f");
        assert_eq!(rgb_to_hex(1, 2, 3), "#010203");
    }

    #[test]
    fn test_color_from_triple_and_string() {
        assert_eq!(Color::from((204, 204, 204)).as_str(), "#cccccc");
        assert_eq!(Color::from([16, 32, 48]).as_str(), "#102030");
        assert_eq!(Color::from("#111").as_str(), "#111");
    }

    #[test]
    fn test_try_rgb_rejects_out_of_range() {
        assert_eq!(
            Color::try_rgb(256, 0, 0),
            Err(ColorError::ComponentOutOfRange { channel: "r", value: 256 })
        );
        assert_eq!(
            Color::try_rgb(0, -1, 0),
            Err(ColorError::ComponentOutOfRange { channel: "g", value: -1 })
        );
        assert_eq!(Color::try_rgb(10, 20, 30).unwrap().as_str(), "#0a141e");
    }

    #[test]
    fn test_color_serializes_as_plain_string() {
        let json = serde_json::to_string(&Color::rgb(255, 0, 0)).unwrap();
        assert_eq!(json, "\"#ff0000\"");
    }
}
