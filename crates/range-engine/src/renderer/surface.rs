//! Drawing surface contract.
//!
//! All pixels are produced in TypeScript (Canvas2D); game code only issues
//! primitive draw commands against a `Surface`. The engine's `CircleBuffer`
//! is the surface the web bridge hands to the host; tests can substitute
//! their own recorder.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Linear RGBA colour, each channel 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a CSS-style `#rrggbb` hex colour (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .ok()
                .map(|v| v as f32 / 255.0)
        };
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?, 1.0))
    }

    /// Format as `#rrggbb` (alpha is dropped).
    pub fn to_hex(&self) -> String {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }
}

impl TryFrom<String> for Rgba {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value).ok_or_else(|| format!("invalid colour {:?}, expected #rrggbb", value))
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_hex()
    }
}

/// A surface that accepts primitive draw commands.
pub trait Surface {
    /// Pixel dimensions (width, height).
    fn size(&self) -> Vec2;

    /// Clear the whole surface.
    fn clear(&mut self);

    /// Draw a filled circle. Later circles paint over earlier ones.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colours() {
        let red = Rgba::from_hex("#d90429").unwrap();
        assert_eq!(red.r, 0xd9 as f32 / 255.0);
        assert_eq!(red.g, 0x04 as f32 / 255.0);
        assert_eq!(red.b, 0x29 as f32 / 255.0);
        assert_eq!(red.a, 1.0);
        assert_eq!(Rgba::from_hex("edf2f4").unwrap().to_hex(), "#edf2f4");
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Rgba::from_hex("#fff").is_none());
        assert!(Rgba::from_hex("#gggggg").is_none());
        assert!(Rgba::from_hex("#+f+f+f").is_none());
        assert!(Rgba::from_hex("").is_none());
    }

    #[test]
    fn deserializes_from_json_string() {
        let color: Rgba = serde_json::from_str("\"#000000\"").unwrap();
        assert_eq!(color, Rgba::new(0.0, 0.0, 0.0, 1.0));
        assert!(serde_json::from_str::<Rgba>("\"red\"").is_err());
    }
}
