//! Colours, borders and fonts.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<(u8, u8, u8)> for Rgba8 {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<Color> for Rgba8 {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl From<Rgba8> for Color {
    fn from(color: Rgba8) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Outline drawn over a shape's fill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub color: Rgba8,
    pub width: f64,
}

impl Border {
    pub fn new(color: impl Into<Rgba8>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }
}

/// How a shape is painted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub fill: Rgba8,
    #[serde(default)]
    pub border: Option<Border>,
}

impl ShapeStyle {
    pub fn filled(fill: impl Into<Rgba8>) -> Self {
        Self {
            fill: fill.into(),
            border: None,
        }
    }

    pub fn with_border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }
}

/// Font selection. `None` family means the backend's default sans-serif.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    #[serde(default)]
    pub family: Option<String>,
    pub size: f64,
}

impl FontSpec {
    pub fn new(size: f64) -> Self {
        Self { family: None, size }
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new(20.0)
    }
}

/// Font plus colour.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextStyle {
    pub font: FontSpec,
    pub color: Rgba8,
}

impl TextStyle {
    pub fn new(font: FontSpec, color: impl Into<Rgba8>) -> Self {
        Self {
            font,
            color: color.into(),
        }
    }

    pub fn sized(size: f64, color: impl Into<Rgba8>) -> Self {
        Self::new(FontSpec::new(size), color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_conversion() {
        let c = Rgba8::new(10, 20, 30, 40);
        let back: Rgba8 = Color::from(c).into();
        assert_eq!(c, back);
    }

    #[test]
    fn test_style_serde_defaults() {
        let style: ShapeStyle = serde_json::from_str(r#"{"fill":{"r":1,"g":2,"b":3,"a":255}}"#).unwrap();
        assert_eq!(style, ShapeStyle::filled((1, 2, 3)));
        let font: FontSpec = serde_json::from_str(r#"{"size":12.0}"#).unwrap();
        assert!(font.family.is_none());
    }
}
