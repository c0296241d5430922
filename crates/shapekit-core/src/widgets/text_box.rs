//! Non-interactive text box.

use super::Label;
use crate::paint::Painter;
use crate::shapes::Shape;
use crate::style::{Rgba8, ShapeStyle, TextStyle};

/// A shape with a centred label that never reacts to input.
#[derive(Debug, Clone)]
pub struct TextBox {
    pub shape: Shape,
    pub style: ShapeStyle,
    pub label: Label,
}

impl TextBox {
    pub fn new(shape: impl Into<Shape>, style: ShapeStyle, label: Label) -> Self {
        Self {
            shape: shape.into(),
            style,
            label,
        }
    }

    pub fn text(&self) -> &str {
        &self.label.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.label.text = text.into();
    }

    pub fn set_style(&mut self, style: TextStyle) {
        self.label.style = style;
    }

    pub fn set_text_color(&mut self, color: Rgba8) {
        self.label.style.color = color;
    }

    pub fn set_font_size(&mut self, size: f64) {
        self.label.style.font.size = size;
    }

    pub fn draw(&self, painter: &mut dyn Painter) {
        painter.shape(&self.shape, &self.style);
        self.label.draw(painter, self.shape.center().to_point());
    }
}
