//! Text overlays.

use super::Button;
use crate::input::PointerSample;
use crate::interaction::Interaction;
use crate::paint::Painter;
use crate::style::TextStyle;
use kurbo::{Point, Size};

/// A line of text drawn centred on a point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Label {
    pub text: String,
    pub style: TextStyle,
}

impl Label {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn draw(&self, painter: &mut dyn Painter, center: Point) {
        if !self.text.is_empty() {
            painter.text(&self.text, &self.style, center);
        }
    }

    pub fn measure(&self, painter: &dyn Painter) -> Size {
        painter.measure_text(&self.text, &self.style.font)
    }
}

/// A button with a label centred on it.
#[derive(Debug)]
pub struct TextButton {
    pub button: Button,
    pub label: Label,
}

impl TextButton {
    pub fn new(button: Button, label: Label) -> Self {
        Self { button, label }
    }

    pub fn text(&self) -> &str {
        &self.label.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.label.text = text.into();
    }

    pub fn draw(&self, painter: &mut dyn Painter) {
        self.button.draw(painter);
        self.label.draw(painter, self.button.center().to_point());
    }

    pub fn update(&mut self, pointer: &PointerSample, painter: &mut dyn Painter) -> Interaction {
        let interaction = self.button.poll(pointer);
        self.draw(painter);
        self.button.dispatch(interaction, pointer);
        interaction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{DisplayList, DrawCommand};
    use crate::shapes::{Polygon, Rectangle};
    use crate::style::{Rgba8, ShapeStyle};

    #[test]
    fn test_text_drawn_over_button_at_center() {
        let mut button = TextButton::new(
            Button::new(
                Polygon::new([(0, 0), (100, 0), (50, 100)]).unwrap(),
                ShapeStyle::filled(Rgba8::WHITE),
            ),
            Label::new("Go", TextStyle::sized(16.0, Rgba8::BLACK)),
        );
        let mut list = DisplayList::new();
        button.update(&PointerSample::default(), &mut list);

        assert_eq!(list.len(), 2);
        match &list.commands()[1] {
            DrawCommand::Text { text, center, .. } => {
                assert_eq!(text, "Go");
                assert_eq!(*center, Point::new(50.0, 33.0));
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_label_draws_nothing() {
        let mut list = DisplayList::new();
        Label::default().draw(&mut list, Point::ZERO);
        assert!(list.is_empty());
    }

    #[test]
    fn test_set_text() {
        let mut button = TextButton::new(
            Button::new(Rectangle::new((0, 0), 10, 10).unwrap(), ShapeStyle::default()),
            Label::default(),
        );
        button.set_text("changed");
        assert_eq!(button.text(), "changed");
    }
}
