//! Slider with its value written next to it.

use crate::input::PointerSample;
use crate::interaction::Interaction;
use crate::paint::Painter;
use crate::shapes::GridPoint;
use crate::widgets::{Label, Slider};
use serde::{Deserialize, Serialize};

/// How a readout prints the slider value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValueFormat {
    /// Whole part only, truncated towards zero.
    #[default]
    Integer,
    OneDecimal,
}

impl ValueFormat {
    pub fn format(self, value: f64) -> String {
        match self {
            ValueFormat::Integer => format!("{}", value.trunc() as i64),
            ValueFormat::OneDecimal => format!("{:.1}", value),
        }
    }
}

#[derive(Debug)]
pub struct SliderReadout {
    pub slider: Slider,
    pub label: Label,
    pub position: GridPoint,
    pub format: ValueFormat,
}

impl SliderReadout {
    /// The label's text is replaced with the value on every update.
    pub fn new(slider: Slider, label: Label, position: impl Into<GridPoint>) -> Self {
        Self {
            slider,
            label,
            position: position.into(),
            format: ValueFormat::default(),
        }
    }

    pub fn with_format(mut self, format: ValueFormat) -> Self {
        self.format = format;
        self
    }

    pub fn text(&self) -> String {
        self.format.format(self.slider.value())
    }

    pub fn update(&mut self, pointer: &PointerSample, painter: &mut dyn Painter) -> Interaction {
        let interaction = self.slider.update(pointer, painter);
        self.label.text = self.text();
        self.label.draw(painter, self.position.to_point());
        interaction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::DisplayList;
    use crate::style::{ShapeStyle, TextStyle};
    use crate::widgets::Orientation;
    use kurbo::Point;

    fn readout() -> SliderReadout {
        let slider = Slider::new(
            Orientation::Horizontal,
            (100, 50),
            200,
            10,
            0.0,
            100.0,
            0.0,
            ShapeStyle::default(),
        )
        .unwrap();
        SliderReadout::new(slider, Label::new("", TextStyle::default()), (220, 50))
    }

    #[test]
    fn test_formats() {
        assert_eq!(ValueFormat::Integer.format(42.9), "42");
        assert_eq!(ValueFormat::Integer.format(-3.7), "-3");
        assert_eq!(ValueFormat::OneDecimal.format(42.25), "42.2");
        assert_eq!(ValueFormat::OneDecimal.format(7.0), "7.0");
    }

    #[test]
    fn test_text_tracks_value() {
        let mut readout = readout();
        let mut list = DisplayList::new();
        readout.slider.set_value(42.5).unwrap();
        readout.update(&PointerSample::new(Point::new(0.0, 0.0), false), &mut list);
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["42"]);

        readout.format = ValueFormat::OneDecimal;
        list.clear();
        readout.update(&PointerSample::new(Point::new(0.0, 0.0), false), &mut list);
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["42.5"]);
    }

    #[test]
    fn test_drag_updates_text() {
        let mut readout = readout().with_format(ValueFormat::OneDecimal);
        let mut list = DisplayList::new();
        // knob starts at x = 0
        readout.update(&PointerSample::new(Point::new(0.0, 50.0), true), &mut list);
        readout.update(&PointerSample::new(Point::new(5.0, 50.0), true), &mut list);
        assert_eq!(readout.text(), "2.5");
    }
}
