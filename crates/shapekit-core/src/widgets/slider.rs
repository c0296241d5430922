//! Value slider with a draggable knob.

use super::{Button, WidgetError, WidgetId, WidgetResult, new_id};
use crate::dispatch::Handler;
use crate::input::PointerSample;
use crate::interaction::{Interaction, TriggerMode};
use crate::paint::Painter;
use crate::shapes::{Circle, GridPoint, Rectangle, Shape};
use crate::style::{Rgba8, ShapeStyle};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Direction the slider track runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Minimum on the left.
    #[default]
    Horizontal,
    /// Maximum at the top.
    Vertical,
}

/// A track plus a knob that can be dragged along it.
///
/// The knob follows the pointer while it is pressed over the knob, so it is
/// always run with [`TriggerMode::Continuous`].
#[derive(Debug)]
pub struct Slider {
    id: WidgetId,
    orientation: Orientation,
    track: Shape,
    pub track_style: ShapeStyle,
    length: i32,
    min: f64,
    max: f64,
    value: f64,
    prev_value: f64,
    knob: Button,
    pub on_value_changed: Option<Handler<f64, Slider>>,
}

impl Slider {
    /// Create a slider whose track is centred on `center`.
    ///
    /// The default knob is a white circle with a radius equal to `thickness`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        orientation: Orientation,
        center: impl Into<GridPoint>,
        length: i32,
        thickness: i32,
        min: f64,
        max: f64,
        start: f64,
        track_style: ShapeStyle,
    ) -> WidgetResult<Self> {
        if length <= 0 {
            return Err(WidgetError::NonPositiveLength(length));
        }
        // negated so that NaN bounds are rejected too
        if !(min < max) {
            return Err(WidgetError::EmptyRange { min, max });
        }
        if !(min..=max).contains(&start) {
            return Err(WidgetError::StartOutOfRange {
                value: start,
                min,
                max,
            });
        }

        let center = center.into();
        let track = match orientation {
            Orientation::Horizontal => Rectangle::new(center, length, thickness)?,
            Orientation::Vertical => Rectangle::new(center, thickness, length)?,
        };
        let knob = Button::new(
            Circle::new(center, thickness)?,
            ShapeStyle::filled(Rgba8::WHITE),
        );

        let mut slider = Self {
            id: new_id(),
            orientation,
            track: track.into(),
            track_style,
            length,
            min,
            max,
            value: start,
            prev_value: start,
            knob,
            on_value_changed: None,
        };
        slider.attach_knob();
        Ok(slider)
    }

    /// Replace the knob. Its handlers are kept and run after each drag.
    pub fn with_knob(mut self, knob: Button) -> Self {
        self.knob = knob;
        self.attach_knob();
        self
    }

    pub fn with_knob_style(mut self, style: ShapeStyle) -> Self {
        self.knob.style = style;
        self
    }

    pub fn with_on_value_changed(mut self, handler: Handler<f64, Slider>) -> Self {
        self.on_value_changed = Some(handler);
        self
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn center(&self) -> GridPoint {
        self.track.center()
    }

    pub fn knob(&self) -> &Button {
        &self.knob
    }

    pub fn knob_mut(&mut self) -> &mut Button {
        &mut self.knob
    }

    /// Move the knob to `value` without notifying the value handler.
    pub fn set_value(&mut self, value: f64) -> WidgetResult<()> {
        if !(self.min..=self.max).contains(&value) {
            return Err(WidgetError::StartOutOfRange {
                value,
                min: self.min,
                max: self.max,
            });
        }
        self.value = value;
        self.prev_value = value;
        self.place_knob();
        Ok(())
    }

    fn attach_knob(&mut self) {
        self.knob.set_trigger_mode(TriggerMode::Continuous);
        self.place_knob();
    }

    /// Drawn track extent along its axis, `(start, start + length)`.
    fn axis_range(&self) -> (i32, i32) {
        let half = self.length.div_euclid(2);
        let c = self.center();
        let mid = match self.orientation {
            Orientation::Horizontal => c.x,
            Orientation::Vertical => c.y,
        };
        let start = mid.saturating_sub(half);
        (start, start.saturating_add(self.length))
    }

    fn place_knob(&mut self) {
        let proportion = (self.value - self.min) / (self.max - self.min);
        let (start, _) = self.axis_range();
        let offset = match self.orientation {
            Orientation::Horizontal => self.length as f64 * proportion,
            Orientation::Vertical => self.length as f64 * (1.0 - proportion),
        };
        self.move_knob(start + offset.floor() as i32);
    }

    /// Put the knob at `along` on the track axis, clamped to the track.
    fn move_knob(&mut self, along: i32) {
        let (start, end) = self.axis_range();
        let along = along.clamp(start, end);
        let c = self.center();
        let target = match self.orientation {
            Orientation::Horizontal => GridPoint::new(along, c.y),
            Orientation::Vertical => GridPoint::new(c.x, along),
        };
        self.knob.shape.move_to(target);
    }

    fn value_at_knob(&self) -> f64 {
        let (start, _) = self.axis_range();
        let k = self.knob.center();
        let range = self.max - self.min;
        let length = self.length as f64;
        match self.orientation {
            Orientation::Horizontal => self.min + (k.x - start) as f64 * range / length,
            Orientation::Vertical => self.max - (k.y - start) as f64 * range / length,
        }
    }

    fn drag_to(&mut self, position: Point) {
        let grid = GridPoint::floor(position);
        let along = match self.orientation {
            Orientation::Horizontal => grid.x,
            Orientation::Vertical => grid.y,
        };
        self.move_knob(along);
        self.value = self.value_at_knob();
    }

    pub fn draw(&self, painter: &mut dyn Painter) {
        painter.shape(&self.track, &self.track_style);
        self.knob.draw(painter);
    }

    pub fn update(&mut self, pointer: &PointerSample, painter: &mut dyn Painter) -> Interaction {
        let interaction = self.knob.poll(pointer);
        if interaction == Interaction::Clicked {
            self.drag_to(pointer.position);
        }

        self.draw(painter);
        self.knob.dispatch(interaction, pointer);

        if self.value != self.prev_value {
            log::debug!("slider {} value {} -> {}", self.id, self.prev_value, self.value);
            self.prev_value = self.value;
            if let Some(mut handler) = self.on_value_changed.take() {
                handler.invoke(self.value, &*self);
                self.on_value_changed.get_or_insert(handler);
            }
        }
        interaction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{DisplayList, DrawCommand};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn pressed(x: f64, y: f64) -> PointerSample {
        PointerSample::new(Point::new(x, y), true)
    }

    fn horizontal(start: f64) -> Slider {
        Slider::new(
            Orientation::Horizontal,
            (100, 50),
            200,
            10,
            0.0,
            100.0,
            start,
            ShapeStyle::filled(Rgba8::rgb(80, 80, 80)),
        )
        .unwrap()
    }

    fn watch(slider: Slider) -> (Rc<RefCell<Vec<f64>>>, Slider) {
        let values = Rc::new(RefCell::new(Vec::new()));
        let seen = values.clone();
        let slider = slider.with_on_value_changed(Handler::value(move |v| seen.borrow_mut().push(v)));
        (values, slider)
    }

    #[test]
    fn test_construction_errors() {
        let style = ShapeStyle::default();
        assert_eq!(
            Slider::new(Orientation::Horizontal, (0, 0), 100, 10, 0.0, 1.0, 2.0, style).unwrap_err(),
            WidgetError::StartOutOfRange { value: 2.0, min: 0.0, max: 1.0 }
        );
        assert!(matches!(
            Slider::new(Orientation::Horizontal, (0, 0), 100, 10, 0.0, 1.0, -0.5, style),
            Err(WidgetError::StartOutOfRange { .. })
        ));
        assert!(matches!(
            Slider::new(Orientation::Horizontal, (0, 0), 100, 10, 1.0, 1.0, 1.0, style),
            Err(WidgetError::EmptyRange { .. })
        ));
        assert!(matches!(
            Slider::new(Orientation::Vertical, (0, 0), 0, 10, 0.0, 1.0, 0.5, style),
            Err(WidgetError::NonPositiveLength(0))
        ));
        assert!(matches!(
            Slider::new(Orientation::Vertical, (0, 0), 10, -1, 0.0, 1.0, 0.5, style),
            Err(WidgetError::Shape(_))
        ));
    }

    #[test]
    fn test_initial_knob_position() {
        let slider = horizontal(25.0);
        assert_eq!(slider.knob().center(), GridPoint::new(50, 50));
        assert_eq!(horizontal(0.0).knob().center(), GridPoint::new(0, 50));
        assert_eq!(horizontal(100.0).knob().center(), GridPoint::new(200, 50));
    }

    #[test]
    fn test_drag_updates_value_once_per_change() {
        let (values, mut slider) = watch(horizontal(25.0));
        let mut list = DisplayList::new();

        slider.update(&pressed(50.0, 50.0), &mut list);
        assert!(values.borrow().is_empty());

        slider.update(&pressed(58.4, 53.0), &mut list);
        assert_eq!(slider.knob().center(), GridPoint::new(58, 50));
        assert!((slider.value() - 29.0).abs() < 1e-9);

        slider.update(&pressed(58.4, 53.0), &mut list);
        slider.update(&pressed(66.0, 50.0), &mut list);
        assert_eq!(*values.borrow(), vec![29.0, 33.0]);
    }

    #[test]
    fn test_drag_clamps_to_track() {
        let (values, mut slider) = watch(horizontal(95.0));
        let mut list = DisplayList::new();
        slider.update(&pressed(198.0, 50.0), &mut list);
        slider.update(&pressed(205.0, 50.0), &mut list);
        assert_eq!(slider.knob().center(), GridPoint::new(200, 50));
        assert!((slider.value() - 100.0).abs() < 1e-9);
        assert_eq!(values.borrow().last().copied(), Some(100.0));
    }

    #[test]
    fn test_odd_length_reaches_both_ends() {
        let odd = |start| {
            Slider::new(Orientation::Horizontal, (100, 50), 201, 10, 0.0, 100.0, start, ShapeStyle::default())
                .unwrap()
        };
        let (values, mut slider) = watch(odd(100.0));
        assert_eq!(slider.knob().center(), GridPoint::new(201, 50));

        let mut list = DisplayList::new();
        slider.update(&pressed(201.0, 50.0), &mut list);
        slider.update(&pressed(206.0, 50.0), &mut list);
        assert_eq!(slider.knob().center(), GridPoint::new(201, 50));
        assert!((slider.value() - 100.0).abs() < 1e-9);
        assert!(values.borrow().is_empty());

        let mut slider = odd(0.0);
        slider.update(&pressed(0.0, 50.0), &mut list);
        slider.update(&pressed(-5.0, 50.0), &mut list);
        assert_eq!(slider.knob().center(), GridPoint::new(0, 50));
        assert!(slider.value().abs() < 1e-9);
    }

    #[test]
    fn test_release_stops_drag() {
        let mut slider = horizontal(25.0);
        let mut list = DisplayList::new();
        slider.update(&PointerSample::new(Point::new(55.0, 50.0), false), &mut list);
        assert!((slider.value() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_vertical_has_max_at_top() {
        let mut slider = Slider::new(
            Orientation::Vertical,
            (50, 100),
            200,
            10,
            0.0,
            100.0,
            100.0,
            ShapeStyle::default(),
        )
        .unwrap();
        assert_eq!(slider.knob().center(), GridPoint::new(50, 0));

        let mut list = DisplayList::new();
        slider.update(&pressed(50.0, 5.0), &mut list);
        assert!((slider.value() - 97.5).abs() < 1e-9);

        slider.set_value(0.0).unwrap();
        assert_eq!(slider.knob().center(), GridPoint::new(50, 200));
    }

    #[test]
    fn test_handler_gets_slider() {
        let seen = Rc::new(RefCell::new(None));
        let out = seen.clone();
        let mut slider = horizontal(0.0).with_on_value_changed(Handler::with_source(
            move |value, slider: &Slider| *out.borrow_mut() = Some((value, slider.max())),
        ));
        let mut list = DisplayList::new();
        slider.update(&pressed(4.0, 50.0), &mut list);
        assert_eq!(*seen.borrow(), Some((2.0, 100.0)));
    }

    #[test]
    fn test_custom_knob_keeps_handlers() {
        let clicks = Rc::new(RefCell::new(0));
        let counter = clicks.clone();
        let knob = Button::new(Rectangle::new((0, 0), 10, 20).unwrap(), ShapeStyle::default())
            .with_on_click(Handler::bare(move || *counter.borrow_mut() += 1));
        let mut slider = horizontal(50.0).with_knob(knob);
        assert_eq!(slider.knob().center(), GridPoint::new(100, 50));
        assert_eq!(slider.knob().trigger_mode(), TriggerMode::Continuous);

        let mut list = DisplayList::new();
        slider.update(&pressed(100.0, 50.0), &mut list);
        slider.update(&pressed(102.0, 50.0), &mut list);
        assert_eq!(*clicks.borrow(), 2);
    }

    #[test]
    fn test_set_value_validates() {
        let mut slider = horizontal(0.0);
        assert!(slider.set_value(150.0).is_err());
        slider.set_value(75.0).unwrap();
        assert_eq!(slider.knob().center(), GridPoint::new(150, 50));
    }

    #[test]
    fn test_draws_track_then_knob() {
        let slider = horizontal(0.0);
        let mut list = DisplayList::new();
        slider.draw(&mut list);
        let fills: Vec<Rgba8> = list.fills().collect();
        assert_eq!(fills, vec![Rgba8::rgb(80, 80, 80), Rgba8::WHITE]);
        assert!(matches!(list.commands()[0], DrawCommand::Fill { .. }));
    }
}
