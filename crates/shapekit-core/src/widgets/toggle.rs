//! On/off toggles and tick boxes.

use super::{Button, Label, WidgetId, WidgetResult, new_id};
use crate::dispatch::Handler;
use crate::input::PointerSample;
use crate::interaction::{Interaction, TriggerMode};
use crate::paint::Painter;
use crate::shapes::{GridPoint, Rectangle, Shape};
use crate::style::{Rgba8, ShapeStyle};
use kurbo::{BezPath, Point};
use serde::{Deserialize, Serialize};

/// Check mark drawn inside a selected toggle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickMark {
    pub color: Rgba8,
    pub thickness: f64,
}

impl TickMark {
    pub fn new(color: impl Into<Rgba8>, thickness: f64) -> Self {
        Self {
            color: color.into(),
            thickness,
        }
    }
}

/// Text drawn at a fixed position next to a widget.
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub label: Label,
    pub center: GridPoint,
}

/// A button that flips between selected and deselected on each click.
#[derive(Debug)]
pub struct Toggle {
    id: WidgetId,
    pub button: Button,
    selected: bool,
    prev_selected: bool,
    pub tick: Option<TickMark>,
    pub caption: Option<Caption>,
    pub on_value_changed: Option<Handler<bool, Toggle>>,
}

impl Toggle {
    /// Wrap `button`. The button is switched to edge-triggered clicks.
    pub fn new(mut button: Button, selected: bool) -> Self {
        button.set_trigger_mode(TriggerMode::EdgeTriggered);
        Self {
            id: new_id(),
            button,
            selected,
            prev_selected: selected,
            tick: None,
            caption: None,
            on_value_changed: None,
        }
    }

    /// Square tick box of side `side` centred on `center`.
    pub fn tick_box(
        center: impl Into<GridPoint>,
        side: i32,
        style: ShapeStyle,
        tick: TickMark,
        selected: bool,
    ) -> WidgetResult<Self> {
        let button = Button::new(Rectangle::new(center, side, side)?, style);
        Ok(Self::new(button, selected).with_tick(tick))
    }

    pub fn with_tick(mut self, tick: TickMark) -> Self {
        self.tick = Some(tick);
        self
    }

    pub fn with_caption(mut self, label: Label, center: impl Into<GridPoint>) -> Self {
        self.caption = Some(Caption {
            label,
            center: center.into(),
        });
        self
    }

    pub fn with_on_value_changed(mut self, handler: Handler<bool, Toggle>) -> Self {
        self.on_value_changed = Some(handler);
        self
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Change the state without notifying the value handler.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
        self.prev_selected = selected;
    }

    pub fn poll(&mut self, pointer: &PointerSample) -> Interaction {
        let interaction = self.button.poll(pointer);
        if interaction == Interaction::Clicked {
            self.selected = !self.selected;
        }
        interaction
    }

    pub fn draw(&self, painter: &mut dyn Painter) {
        self.button.draw(painter);
        if self.selected {
            if let Some(tick) = self.tick {
                painter.stroke(self.tick_path(), tick.color, tick.thickness);
            }
        }
        if let Some(caption) = &self.caption {
            caption.label.draw(painter, caption.center.to_point());
        }
    }

    pub fn dispatch(&mut self, interaction: Interaction, pointer: &PointerSample) {
        self.button.dispatch(interaction, pointer);
        if self.selected != self.prev_selected {
            log::debug!("toggle {} selected = {}", self.id, self.selected);
            self.prev_selected = self.selected;
            if let Some(mut handler) = self.on_value_changed.take() {
                handler.invoke(self.selected, &*self);
                self.on_value_changed.get_or_insert(handler);
            }
        }
    }

    pub fn update(&mut self, pointer: &PointerSample, painter: &mut dyn Painter) -> Interaction {
        let interaction = self.poll(pointer);
        self.draw(painter);
        self.dispatch(interaction, pointer);
        interaction
    }

    /// Two-segment check mark scaled to the button's bounds.
    pub fn tick_path(&self) -> BezPath {
        let bounds = self.button.shape.bounds();
        let (w, h) = (bounds.width(), bounds.height());
        let at = |fx: f64, fy: f64| Point::new(bounds.x0 + (w * fx).trunc(), bounds.y0 + (h * fy).trunc());

        let mut path = BezPath::new();
        path.move_to(at(0.2, 0.6));
        path.line_to(at(0.4, 0.9));
        path.line_to(at(0.9, 0.2));
        path
    }
}

/// Placement of the tick box inside a [`TickBoxToggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickBoxLayout {
    /// Gap between the outer box edge and the tick box.
    pub dist_from_edge: i32,
    /// How much shorter the tick box is than the outer box.
    pub height_offset: i32,
    /// Put the caption to the right of the tick box.
    pub caption_right: bool,
}

impl Default for TickBoxLayout {
    fn default() -> Self {
        Self {
            dist_from_edge: 5,
            height_offset: 10,
            caption_right: true,
        }
    }
}

/// Outer box holding a tick box and a caption.
#[derive(Debug)]
pub struct TickBoxToggle {
    pub outer: Shape,
    pub outer_style: ShapeStyle,
    pub toggle: Toggle,
}

impl TickBoxToggle {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        center: impl Into<GridPoint>,
        width: i32,
        height: i32,
        outer_style: ShapeStyle,
        box_style: ShapeStyle,
        tick: TickMark,
        caption: Label,
        layout: TickBoxLayout,
        selected: bool,
    ) -> WidgetResult<Self> {
        let center = center.into();
        let outer = Rectangle::new(center, width, height)?;

        let side = height - layout.height_offset;
        let half_width = width.div_euclid(2);
        let half_side = side.div_euclid(2);
        let (box_x, outer_edge, box_edge) = if layout.caption_right {
            let box_x = center.x - half_width + half_side + layout.dist_from_edge;
            (box_x, center.x + half_width, box_x + half_side)
        } else {
            let box_x = center.x + half_width - half_side - layout.dist_from_edge;
            (box_x, center.x - half_width, box_x - half_side)
        };
        let caption_center = GridPoint::new((outer_edge + box_edge).div_euclid(2), center.y);

        let toggle = Toggle::tick_box((box_x, center.y), side, box_style, tick, selected)?
            .with_caption(caption, caption_center);

        Ok(Self {
            outer: outer.into(),
            outer_style,
            toggle,
        })
    }

    /// Round the corners of the outer and inner boxes.
    pub fn with_corner_radii(mut self, outer: f64, inner: f64) -> Self {
        if let Shape::Rectangle(r) = &mut self.outer {
            r.corner_radius = Some(outer);
        }
        if let Shape::Rectangle(r) = &mut self.toggle.button.shape {
            r.corner_radius = Some(inner);
        }
        self
    }

    pub fn is_selected(&self) -> bool {
        self.toggle.is_selected()
    }

    pub fn draw(&self, painter: &mut dyn Painter) {
        painter.shape(&self.outer, &self.outer_style);
        self.toggle.draw(painter);
    }

    pub fn update(&mut self, pointer: &PointerSample, painter: &mut dyn Painter) -> Interaction {
        let interaction = self.toggle.poll(pointer);
        self.draw(painter);
        self.toggle.dispatch(interaction, pointer);
        interaction
    }
}
