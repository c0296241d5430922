//! Clickable shape.

use super::{WidgetId, new_id};
use crate::dispatch::Handler;
use crate::input::PointerSample;
use crate::interaction::{Interaction, InteractionState, TriggerMode};
use crate::paint::Painter;
use crate::shapes::{GridPoint, Shape};
use crate::style::ShapeStyle;
use kurbo::Point;

/// Handler for button events. The value is the pointer sample of the tick.
pub type ButtonHandler = Handler<PointerSample, Button>;

/// A shape that reacts to clicks and hovering.
#[derive(Debug)]
pub struct Button {
    id: WidgetId,
    pub shape: Shape,
    pub style: ShapeStyle,
    /// Image drawn over the shape's bounds in place of the fill.
    pub image: Option<String>,
    pub interaction: InteractionState,
    pub on_click: Option<ButtonHandler>,
    pub on_hover: Option<ButtonHandler>,
    pub on_normal: Option<ButtonHandler>,
}

impl Button {
    pub fn new(shape: impl Into<Shape>, style: ShapeStyle) -> Self {
        Self {
            id: new_id(),
            shape: shape.into(),
            style,
            image: None,
            interaction: InteractionState::default(),
            on_click: None,
            on_hover: None,
            on_normal: None,
        }
    }

    /// Button showing the image at `source` scaled to the shape's bounds.
    pub fn with_image(mut self, source: impl Into<String>) -> Self {
        self.image = Some(source.into());
        self
    }

    pub fn with_trigger_mode(mut self, mode: TriggerMode) -> Self {
        self.interaction.set_mode(mode);
        self
    }

    pub fn with_on_click(mut self, handler: ButtonHandler) -> Self {
        self.on_click = Some(handler);
        self
    }

    pub fn with_on_hover(mut self, handler: ButtonHandler) -> Self {
        self.on_hover = Some(handler);
        self
    }

    pub fn with_on_normal(mut self, handler: ButtonHandler) -> Self {
        self.on_normal = Some(handler);
        self
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn trigger_mode(&self) -> TriggerMode {
        self.interaction.mode()
    }

    pub fn set_trigger_mode(&mut self, mode: TriggerMode) {
        self.interaction.set_mode(mode);
    }

    pub fn contains(&self, point: Point) -> bool {
        self.shape.contains(point)
    }

    pub fn center(&self) -> GridPoint {
        self.shape.center()
    }

    /// Run the click and hover state machines for this tick.
    pub fn poll(&mut self, pointer: &PointerSample) -> Interaction {
        let over = self.shape.contains(pointer.position);
        let interaction = self.interaction.poll(over, pointer.primary_pressed);
        if interaction != Interaction::Normal {
            log::trace!("button {} {:?} at {:?}", self.id, interaction, pointer.position);
        }
        interaction
    }

    pub fn draw(&self, painter: &mut dyn Painter) {
        match &self.image {
            Some(source) => {
                painter.image(source, self.shape.bounds());
                if let Some(border) = self.style.border {
                    painter.stroke(self.shape.to_path(), border.color, border.width);
                }
            }
            None => painter.shape(&self.shape, &self.style),
        }
    }

    /// Run the handler selected by `interaction`.
    pub fn dispatch(&mut self, interaction: Interaction, pointer: &PointerSample) {
        if let Some(mut handler) = self.handler_slot(interaction).take() {
            handler.invoke(*pointer, &*self);
            self.handler_slot(interaction).get_or_insert(handler);
        }
    }

    /// Poll, draw and dispatch in one go.
    pub fn update(&mut self, pointer: &PointerSample, painter: &mut dyn Painter) -> Interaction {
        let interaction = self.poll(pointer);
        self.draw(painter);
        self.dispatch(interaction, pointer);
        interaction
    }

    fn handler_slot(&mut self, interaction: Interaction) -> &mut Option<ButtonHandler> {
        match interaction {
            Interaction::Clicked => &mut self.on_click,
            Interaction::Hovered => &mut self.on_hover,
            Interaction::Normal => &mut self.on_normal,
        }
    }
}
