//! Click and hover state of one widget.

use super::{Gesture, TriggerMode};

/// What a widget reacts to on one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interaction {
    Clicked,
    Hovered,
    #[default]
    Normal,
}

/// Paired click and hover gestures sharing one trigger policy.
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    click: Gesture,
    hover: Gesture,
    /// Click gesture fired on the last poll.
    pub clicked: bool,
    /// Hover gesture fired on the last poll.
    pub hovered: bool,
}

impl InteractionState {
    pub fn new(mode: TriggerMode) -> Self {
        Self {
            click: Gesture::new(mode),
            hover: Gesture::new(mode),
            clicked: false,
            hovered: false,
        }
    }

    pub fn mode(&self) -> TriggerMode {
        self.click.mode()
    }

    pub fn set_mode(&mut self, mode: TriggerMode) {
        self.click.set_mode(mode);
        self.hover.set_mode(mode);
    }

    /// Whether the click condition held on the last poll.
    pub fn is_pressed(&self) -> bool {
        self.click.is_active()
    }

    /// Whether the pointer was over the widget on the last poll.
    pub fn is_over(&self) -> bool {
        self.hover.is_active()
    }

    /// Advance both gestures. Click takes priority over hover.
    pub fn poll(&mut self, over: bool, pressed: bool) -> Interaction {
        self.clicked = self.click.update(over && pressed);
        self.hovered = self.hover.update(over);
        if self.clicked {
            Interaction::Clicked
        } else if self.hovered {
            Interaction::Hovered
        } else {
            Interaction::Normal
        }
    }

    pub fn reset(&mut self) {
        self.click.reset();
        self.hover.reset();
        self.clicked = false;
        self.hovered = false;
    }
}
