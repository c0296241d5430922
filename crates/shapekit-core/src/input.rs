//! Input state management for pointer and keyboard events.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer event type for unified mouse/touch handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: MouseButton,
    },
    Up {
        position: Point,
        button: MouseButton,
    },
    Move {
        position: Point,
    },
}

/// Text-editing key input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyInput {
    /// Characters produced by a key press.
    Text(String),
    /// Delete the last character.
    Backspace,
}

/// What widgets see of the pointer on one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    pub position: Point,
    /// Primary button is held.
    pub primary_pressed: bool,
}

impl PointerSample {
    pub fn new(position: Point, primary_pressed: bool) -> Self {
        Self {
            position,
            primary_pressed,
        }
    }
}

/// Tracks the current input state across frames.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current pointer position in window coordinates.
    pub pointer_position: Point,
    pressed_buttons: HashSet<MouseButton>,
    just_pressed_buttons: HashSet<MouseButton>,
    just_released_buttons: HashSet<MouseButton>,
    /// Key input received this frame, in arrival order.
    keys: Vec<KeyInput>,
}

impl InputState {
    /// Create a new input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Call at the start of each frame to reset per-frame state.
    pub fn begin_frame(&mut self) {
        self.just_pressed_buttons.clear();
        self.just_released_buttons.clear();
        self.keys.clear();
    }

    /// Process a pointer event.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position, button } => {
                self.pointer_position = position;
                if self.pressed_buttons.insert(button) {
                    self.just_pressed_buttons.insert(button);
                }
            }
            PointerEvent::Up { position, button } => {
                self.pointer_position = position;
                if self.pressed_buttons.remove(&button) {
                    self.just_released_buttons.insert(button);
                }
            }
            PointerEvent::Move { position } => {
                self.pointer_position = position;
            }
        }
    }

    /// Queue a key input for this frame.
    pub fn handle_key_event(&mut self, key: KeyInput) {
        // Empty text comes from dead keys and IME composition.
        if matches!(&key, KeyInput::Text(text) if text.is_empty()) {
            return;
        }
        self.keys.push(key);
    }

    /// Check if a button is currently pressed.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }

    /// Check if a button was just pressed this frame.
    pub fn is_button_just_pressed(&self, button: MouseButton) -> bool {
        self.just_pressed_buttons.contains(&button)
    }

    /// Check if a button was just released this frame.
    pub fn is_button_just_released(&self, button: MouseButton) -> bool {
        self.just_released_buttons.contains(&button)
    }

    /// Snapshot of the pointer for widget updates.
    pub fn pointer_sample(&self) -> PointerSample {
        PointerSample {
            position: self.pointer_position,
            primary_pressed: self.is_button_pressed(MouseButton::Left),
        }
    }

    /// Key input received this frame.
    pub fn keys(&self) -> &[KeyInput] {
        &self.keys
    }
}
