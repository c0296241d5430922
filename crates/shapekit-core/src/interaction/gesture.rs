//! Edge detection for a single boolean gesture.

use serde::{Deserialize, Serialize};

/// When a gesture counts as firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TriggerMode {
    /// Fire only on the tick the condition becomes true.
    #[default]
    EdgeTriggered,
    /// Fire on every tick the condition holds.
    Continuous,
}

/// Whether the raw condition held on the previous tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Active,
}

/// A click or hover detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gesture {
    state: GestureState,
    mode: TriggerMode,
}

impl Gesture {
    pub fn new(mode: TriggerMode) -> Self {
        Self {
            state: GestureState::Idle,
            mode,
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn mode(&self) -> TriggerMode {
        self.mode
    }

    /// Change the policy. The current state is kept, so an edge-triggered
    /// gesture switched on while already active stays suppressed.
    pub fn set_mode(&mut self, mode: TriggerMode) {
        self.mode = mode;
    }

    pub fn is_active(&self) -> bool {
        self.state == GestureState::Active
    }

    /// Feed this tick's raw condition and report whether the gesture fires.
    pub fn update(&mut self, raw: bool) -> bool {
        let was_active = self.is_active();
        self.state = if raw {
            GestureState::Active
        } else {
            GestureState::Idle
        };
        match self.mode {
            TriggerMode::Continuous => raw,
            TriggerMode::EdgeTriggered => raw && !was_active,
        }
    }

    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
    }
}
