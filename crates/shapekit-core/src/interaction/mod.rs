//! Per-widget interaction state.

mod gesture;
mod state;

pub use gesture::{Gesture, GestureState, TriggerMode};
pub use state::{Interaction, InteractionState};
