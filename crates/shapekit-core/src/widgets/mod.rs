//! Immediate-mode widgets.
//!
//! Every widget is updated once per frame with the current pointer sample and
//! a painter. An update polls the pointer against the widget's shape, draws,
//! then runs whichever handlers the interaction selected.

mod button;
mod dropdown;
mod label;
mod slider;
mod text_box;
mod text_input;
mod toggle;

pub use button::{Button, ButtonHandler};
pub use dropdown::Dropdown;
pub use label::{Label, TextButton};
pub use slider::{Orientation, Slider};
pub use text_box::TextBox;
pub use text_input::TextInput;
pub use toggle::{Caption, TickBoxLayout, TickBoxToggle, TickMark, Toggle};

use crate::shapes::ShapeError;
use thiserror::Error;
use uuid::Uuid;

/// Identifies a widget in log output.
pub type WidgetId = Uuid;

pub(crate) fn new_id() -> WidgetId {
    Uuid::new_v4()
}

/// Widget construction errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WidgetError {
    #[error("start value {value} is outside {min}..={max}")]
    StartOutOfRange { value: f64, min: f64, max: f64 },
    #[error("empty value range {min}..={max}")]
    EmptyRange { min: f64, max: f64 },
    #[error("slider length must be positive, got {0}")]
    NonPositiveLength(i32),
    #[error("dropdown needs at least one option")]
    NoOptions,
    #[error("{buttons} option buttons but {names} option names")]
    OptionCountMismatch { buttons: usize, names: usize },
    #[error("initial option {index} is out of range for {len} options")]
    InitialOptionOutOfRange { index: usize, len: usize },
    #[error("Shape error: {0}")]
    Shape(#[from] ShapeError),
}

/// Result type for widget construction.
pub type WidgetResult<T> = Result<T, WidgetError>;
