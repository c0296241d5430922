//! Ready-made widget behaviours built by composition.

mod highlight;
mod reactive;
mod readout;

pub use highlight::HighlightInput;
pub use reactive::{ReactiveButton, StateColours, StateImages, StateSizes};
pub use readout::{SliderReadout, ValueFormat};
