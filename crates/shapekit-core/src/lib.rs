//! shapekit core library
//!
//! Platform-agnostic shapes, hit testing, gesture state and immediate-mode
//! widgets. Nothing in here talks to a window or a GPU: widgets draw into a
//! [`paint::Painter`] and read pointer state from [`input::InputState`].

pub mod dispatch;
pub mod input;
pub mod interaction;
pub mod paint;
pub mod presets;
pub mod shapes;
pub mod style;
pub mod widgets;

pub use dispatch::{Args, DispatchError, Handler, dispatch};
pub use input::{InputState, KeyInput, PointerSample};
pub use interaction::{Gesture, Interaction, InteractionState, TriggerMode};
pub use paint::{DisplayList, DrawCommand, Painter, TextMetrics};
pub use shapes::{Circle, GridPoint, Polygon, Rectangle, Shape, ShapeError, ShapeSize, ShapeTrait};
pub use style::{Border, FontSpec, Rgba8, ShapeStyle, TextStyle};
pub use widgets::{WidgetError, WidgetId, WidgetResult};
