//! Backend-neutral drawing.
//!
//! Widgets draw through [`Painter`]. The usual painter is a [`DisplayList`],
//! which a renderer replays onto its own surface.

mod display_list;

pub use display_list::{DisplayList, DrawCommand};

use crate::shapes::Shape;
use crate::style::{FontSpec, Rgba8, ShapeStyle, TextStyle};
use kurbo::{BezPath, Point, Rect, Size};

/// Width per character, as a fraction of the font size.
const APPROX_CHAR_WIDTH: f64 = 0.6;
/// Line height, as a fraction of the font size.
const APPROX_LINE_HEIGHT: f64 = 1.2;

/// Text measurement service.
pub trait TextMetrics {
    fn measure(&self, text: &str, font: &FontSpec) -> Size;
}

/// Fixed-pitch estimate used when no real font backend is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximateMetrics;

impl TextMetrics for ApproximateMetrics {
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        let chars = text.chars().count() as f64;
        Size::new(
            chars * font.size * APPROX_CHAR_WIDTH,
            font.size * APPROX_LINE_HEIGHT,
        )
    }
}

/// Drawing surface used by widgets.
pub trait Painter {
    fn fill(&mut self, path: BezPath, color: Rgba8);

    fn stroke(&mut self, path: BezPath, color: Rgba8, width: f64);

    /// Draw `text` centred on `center`.
    fn text(&mut self, text: &str, style: &TextStyle, center: Point);

    /// Draw the image at `source` scaled into `rect`.
    fn image(&mut self, source: &str, rect: Rect);

    fn measure_text(&self, text: &str, font: &FontSpec) -> Size;

    /// Fill a shape and stroke its border, if any.
    fn shape(&mut self, shape: &Shape, style: &ShapeStyle) {
        let path = shape.to_path();
        if let Some(border) = style.border {
            self.fill(path.clone(), style.fill);
            self.stroke(path, border.color, border.width);
        } else {
            self.fill(path, style.fill);
        }
    }
}
