//! Recorded draw commands.

use super::{ApproximateMetrics, Painter, TextMetrics};
use crate::style::{FontSpec, Rgba8, TextStyle};
use kurbo::{BezPath, Point, Rect, Size};
use std::fmt;

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill {
        path: BezPath,
        color: Rgba8,
    },
    Stroke {
        path: BezPath,
        color: Rgba8,
        width: f64,
    },
    Text {
        text: String,
        style: TextStyle,
        center: Point,
    },
    Image {
        source: String,
        rect: Rect,
    },
}

/// A [`Painter`] that records commands in draw order.
pub struct DisplayList {
    commands: Vec<DrawCommand>,
    metrics: Box<dyn TextMetrics>,
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DisplayList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayList")
            .field("commands", &self.commands)
            .finish_non_exhaustive()
    }
}

impl DisplayList {
    /// Display list measuring text with [`ApproximateMetrics`].
    pub fn new() -> Self {
        Self::with_metrics(ApproximateMetrics)
    }

    pub fn with_metrics(metrics: impl TextMetrics + 'static) -> Self {
        Self {
            commands: Vec::new(),
            metrics: Box::new(metrics),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop recorded commands, keeping the metrics, ready for the next frame.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Text of every text command, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Colour of every fill command, in order.
    pub fn fills(&self) -> impl Iterator<Item = Rgba8> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Fill { color, .. } => Some(*color),
            _ => None,
        })
    }

    /// Source of every image command, in order.
    pub fn images(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Image { source, .. } => Some(source.as_str()),
            _ => None,
        })
    }
}

impl Painter for DisplayList {
    fn fill(&mut self, path: BezPath, color: Rgba8) {
        self.commands.push(DrawCommand::Fill { path, color });
    }

    fn stroke(&mut self, path: BezPath, color: Rgba8, width: f64) {
        self.commands.push(DrawCommand::Stroke { path, color, width });
    }

    fn text(&mut self, text: &str, style: &TextStyle, center: Point) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            style: style.clone(),
            center,
        });
    }

    fn image(&mut self, source: &str, rect: Rect) {
        self.commands.push(DrawCommand::Image {
            source: source.to_string(),
            rect,
        });
    }

    fn measure_text(&self, text: &str, font: &FontSpec) -> Size {
        self.metrics.measure(text, font)
    }
}
