//! Hit-testable outlines for widgets.

mod circle;
mod polygon;
mod rectangle;

pub use circle::Circle;
pub use polygon::{HalfPlane, Polygon, VERTICAL_SLOPE};
pub use rectangle::Rectangle;

use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Integer pixel coordinate.
///
/// Shape centers and polygon vertices live on the pixel grid so that the
/// floor divisions used for extents and centroids are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Snap a pointer position down onto the grid.
    pub fn floor(point: Point) -> Self {
        Self::new(point.x.floor() as i32, point.y.floor() as i32)
    }

    pub fn to_point(self) -> Point {
        Point::new(self.x as f64, self.y as f64)
    }

    /// Offset by whole pixels, saturating at the edges of the `i32` grid.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<GridPoint> for Point {
    fn from(p: GridPoint) -> Self {
        p.to_point()
    }
}

/// Discriminant of [`Shape`], used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Polygon,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Polygon => "polygon",
        };
        f.write_str(name)
    }
}

/// Shape construction and mutation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("{what} must not be negative, got {value}")]
    NegativeDimension { what: &'static str, value: i32 },
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("polygon edge ending at vertex {index} has zero length")]
    ZeroLengthEdge { index: usize },
    #[error("polygon vertices enclose no area")]
    ZeroArea,
    #[error("a {shape} cannot take a {size} size")]
    UnsupportedResize { shape: ShapeKind, size: &'static str },
}

/// A new size for [`Shape::resize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeSize {
    /// Width and height of a rectangle.
    Extent { width: i32, height: i32 },
    /// Radius of a circle.
    Radius(i32),
}

impl ShapeSize {
    fn name(&self) -> &'static str {
        match self {
            ShapeSize::Extent { .. } => "width/height",
            ShapeSize::Radius(_) => "radius",
        }
    }
}

pub(crate) fn check_dimension(what: &'static str, value: i32) -> Result<i32, ShapeError> {
    if value < 0 {
        Err(ShapeError::NegativeDimension { what, value })
    } else {
        Ok(value)
    }
}

/// Common behaviour of every outline.
pub trait ShapeTrait {
    /// Whether `point` is inside the shape.
    fn contains(&self, point: Point) -> bool;

    /// The anchor point the shape is positioned by.
    fn center(&self) -> GridPoint;

    /// Move the shape so that its anchor sits at `center`.
    fn move_to(&mut self, center: GridPoint);

    /// Drawn extent of the shape.
    fn bounds(&self) -> Rect;

    /// Outline for rendering.
    fn to_path(&self) -> BezPath;
}

/// Any of the supported outlines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
    Polygon(Polygon),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Polygon(_) => ShapeKind::Polygon,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        match self {
            Shape::Rectangle(s) => s.contains(point),
            Shape::Circle(s) => s.contains(point),
            Shape::Polygon(s) => s.contains(point),
        }
    }

    pub fn center(&self) -> GridPoint {
        match self {
            Shape::Rectangle(s) => s.center(),
            Shape::Circle(s) => s.center(),
            Shape::Polygon(s) => s.center(),
        }
    }

    pub fn move_to(&mut self, center: GridPoint) {
        match self {
            Shape::Rectangle(s) => s.move_to(center),
            Shape::Circle(s) => s.move_to(center),
            Shape::Polygon(s) => s.move_to(center),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Rectangle(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
            Shape::Polygon(s) => s.bounds(),
        }
    }

    pub fn to_path(&self) -> BezPath {
        match self {
            Shape::Rectangle(s) => s.to_path(),
            Shape::Circle(s) => s.to_path(),
            Shape::Polygon(s) => s.to_path(),
        }
    }

    /// Horizontal extent, used to fit text inside the shape.
    pub fn width(&self) -> f64 {
        self.bounds().width()
    }

    /// Vertical extent, used to stack dropdown options.
    pub fn height(&self) -> f64 {
        self.bounds().height()
    }

    /// Change the size of a rectangle or circle in place.
    ///
    /// Polygons have no single size and always refuse.
    pub fn resize(&mut self, size: ShapeSize) -> Result<(), ShapeError> {
        match (self, size) {
            (Shape::Rectangle(r), ShapeSize::Extent { width, height }) => r.set_size(width, height),
            (Shape::Circle(c), ShapeSize::Radius(radius)) => c.set_radius(radius),
            (shape, size) => Err(ShapeError::UnsupportedResize {
                shape: shape.kind(),
                size: size.name(),
            }),
        }
    }

    /// Whether `size` could be applied by [`Shape::resize`].
    pub fn accepts(&self, size: ShapeSize) -> bool {
        matches!(
            (self, size),
            (Shape::Rectangle(_), ShapeSize::Extent { .. }) | (Shape::Circle(_), ShapeSize::Radius(_))
        )
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Shape::Rectangle(r)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Self {
        Shape::Polygon(p)
    }
}
