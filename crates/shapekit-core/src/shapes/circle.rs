//! Circle shape.

use super::{GridPoint, ShapeError, ShapeTrait, check_dimension};
use kurbo::{BezPath, Circle as KurboCircle, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// A circle positioned by its center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center point.
    pub center: GridPoint,
    radius: i32,
}

impl Circle {
    /// Create a new circle.
    pub fn new(center: impl Into<GridPoint>, radius: i32) -> Result<Self, ShapeError> {
        Ok(Self {
            center: center.into(),
            radius: check_dimension("radius", radius)?,
        })
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: i32) -> Result<(), ShapeError> {
        self.radius = check_dimension("radius", radius)?;
        Ok(())
    }

    fn as_kurbo(&self) -> KurboCircle {
        KurboCircle::new(self.center.to_point(), self.radius as f64)
    }
}

impl ShapeTrait for Circle {
    /// Strictly inside: a point exactly on the rim is a miss.
    fn contains(&self, point: Point) -> bool {
        let dx = point.x - self.center.x as f64;
        let dy = point.y - self.center.y as f64;
        let r = self.radius as f64;
        dx * dx + dy * dy < r * r
    }

    fn center(&self) -> GridPoint {
        self.center
    }

    fn move_to(&mut self, center: GridPoint) {
        self.center = center;
    }

    fn bounds(&self) -> Rect {
        let r = self.radius as f64;
        let c = self.center.to_point();
        Rect::new(c.x - r, c.y - r, c.x + r, c.y + r)
    }

    fn to_path(&self) -> BezPath {
        self.as_kurbo().to_path(0.1)
    }
}
