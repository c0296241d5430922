//! Rectangle shape.

use super::{GridPoint, ShapeError, ShapeTrait, check_dimension};
use kurbo::{BezPath, Point, Rect, RoundedRect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle positioned by its center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Center point.
    pub center: GridPoint,
    width: i32,
    height: i32,
    /// Corner radius for drawing. Hit testing always uses square corners.
    #[serde(default)]
    pub corner_radius: Option<f64>,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(center: impl Into<GridPoint>, width: i32, height: i32) -> Result<Self, ShapeError> {
        Ok(Self {
            center: center.into(),
            width: check_dimension("width", width)?,
            height: check_dimension("height", height)?,
            corner_radius: None,
        })
    }

    /// Round the drawn corners.
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn set_size(&mut self, width: i32, height: i32) -> Result<(), ShapeError> {
        self.width = check_dimension("width", width)?;
        self.height = check_dimension("height", height)?;
        Ok(())
    }

    /// Inclusive hit-test extents `(min_x, max_x, min_y, max_y)`.
    ///
    /// Half extents use floor division, so for odd sizes the hit area is one
    /// pixel narrower than the drawn area on the far side.
    pub fn extents(&self) -> (i32, i32, i32, i32) {
        let half_w = self.width.div_euclid(2);
        let half_h = self.height.div_euclid(2);
        (
            self.center.x.saturating_sub(half_w),
            self.center.x.saturating_add(half_w),
            self.center.y.saturating_sub(half_h),
            self.center.y.saturating_add(half_h),
        )
    }

    /// Top-left corner of the drawn area.
    pub fn origin(&self) -> GridPoint {
        GridPoint::new(
            self.center.x.saturating_sub(self.width.div_euclid(2)),
            self.center.y.saturating_sub(self.height.div_euclid(2)),
        )
    }
}

impl ShapeTrait for Rectangle {
    fn contains(&self, point: Point) -> bool {
        let (min_x, max_x, min_y, max_y) = self.extents();
        min_x as f64 <= point.x
            && point.x <= max_x as f64
            && min_y as f64 <= point.y
            && point.y <= max_y as f64
    }

    fn center(&self) -> GridPoint {
        self.center
    }

    fn move_to(&mut self, center: GridPoint) {
        self.center = center;
    }

    fn bounds(&self) -> Rect {
        let origin = self.origin();
        Rect::new(
            origin.x as f64,
            origin.y as f64,
            (origin.x + self.width) as f64,
            (origin.y + self.height) as f64,
        )
    }

    fn to_path(&self) -> BezPath {
        match self.corner_radius {
            Some(radius) if radius > 0.0 => {
                RoundedRect::from_rect(self.bounds(), radius).to_path(0.1)
            }
            _ => self.bounds().to_path(0.1),
        }
    }
}
