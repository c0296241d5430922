//! Convex polygon shape.

use super::{GridPoint, ShapeError, ShapeTrait};
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// Slope substituted for vertical edges.
pub const VERTICAL_SLOPE: f64 = 1e10;

/// One polygon edge as the line `y = slope * x + intercept`, plus the side of
/// that line the centroid lies on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfPlane {
    pub slope: f64,
    pub intercept: f64,
    /// Whether the line passes above the centroid (smaller y at the centroid's x).
    pub centroid_below: bool,
}

impl HalfPlane {
    fn through(from: GridPoint, to: GridPoint, centroid: GridPoint) -> Self {
        let dx = to.x as f64 - from.x as f64;
        let dy = to.y as f64 - from.y as f64;
        let slope = if dx == 0.0 { VERTICAL_SLOPE } else { dy / dx };
        let intercept = to.y as f64 - slope * to.x as f64;
        let mut plane = Self {
            slope,
            intercept,
            centroid_below: false,
        };
        plane.centroid_below = plane.is_below(centroid.to_point());
        plane
    }

    /// Whether `point` lies strictly below the line in screen coordinates.
    pub fn is_below(&self, point: Point) -> bool {
        self.slope * point.x + self.intercept < point.y
    }

    /// Whether `point` is on the same side as the centroid.
    pub fn agrees(&self, point: Point) -> bool {
        self.is_below(point) == self.centroid_below
    }
}

/// A polygon tested by half-planes through its edges.
///
/// Containment is only meaningful for convex polygons. Concave outlines are
/// accepted but the hit area is the intersection of their edge half-planes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<GridPoint>", into = "Vec<GridPoint>")]
pub struct Polygon {
    vertices: Vec<GridPoint>,
    centroid: GridPoint,
    edges: Vec<HalfPlane>,
}

impl Polygon {
    /// Create a polygon from its vertices in drawing order.
    pub fn new<P: Into<GridPoint>>(vertices: impl IntoIterator<Item = P>) -> Result<Self, ShapeError> {
        let vertices: Vec<GridPoint> = vertices.into_iter().map(Into::into).collect();
        let n = vertices.len();
        if n < 3 {
            return Err(ShapeError::TooFewVertices(n));
        }
        for i in 0..n {
            if vertices[i] == vertices[(i + n - 1) % n] {
                return Err(ShapeError::ZeroLengthEdge { index: i });
            }
        }
        if twice_area(&vertices) == 0 {
            return Err(ShapeError::ZeroArea);
        }

        let mut polygon = Self {
            vertices,
            centroid: GridPoint::default(),
            edges: Vec::with_capacity(n),
        };
        polygon.rebuild();
        Ok(polygon)
    }

    pub fn vertices(&self) -> &[GridPoint] {
        &self.vertices
    }

    /// Vertex average, floored.
    pub fn centroid(&self) -> GridPoint {
        self.centroid
    }

    /// Half-planes in vertex order; edge `i` runs from vertex `i - 1` to `i`.
    pub fn edges(&self) -> &[HalfPlane] {
        &self.edges
    }

    fn rebuild(&mut self) {
        let n = self.vertices.len();
        let (sum_x, sum_y) = self
            .vertices
            .iter()
            .fold((0i64, 0i64), |(sx, sy), v| (sx + v.x as i64, sy + v.y as i64));
        self.centroid = GridPoint::new(
            sum_x.div_euclid(n as i64) as i32,
            sum_y.div_euclid(n as i64) as i32,
        );
        self.edges = (0..n)
            .map(|i| HalfPlane::through(self.vertices[(i + n - 1) % n], self.vertices[i], self.centroid))
            .collect();
    }
}

fn twice_area(vertices: &[GridPoint]) -> i64 {
    let n = vertices.len();
    (0..n)
        .map(|i| {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64
        })
        .sum()
}

impl ShapeTrait for Polygon {
    fn contains(&self, point: Point) -> bool {
        self.edges.iter().all(|edge| edge.agrees(point))
    }

    fn center(&self) -> GridPoint {
        self.centroid
    }

    fn move_to(&mut self, center: GridPoint) {
        let shift = |to: i32, from: i32| {
            (to as i64 - from as i64).clamp(i32::MIN as i64, i32::MAX as i64) as i32
        };
        let dx = shift(center.x, self.centroid.x);
        let dy = shift(center.y, self.centroid.y);
        for v in &mut self.vertices {
            *v = v.offset(dx, dy);
        }
        self.rebuild();
    }

    fn bounds(&self) -> Rect {
        let mut rect = Rect::from_points(self.vertices[0].to_point(), self.vertices[0].to_point());
        for v in &self.vertices[1..] {
            rect = rect.union_pt(v.to_point());
        }
        rect
    }

    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.vertices[0].to_point());
        for v in &self.vertices[1..] {
            path.line_to(v.to_point());
        }
        path.close_path();
        path
    }
}

impl TryFrom<Vec<GridPoint>> for Polygon {
    type Error = ShapeError;

    fn try_from(vertices: Vec<GridPoint>) -> Result<Self, Self::Error> {
        Polygon::new(vertices)
    }
}

impl From<Polygon> for Vec<GridPoint> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polygon {
        Polygon::new([(0, 0), (10, 0), (10, 10), (0, 10)]).unwrap()
    }

    #[test]
    fn test_centroid_is_floored_mean() {
        assert_eq!(square().centroid(), GridPoint::new(5, 5));
        let tri = Polygon::new([(0, 0), (100, 0), (50, 100)]).unwrap();
        assert_eq!(tri.centroid(), GridPoint::new(50, 33));
        let neg = Polygon::new([(-1, -1), (-2, -1), (-2, -2)]).unwrap();
        assert_eq!(neg.centroid(), GridPoint::new(-2, -2));
    }

    #[test]
    fn test_square_contains() {
        let sq = square();
        assert!(sq.contains(Point::new(5.0, 5.0)));
        assert!(sq.contains(Point::new(9.0, 5.0)));
        assert!(sq.contains(Point::new(1.0, 1.0)));
        assert!(!sq.contains(Point::new(11.0, 5.0)));
        assert!(!sq.contains(Point::new(-1.0, 5.0)));
        assert!(!sq.contains(Point::new(5.0, -1.0)));
        assert!(!sq.contains(Point::new(5.0, 11.0)));
        assert!(!sq.contains(Point::new(20.0, 20.0)));
    }

    #[test]
    fn test_vertical_edge_uses_large_slope() {
        let sq = square();
        let right = sq.edges()[2];
        assert!((right.slope - VERTICAL_SLOPE).abs() < f64::EPSILON);
        assert!(right.centroid_below);
        assert!(right.agrees(Point::new(9.0, 5.0)));
        assert!(!right.agrees(Point::new(11.0, 5.0)));
    }

    #[test]
    fn test_triangle_contains() {
        let tri = Polygon::new([(0, 0), (100, 0), (50, 100)]).unwrap();
        assert!(tri.contains(Point::new(50.0, 50.0)));
        assert!(tri.contains(Point::new(50.0, 10.0)));
        assert!(!tri.contains(Point::new(5.0, 90.0)));
        assert!(!tri.contains(Point::new(95.0, 90.0)));
        assert!(!tri.contains(Point::new(50.0, -5.0)));
    }

    #[test]
    fn test_convex_polygons_contain_centroid_and_exclude_far_points() {
        let polygons = [
            Polygon::new([(0, 0), (40, 0), (20, 30)]).unwrap(),
            Polygon::new([(100, 100), (140, 110), (150, 150), (110, 160), (90, 130)]).unwrap(),
            Polygon::new([(10, 0), (20, 5), (20, 15), (10, 20), (0, 15), (0, 5)]).unwrap(),
        ];
        let far = [
            Point::new(-1000.0, -1000.0),
            Point::new(1000.0, 0.0),
            Point::new(0.0, 1000.0),
            Point::new(1000.0, 1000.0),
        ];
        for polygon in &polygons {
            assert!(polygon.contains(polygon.centroid().to_point()), "{polygon:?}");
            for p in far {
                assert!(!polygon.contains(p), "{polygon:?} should not contain {p:?}");
            }
        }
    }

    #[test]
    fn test_move_to_translates_vertices() {
        let mut sq = square();
        sq.move_to(GridPoint::new(105, 205));
        assert_eq!(sq.centroid(), GridPoint::new(105, 205));
        assert_eq!(sq.vertices()[0], GridPoint::new(100, 200));
        assert!(sq.contains(Point::new(105.0, 205.0)));
        assert!(!sq.contains(Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_move_to_grid_edge_saturates() {
        let mut sq = square();
        sq.move_to(GridPoint::new(i32::MAX, i32::MIN));
        assert!(sq.vertices().iter().all(|v| v.x >= i32::MAX - 10 && v.y <= i32::MIN + 10));

        sq.move_to(GridPoint::new(0, 0));
        assert!(sq.vertices().iter().all(|v| v.x.abs() < 20 && v.y.abs() < 20));
    }

    #[test]
    fn test_too_few_vertices() {
        assert_eq!(
            Polygon::new([(0, 0), (1, 1)]).unwrap_err(),
            ShapeError::TooFewVertices(2)
        );
    }

    #[test]
    fn test_zero_length_edge() {
        assert_eq!(
            Polygon::new([(0, 0), (10, 0), (10, 0), (0, 10)]).unwrap_err(),
            ShapeError::ZeroLengthEdge { index: 2 }
        );
        // closing edge
        assert_eq!(
            Polygon::new([(0, 0), (10, 0), (0, 10), (0, 0)]).unwrap_err(),
            ShapeError::ZeroLengthEdge { index: 0 }
        );
    }

    #[test]
    fn test_collinear_rejected() {
        assert_eq!(
            Polygon::new([(0, 0), (5, 5), (10, 10)]).unwrap_err(),
            ShapeError::ZeroArea
        );
    }

    #[test]
    fn test_bounds_and_path() {
        let tri = Polygon::new([(0, 0), (100, 0), (50, 100)]).unwrap();
        let bounds = tri.bounds();
        assert!((bounds.width() - 100.0).abs() < f64::EPSILON);
        assert!((bounds.height() - 100.0).abs() < f64::EPSILON);
        assert_eq!(tri.to_path().elements().len(), 4);
    }
}
