//! Planar points, convex hull (gift wrapping), and polygon area.
//!
//! - `Point2`: plain value `(x, y)`; coordinates are expected to be finite.
//! - `convex_hull`: Jarvis march, counterclockwise from the leftmost point.
//! - `polygon_area`: shoelace formula, orientation-independent.

mod hull;

use nalgebra::Vector2;

pub use hull::{convex_hull, orientation, Orientation};

/// Point in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Vector2<f64>> for Point2 {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Point2> for Vector2<f64> {
    #[inline]
    fn from(p: Point2) -> Self {
        Vector2::new(p.x, p.y)
    }
}

impl From<(f64, f64)> for Point2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Area of the simple polygon with vertices `points` in order (either orientation).
///
/// Fewer than three vertices enclose nothing and yield `0.0`.
pub fn polygon_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut first = 0.0;
    let mut second = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        first += p.x * q.y;
        second += p.y * q.x;
    }
    ((first - second) / 2.0).abs()
}
