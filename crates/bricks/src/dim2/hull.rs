use super::Point2;
use crate::error::{BricksError, BricksResult};

/// Turn direction of the ordered triplet `(p, q, r)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Classify `(p, q, r)` by the sign of
/// `(q.y − p.y)(r.x − q.x) − (q.x − p.x)(r.y − q.y)`: zero is collinear,
/// positive clockwise, negative counterclockwise. Exact comparison, no epsilon.
#[inline]
pub fn orientation(p: Point2, q: Point2, r: Point2) -> Orientation {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if val == 0.0 {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Convex hull by gift wrapping (Jarvis march).
///
/// Starts at the leftmost point (first one in input order on ties) and walks
/// counterclockwise until it returns there. Complexity O(n·h), h = hull size.
///
/// Boundary handling
/// - Points lying on a hull edge between two vertices are not reported; among
///   collinear candidates the walk takes the one farthest from the current vertex.
/// - Duplicates are reported once.
/// - If the first leftmost point sits strictly inside the vertical left edge
///   (other leftmost points above and below it), it is not a vertex; the walk
///   then starts at the lowest leftmost point.
/// - Fully degenerate inputs give a two-point hull (all points on one line) or a
///   one-point hull (all points equal).
///
/// Errors
/// - `InvalidInput` for fewer than three points or a non-finite coordinate.
pub fn convex_hull(points: &[Point2]) -> BricksResult<Vec<Point2>> {
    let n = points.len();
    if n < 3 {
        return Err(BricksError::InvalidInput(format!(
            "convex hull needs at least 3 points, got {n}"
        )));
    }
    if let Some(i) = points.iter().position(|p| !p.is_finite()) {
        return Err(BricksError::InvalidInput(format!(
            "point {i} has a non-finite coordinate"
        )));
    }

    let start = start_vertex(points);
    let mut hull = vec![points[start]];
    let mut p = start;
    loop {
        // First candidate distinct from p; none means all points coincide.
        let Some(mut q) = (1..n)
            .map(|k| (p + k) % n)
            .find(|&i| points[i] != points[p])
        else {
            return Ok(hull);
        };
        for i in 0..n {
            if points[i] == points[p] {
                continue;
            }
            let take = match orientation(points[p], points[i], points[q]) {
                Orientation::CounterClockwise => true,
                Orientation::Collinear => {
                    dist2(points[p], points[i]) > dist2(points[p], points[q])
                }
                Orientation::Clockwise => false,
            };
            if take {
                q = i;
            }
        }

        if points[q] == points[start] {
            return Ok(hull);
        }
        // Every step lands on a distinct vertex; more than n means the
        // orientation predicate was inconsistent (rounding on near-collinear input).
        if hull.len() == n {
            return Err(BricksError::InvalidInput(
                "convex hull walk did not return to its start".to_string(),
            ));
        }
        hull.push(points[q]);
        p = q;
    }
}

/// Index of the first leftmost point, or of the lowest leftmost point when the
/// first one lies strictly inside the left edge.
fn start_vertex(points: &[Point2]) -> usize {
    let mut first = 0;
    for i in 1..points.len() {
        if points[i].x < points[first].x {
            first = i;
        }
    }
    let x = points[first].x;
    let mut lowest = first;
    let mut has_above = false;
    for (i, pt) in points.iter().enumerate() {
        if pt.x != x {
            continue;
        }
        if pt.y < points[lowest].y {
            lowest = i;
        }
        has_above |= pt.y > points[first].y;
    }
    if has_above && points[lowest].y < points[first].y {
        lowest
    } else {
        first
    }
}

#[inline]
fn dist2(a: Point2, b: Point2) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}
