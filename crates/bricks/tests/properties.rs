//! Property-based tests for the matrix core and the planar helpers.
//!
//! Covers: zeros shape, transpose involution, product associativity,
//! add/sub inverse, scale identities, bounds and shape checks, shoelace area.

use bricks::dim2::{convex_hull, polygon_area, Point2};
use bricks::slices::interleave;
use bricks::{BricksError, Matrix};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn seeded(rows: usize, cols: usize, seed: u64) -> Matrix {
    // Shift to [-1, 1) so sign-sensitive bugs show up.
    let m = Matrix::random_with(rows, cols, &mut StdRng::seed_from_u64(seed));
    let ones = Matrix::from_row_slice(rows, cols, &vec![1.0; rows * cols]).unwrap();
    m.scale(2.0).sub(&ones).unwrap()
}

// ── Matrix ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn zeros_has_requested_shape(r in 0usize..12, c in 0usize..12) {
        let z = Matrix::zeros(r, c);
        prop_assert_eq!(z.rows(), r);
        prop_assert_eq!(z.cols(), c);
        prop_assert!(z.cells().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn transpose_is_an_involution(r in 0usize..8, c in 0usize..8, seed in any::<u64>()) {
        let a = seeded(r, c, seed);
        prop_assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn dot_is_associative(
        n in 1usize..6, k in 1usize..6, l in 1usize..6, m in 1usize..6,
        seed in any::<u64>(),
    ) {
        let a = seeded(n, k, seed);
        let b = seeded(k, l, seed.wrapping_add(1));
        let c = seeded(l, m, seed.wrapping_add(2));
        let left = a.dot(&b).unwrap().dot(&c).unwrap();
        let right = a.dot(&b.dot(&c).unwrap()).unwrap();
        prop_assert!(left.approx_eq(&right, 1e-10), "{} vs {}", left, right);
    }

    #[test]
    fn add_then_sub_restores(r in 0usize..8, c in 0usize..8, seed in any::<u64>()) {
        let a = seeded(r, c, seed);
        let b = seeded(r, c, seed ^ 0x5555);
        let back = a.add(&b).unwrap().sub(&b).unwrap();
        prop_assert!(back.approx_eq(&a, 1e-12));
    }

    #[test]
    fn scale_by_one_and_zero(r in 0usize..8, c in 0usize..8, seed in any::<u64>()) {
        let a = seeded(r, c, seed);
        prop_assert_eq!(a.scale(1.0), a.clone());
        prop_assert_eq!(a.scale(0.0), Matrix::zeros(r, c));
    }

    #[test]
    fn out_of_range_access_fails(r in 0usize..6, c in 0usize..6, dr in 0usize..4, dc in 0usize..4) {
        let a = Matrix::zeros(r, c);
        let is_oob = |res: Result<f64, BricksError>| matches!(res, Err(BricksError::OutOfBounds { .. }));
        prop_assert!(is_oob(a.at(r + dr, dc)));
        prop_assert!(is_oob(a.at(dr, c + dc)));
    }

    #[test]
    fn mismatched_elementwise_ops_fail(r in 1usize..6, c in 1usize..6, extra in 1usize..3) {
        let a = Matrix::zeros(r, c);
        let b = Matrix::zeros(r + extra, c);
        let mismatch = |res: Result<Matrix, BricksError>| matches!(res, Err(BricksError::ShapeMismatch { .. }));
        prop_assert!(mismatch(a.add(&b)));
        prop_assert!(mismatch(a.sub(&b)));
        prop_assert!(mismatch(a.multiply(&b)));
        prop_assert!(mismatch(a.dot(&Matrix::zeros(c + extra, r))));
    }
}

// ── Planar helpers ───────────────────────────────────────────────────

proptest! {
    /// Axis-aligned rectangles: area is w·h in both traversal directions.
    #[test]
    fn rectangle_area(x in -10.0f64..10.0, y in -10.0f64..10.0, w in 0.1f64..5.0, h in 0.1f64..5.0) {
        let ccw = vec![
            Point2::new(x, y),
            Point2::new(x + w, y),
            Point2::new(x + w, y + h),
            Point2::new(x, y + h),
        ];
        let cw: Vec<Point2> = ccw.iter().rev().copied().collect();
        prop_assert!((polygon_area(&ccw) - w * h).abs() < 1e-9);
        prop_assert!((polygon_area(&cw) - w * h).abs() < 1e-9);
    }

    /// The hull of a rectangle plus an interior point is the rectangle itself.
    #[test]
    fn hull_drops_interior_point(w in 0.5f64..5.0, h in 0.5f64..5.0, fx in 0.1f64..0.9, fy in 0.1f64..0.9) {
        let corners = vec![
            Point2::new(0.0, 0.0),
            Point2::new(w, 0.0),
            Point2::new(w, h),
            Point2::new(0.0, h),
        ];
        let mut points = corners.clone();
        points.push(Point2::new(fx * w, fy * h));
        let hull = convex_hull(&points).unwrap();
        prop_assert_eq!(hull, corners);
    }

    /// Small integer grids: many collinear and repeated points, exact arithmetic.
    #[test]
    fn hull_encloses_grid_points(
        raw in proptest::collection::vec((0i32..5, 0i32..5), 3..16),
    ) {
        let points: Vec<Point2> = raw
            .iter()
            .map(|&(x, y)| Point2::new(x as f64, y as f64))
            .collect();
        let hull = convex_hull(&points).unwrap();
        prop_assert!(!hull.is_empty() && hull.len() <= points.len());
        if hull.len() >= 3 {
            for k in 0..hull.len() {
                let a = hull[k];
                let b = hull[(k + 1) % hull.len()];
                for p in &points {
                    let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
                    prop_assert!(cross >= 0.0, "{:?} right of {:?}->{:?}", p, a, b);
                }
            }
        }
    }

    #[test]
    fn interleave_keeps_every_element(
        a in proptest::collection::vec(any::<i32>(), 0..20),
        b in proptest::collection::vec(any::<i32>(), 0..20),
    ) {
        let z = interleave(&a, &b);
        prop_assert_eq!(z.len(), a.len() + b.len());
        let paired = a.len().min(b.len());
        for i in 0..paired {
            prop_assert_eq!(z[2 * i], a[i]);
            prop_assert_eq!(z[2 * i + 1], b[i]);
        }
        let longer = if a.len() > b.len() { &a } else { &b };
        prop_assert_eq!(&z[2 * paired..], &longer[paired..]);
    }
}
