//! Rotate the unit cube's corners and print the hull of their XY shadow.
//!
//! Usage:
//!   cargo run -p bricks --example unit_cube -- 0.4
//!
//! The argument is the rotation angle (radians) applied about X, then Z.

use bricks::dim2::{convex_hull, polygon_area, Point2};
use bricks::dim3::{rx, rz, Point3};

fn main() {
    let theta: f64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.4);
    let r = rz(theta).dot(&rx(theta)).unwrap();
    println!("{r}");

    let mut shadow = Vec::new();
    for i in 0..8 {
        let corner = Point3::new((i & 1) as f64, ((i >> 1) & 1) as f64, ((i >> 2) & 1) as f64);
        let p = corner.rotate(&r).unwrap();
        shadow.push(Point2::new(p.x, p.y));
    }
    let hull = convex_hull(&shadow).unwrap();
    println!("shadow hull: {} vertices, area {:.6}", hull.len(), polygon_area(&hull));
}
