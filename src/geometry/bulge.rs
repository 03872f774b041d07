//! Arcs between polyline vertices.
//!
//! A vertex bulge is `tan(θ / 4)` where θ is the included angle of the arc
//! to the next vertex. Positive bulges run counter-clockwise.

use crate::types::Vector2;
use std::f64::consts::{FRAC_PI_2, PI};

/// Angular spacing of the generated arc points
pub const ARC_RESOLUTION_DEGREES: f64 = 5.0;

/// Interior points of the arc from `from` to `to`.
///
/// The end points themselves are not included; points fall on multiples of
/// [`ARC_RESOLUTION_DEGREES`] measured around the arc center and are
/// ordered from `from` towards `to`.
pub fn create_arc_for_lw_polyline(from: Vector2, to: Vector2, bulge: f64) -> Vec<Vector2> {
    arc_points(from, to, bulge, ARC_RESOLUTION_DEGREES)
}

fn arc_points(from: Vector2, to: Vector2, bulge: f64, resolution: f64) -> Vec<Vector2> {
    // Work counter-clockwise from b to a; a clockwise arc swaps the ends.
    let (theta, a, b) = if bulge < 0.0 {
        ((-bulge).atan() * 4.0, from, to)
    } else {
        (bulge.atan() * 4.0, to, from)
    };

    let ab = b - a;
    let c = a + ab * 0.5;
    let center_distance = (ab.length() / 2.0 / (theta / 2.0).tan()).abs();
    let perpendicular = ab.normalize().rotate(FRAC_PI_2);
    let d = if theta < PI {
        c + perpendicular * -center_distance
    } else {
        c + perpendicular * center_distance
    };

    let start_angle = (b - d).angle().to_degrees();
    let mut end_angle = (a - d).angle().to_degrees();
    if end_angle < start_angle {
        end_angle += 360.0;
    }
    let radius = (b - d).length();

    let first = (start_angle / resolution).floor() as i64 + 1;
    let last = (end_angle / resolution).ceil() as i64 - 1;
    let mut points: Vec<Vector2> = (first..=last)
        .map(|step| {
            let angle = (step as f64 * resolution).to_radians();
            d + Vector2::new(angle.cos() * radius, angle.sin() * radius)
        })
        .collect();

    if bulge < 0.0 {
        points.reverse();
    }
    points
}
