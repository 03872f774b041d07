//! Ellipse and circular arc sampling

use crate::types::Vector2;
use std::f64::consts::TAU;

/// Angular steps in a full turn
pub const ELLIPSE_STEPS: usize = 72;

const EPS: f64 = 1e-6;

/// Sample an elliptical arc.
///
/// Angles are radians; an `end` below `start` wraps by a full turn and the
/// sweep never exceeds one turn. Points are taken every `2π / 72` from
/// `start`, and the end of the sweep is always the last one, so at most
/// `ELLIPSE_STEPS + 1` points come back. The axes are rotated by `rotation`
/// before the center offset is added. Non-finite angles yield no points.
pub fn interpolate_ellipse(
    center: Vector2,
    rx: f64,
    ry: f64,
    start: f64,
    end: f64,
    rotation: f64,
) -> Vec<Vector2> {
    if !start.is_finite() || !end.is_finite() {
        return Vec::new();
    }
    let mut sweep = end - start;
    if sweep < 0.0 {
        sweep += TAU;
    }
    // a sweep that is still negative or infinite after wrapping is malformed
    let sweep = if sweep.is_finite() { sweep.clamp(0.0, TAU) } else { TAU };
    let start = start.rem_euclid(TAU);

    let step = TAU / ELLIPSE_STEPS as f64;
    let steps = (((sweep - EPS) / step).ceil().max(0.0) as usize).min(ELLIPSE_STEPS);

    (0..steps)
        .map(|i| start + i as f64 * step)
        .chain(std::iter::once(start + sweep))
        .map(|theta| {
            let p = Vector2::new(theta.cos() * rx, theta.sin() * ry);
            let p = if rotation != 0.0 { p.rotate(rotation) } else { p };
            p + center
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoundingBox2D;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_full_circle() {
        let points = interpolate_ellipse(Vector2::ZERO, 10.0, 10.0, 0.0, TAU, 0.0);
        assert_eq!(points.len(), ELLIPSE_STEPS + 1);
        let first = points[0];
        let last = points[points.len() - 1];
        assert!((first - last).length() < 1e-9);

        let bbox = BoundingBox2D::from_points(points);
        assert!((bbox.min.x + 10.0).abs() < 1e-9);
        assert!((bbox.max.y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_wrapped_end_angle() {
        // 270deg to 90deg runs through 0
        let points = interpolate_ellipse(Vector2::ZERO, 1.0, 1.0, 3.0 * FRAC_PI_2, FRAC_PI_2, 0.0);
        assert_eq!(points.len(), ELLIPSE_STEPS / 2 + 1);
        assert!(points.iter().all(|p| p.x > -1e-9));
    }

    #[test]
    fn test_rotation_then_offset() {
        let points = interpolate_ellipse(Vector2::new(5.0, 5.0), 2.0, 1.0, 0.0, 0.0, FRAC_PI_2);
        assert_eq!(points.len(), 1);
        assert!((points[0] - Vector2::new(5.0, 7.0)).length() < 1e-9);
    }

    #[test]
    fn test_half_turn_end_point_is_exact() {
        let points = interpolate_ellipse(Vector2::ZERO, 3.0, 3.0, 0.0, PI, 0.0);
        let last = points[points.len() - 1];
        assert_eq!(last, Vector2::new(PI.cos() * 3.0, PI.sin() * 3.0));
    }

    #[test]
    fn test_huge_start_angle_terminates() {
        // adding one step to 1e17 does not change it
        let points = interpolate_ellipse(Vector2::ZERO, 1.0, 0.5, 1e17, 100000000000000016.0, 0.0);
        assert_eq!(points.len(), ELLIPSE_STEPS + 1);
        assert!(points.iter().all(|p| p.x.abs() <= 1.0 + 1e-9 && p.y.abs() <= 0.5 + 1e-9));
    }

    #[test]
    fn test_sweep_is_capped_at_one_turn() {
        let points = interpolate_ellipse(Vector2::ZERO, 2.0, 2.0, 0.0, 1e9_f64.to_radians(), 0.0);
        assert_eq!(points.len(), ELLIPSE_STEPS + 1);

        // end far below start still wraps only once
        let points = interpolate_ellipse(Vector2::ZERO, 2.0, 2.0, 100.0, -100.0, 0.0);
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(interpolate_ellipse(Vector2::ZERO, 1.0, 1.0, f64::NAN, PI, 0.0).is_empty());
        assert!(interpolate_ellipse(Vector2::ZERO, 1.0, 1.0, 0.0, f64::INFINITY, 0.0).is_empty());

        let flat = interpolate_ellipse(Vector2::ZERO, 4.0, 0.0, 0.0, TAU, 0.0);
        assert_eq!(flat.len(), ELLIPSE_STEPS + 1);
        assert!(flat.iter().all(|p| p.y == 0.0));

        let nan_radius = interpolate_ellipse(Vector2::ZERO, f64::NAN, 1.0, 0.0, PI, 0.0);
        assert_eq!(nan_radius.len(), ELLIPSE_STEPS / 2 + 1);
    }
}
