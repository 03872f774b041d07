//! B-spline evaluation (de Boor) with optional weights

use crate::error::CurveError;
use crate::types::Vector2;

/// Interpolation density used when the caller passes 0
const DEFAULT_INTERPOLATIONS: usize = 25;

/// Evaluate a B-spline at the normalised parameter `t`.
///
/// `t` must lie in `[0, 1]`; it is mapped onto the knot domain
/// `[knots[degree], knots[len - 1 - degree]]` and clamped there to absorb
/// rounding. Without `knots` a uniform vector `0, 1, 2, …` is used; without
/// `weights` every weight is 1. The result is rounded to 1e-9.
pub fn b_spline(
    t: f64,
    degree: usize,
    points: &[Vector2],
    knots: Option<&[f64]>,
    weights: Option<&[f64]>,
) -> Result<Vector2, CurveError> {
    if !(0.0..=1.0).contains(&t) {
        return Err(CurveError::ParameterOutOfRange(t));
    }
    validate(degree, points.len())?;

    let uniform: Vec<f64>;
    let knots = match knots {
        Some(knots) => {
            check_knot_count(degree, points.len(), knots)?;
            knots
        }
        None => {
            uniform = (0..points.len() + degree + 1).map(|i| i as f64).collect();
            &uniform
        }
    };

    let domain_end = knots.len() - 1 - degree;
    let low = knots[degree];
    let high = knots[domain_end];
    let t = (t * (high - low) + low).max(low).min(high);

    let span = (degree..domain_end)
        .find(|&s| t >= knots[s] && t <= knots[s + 1])
        .unwrap_or(domain_end - 1);

    // homogeneous coordinates: [x·w, y·w, w]
    let mut v: Vec<[f64; 3]> = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let w = weights.and_then(|w| w.get(i)).copied().unwrap_or(1.0);
            [p.x * w, p.y * w, w]
        })
        .collect();

    for level in 1..=degree + 1 {
        // i runs from span down to span - degree + level (inclusive)
        let mut i = span;
        while i + degree + 1 > span + level {
            let denominator = knots[i + degree + 1 - level] - knots[i];
            let alpha = if denominator == 0.0 {
                0.0
            } else {
                (t - knots[i]) / denominator
            };
            for j in 0..3 {
                v[i][j] = (1.0 - alpha) * v[i - 1][j] + alpha * v[i][j];
            }
            i -= 1;
        }
    }

    let [x, y, w] = v[span];
    Ok(Vector2::new(round9(x / w), round9(y / w)))
}

/// Sample a B-spline segment by segment.
///
/// The knot domain is cut at every distinct knot value inside it; each piece
/// gets `interpolations_per_segment + 1` evenly spaced samples, so
/// neighbouring pieces share their boundary point.
pub fn interpolate_b_spline(
    control_points: &[Vector2],
    degree: usize,
    knots: &[f64],
    interpolations_per_segment: usize,
    weights: Option<&[f64]>,
) -> Result<Vec<Vector2>, CurveError> {
    validate(degree, control_points.len())?;
    check_knot_count(degree, control_points.len(), knots)?;

    let per_segment = if interpolations_per_segment == 0 {
        DEFAULT_INTERPOLATIONS
    } else {
        interpolations_per_segment
    };

    let domain = (knots[degree], knots[knots.len() - 1 - degree]);
    let mut segment_ts = vec![knots[degree]];
    for &knot in &knots[degree + 1..knots.len() - degree] {
        if segment_ts.last() != Some(&knot) {
            segment_ts.push(knot);
        }
    }

    let mut polyline = Vec::with_capacity((segment_ts.len() - 1) * (per_segment + 1));
    for bounds in segment_ts.windows(2) {
        let (u_min, u_max) = (bounds[0], bounds[1]);
        for k in 0..=per_segment {
            let u = k as f64 / per_segment as f64 * (u_max - u_min) + u_min;
            let t = ((u - domain.0) / (domain.1 - domain.0)).max(0.0).min(1.0);
            polyline.push(b_spline(t, degree, control_points, Some(knots), weights)?);
        }
    }
    Ok(polyline)
}

fn validate(degree: usize, point_count: usize) -> Result<(), CurveError> {
    if point_count == 0 {
        return Err(CurveError::NoControlPoints);
    }
    if degree < 1 {
        return Err(CurveError::DegreeTooLow);
    }
    if degree > point_count - 1 {
        return Err(CurveError::DegreeTooHigh {
            degree,
            points: point_count,
        });
    }
    Ok(())
}

fn check_knot_count(degree: usize, point_count: usize, knots: &[f64]) -> Result<(), CurveError> {
    let expected = point_count + degree + 1;
    if knots.len() != expected {
        return Err(CurveError::BadKnotVectorLength {
            expected,
            actual: knots.len(),
        });
    }
    Ok(())
}

fn round9(value: f64) -> f64 {
    (value * 1e9).round() / 1e9
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cubic() -> (Vec<Vector2>, Vec<f64>) {
        (
            vec![
                Vector2::new(0.0, 0.0),
                Vector2::new(1.0, 2.0),
                Vector2::new(3.0, 2.0),
                Vector2::new(4.0, 0.0),
            ],
            vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0],
        )
    }

    #[test]
    fn test_clamped_cubic_endpoints_and_midpoint() {
        let (points, knots) = cubic();
        assert_eq!(b_spline(0.0, 3, &points, Some(&knots), None).unwrap(), points[0]);
        assert_eq!(b_spline(1.0, 3, &points, Some(&knots), None).unwrap(), points[3]);
        // Bezier midpoint: (P0 + 3P1 + 3P2 + P3) / 8
        assert_eq!(b_spline(0.5, 3, &points, Some(&knots), None).unwrap(), Vector2::new(2.0, 1.5));
    }

    #[test]
    fn test_unit_weights_match_unweighted() {
        let (points, knots) = cubic();
        let weights = [1.0; 4];
        for t in [0.1, 0.35, 0.8] {
            assert_eq!(
                b_spline(t, 3, &points, Some(&knots), Some(&weights)).unwrap(),
                b_spline(t, 3, &points, Some(&knots), None).unwrap()
            );
        }
    }

    #[test]
    fn test_weight_pulls_towards_control_point() {
        let (points, knots) = cubic();
        let plain = b_spline(0.5, 3, &points, Some(&knots), None).unwrap();
        let heavy = b_spline(0.5, 3, &points, Some(&knots), Some(&[1.0, 5.0, 1.0, 1.0])).unwrap();
        assert!(heavy.distance(&points[1]) < plain.distance(&points[1]));
    }

    #[test]
    fn test_errors() {
        let (points, knots) = cubic();
        assert_eq!(
            b_spline(1.5, 3, &points, Some(&knots), None),
            Err(CurveError::ParameterOutOfRange(1.5))
        );
        assert_eq!(b_spline(0.5, 0, &points, Some(&knots), None), Err(CurveError::DegreeTooLow));
        assert!(matches!(
            b_spline(0.5, 4, &points, None, None),
            Err(CurveError::DegreeTooHigh { degree: 4, points: 4 })
        ));
        assert_eq!(
            b_spline(0.5, 3, &points, Some(&knots[..7]), None),
            Err(CurveError::BadKnotVectorLength { expected: 8, actual: 7 })
        );
    }

    #[test]
    fn test_uniform_knots_by_default() {
        // linear spline over uniform knots passes through interior points
        let points = vec![Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0), Vector2::new(2.0, 0.0)];
        assert_eq!(b_spline(0.5, 1, &points, None, None).unwrap(), Vector2::new(1.0, 1.0));
    }

    #[test]
    fn test_interpolate_segments() {
        let points = vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(2.0, 0.0),
            Vector2::new(3.0, 1.0),
        ];
        let knots = [0.0, 0.0, 0.0, 0.5, 1.0, 1.0, 1.0];
        let polyline = interpolate_b_spline(&points, 2, &knots, 10, None).unwrap();
        assert_eq!(polyline.len(), 2 * 11);
        assert_eq!(polyline[0], points[0]);
        assert_eq!(polyline[polyline.len() - 1], points[3]);
        assert_eq!(polyline[10], polyline[11]);
    }

    #[test]
    fn test_interpolate_rejects_short_knots() {
        let points = vec![Vector2::ZERO, Vector2::new(1.0, 0.0)];
        assert!(matches!(
            interpolate_b_spline(&points, 1, &[0.0, 1.0], 25, None),
            Err(CurveError::BadKnotVectorLength { .. })
        ));
    }
}
