//! Knot insertion (Boehm's algorithm)

use crate::error::CurveError;
use crate::types::Vector2;

/// Control points together with their knot vector
#[derive(Debug, Clone, PartialEq)]
pub struct ControlNet {
    pub control_points: Vec<Vector2>,
    pub knots: Vec<f64>,
}

impl ControlNet {
    pub fn new(control_points: Vec<Vector2>, knots: Vec<f64>) -> Self {
        ControlNet {
            control_points,
            knots,
        }
    }
}

/// Insert `new_knot` once into a spline of order `k` (degree + 1).
///
/// The curve shape is unchanged; the result has one more knot and one more
/// control point. Fails with [`CurveError::InvalidKnot`] when the knot does
/// not fall inside any knot span.
pub fn insert_knot(k: usize, net: &ControlNet, new_knot: f64) -> Result<ControlNet, CurveError> {
    let x = &net.knots;
    let b = &net.control_points;
    let n = b.len();

    let i = (0..n + k)
        .find(|&j| matches!((x.get(j), x.get(j + 1)), (Some(&lo), Some(&hi)) if new_knot > lo && new_knot <= hi))
        .ok_or(CurveError::InvalidKnot(new_knot))?;

    let mut knots = x.clone();
    knots.insert(i + 1, new_knot);

    let point = |index: isize| -> Result<Vector2, CurveError> {
        usize::try_from(index)
            .ok()
            .and_then(|index| b.get(index))
            .copied()
            .ok_or(CurveError::MissingControlPoint(index))
    };

    let (i, k) = (i as isize, k as isize);
    let mut control_points = Vec::with_capacity(n + 1);
    for j in 0..=n as isize {
        let alpha = if j <= i - k + 1 {
            1.0
        } else if j <= i {
            let span = knot(x, j + k - 1) - knot(x, j);
            if span == 0.0 {
                0.0
            } else {
                (new_knot - knot(x, j)) / span
            }
        } else {
            0.0
        };

        let p = if alpha == 0.0 {
            point(j - 1)?
        } else if alpha == 1.0 {
            point(j)?
        } else {
            point(j - 1)? * (1.0 - alpha) + point(j)? * alpha
        };
        control_points.push(p);
    }

    Ok(ControlNet {
        control_points,
        knots,
    })
}

/// Knot lookup for indices that are in range by construction
fn knot(knots: &[f64], index: isize) -> f64 {
    usize::try_from(index)
        .ok()
        .and_then(|i| knots.get(i))
        .copied()
        .unwrap_or(f64::NAN)
}
