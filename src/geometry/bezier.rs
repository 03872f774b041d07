//! Conversion of pinned B-splines to piecewise Bezier form.
//!
//! A spline of order `k` is a chain of Bezier segments once every interior
//! knot has multiplicity `k - 1`. A quadratic one with seven control points,
//! for example, has the knot vector `[0 0 0 1 1 2 2 3 3 3]`. The conversion
//! inserts the missing knots one at a time.

use super::knot_insertion::{insert_knot, ControlNet};
use crate::error::CurveError;

/// Check that the first `k` and the last `k` knots are equal
pub fn check_pinned(k: usize, knots: &[f64]) -> Result<(), CurveError> {
    let not_pinned = CurveError::NotPinned { order: k };
    if k == 0 || knots.len() < k {
        return Err(not_pinned);
    }
    let first = knots[0];
    let last = knots[knots.len() - 1];
    let head_pinned = knots[..k].iter().all(|&knot| knot == first);
    let tail_pinned = knots[knots.len() - k..].iter().all(|&knot| knot == last);
    if head_pinned && tail_pinned {
        Ok(())
    } else {
        Err(not_pinned)
    }
}

/// How many times `knots[index]` repeats starting at `index`
pub fn multiplicity(knots: &[f64], index: usize) -> usize {
    match knots.get(index) {
        Some(&value) => knots[index..].iter().take_while(|&&knot| knot == value).count(),
        None => 1,
    }
}

/// Knot values to insert, with repetition, to reach Bezier form
pub fn compute_insertions(k: usize, knots: &[f64]) -> Vec<f64> {
    let mut inserts = Vec::new();
    let mut i = k;
    while i + k < knots.len() {
        let knot = knots[i];
        let m = multiplicity(knots, i);
        for _ in 0..(k.saturating_sub(m + 1)) {
            inserts.push(knot);
        }
        i += m;
    }
    inserts
}

/// Insert knots until every interior knot has multiplicity `k - 1`
pub fn to_piecewise_bezier(k: usize, net: &ControlNet) -> Result<ControlNet, CurveError> {
    check_pinned(k, &net.knots)?;
    compute_insertions(k, &net.knots)
        .into_iter()
        .try_fold(net.clone(), |acc, knot| insert_knot(k, &acc, knot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vector2;

    #[test]
    fn test_pinned() {
        assert!(check_pinned(3, &[0.0, 0.0, 0.0, 1.0, 2.0, 2.0, 2.0]).is_ok());
        assert_eq!(
            check_pinned(3, &[0.0, 0.0, 1.0, 2.0, 2.0, 2.0]),
            Err(CurveError::NotPinned { order: 3 })
        );
        assert!(check_pinned(4, &[0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0]).is_err());
    }

    #[test]
    fn test_multiplicity() {
        let knots = [0.0, 0.0, 0.0, 1.0, 1.0, 2.0];
        assert_eq!(multiplicity(&knots, 0), 3);
        assert_eq!(multiplicity(&knots, 1), 2);
        assert_eq!(multiplicity(&knots, 3), 2);
        assert_eq!(multiplicity(&knots, 5), 1);
    }

    #[test]
    fn test_compute_insertions() {
        assert_eq!(
            compute_insertions(3, &[0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 3.0, 3.0]),
            vec![1.0, 2.0]
        );
        assert_eq!(
            compute_insertions(4, &[0.0, 0.0, 0.0, 0.0, 0.5, 1.0, 1.0, 1.0, 1.0]),
            vec![0.5, 0.5]
        );
        assert!(compute_insertions(4, &[0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]).is_empty());
    }

    #[test]
    fn test_cubic_with_interior_knot() {
        let net = ControlNet::new(
            vec![
                Vector2::new(0.0, 0.0),
                Vector2::new(1.0, 1.0),
                Vector2::new(2.0, 1.0),
                Vector2::new(3.0, 0.0),
                Vector2::new(4.0, 1.0),
            ],
            vec![0.0, 0.0, 0.0, 0.0, 0.5, 1.0, 1.0, 1.0, 1.0],
        );
        let bezier = to_piecewise_bezier(4, &net).unwrap();
        assert_eq!(bezier.knots, vec![0.0, 0.0, 0.0, 0.0, 0.5, 0.5, 0.5, 1.0, 1.0, 1.0, 1.0]);
        assert_eq!(bezier.control_points.len(), 7);
        assert_eq!(bezier.control_points[0], net.control_points[0]);
        assert_eq!(bezier.control_points[6], net.control_points[4]);
    }

    #[test]
    fn test_unpinned_is_an_error() {
        let net = ControlNet::new(
            vec![Vector2::ZERO, Vector2::new(1.0, 0.0), Vector2::new(2.0, 0.0)],
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
        );
        assert!(matches!(to_piecewise_bezier(3, &net), Err(CurveError::NotPinned { order: 3 })));
    }
}
