//! Spline entity

use super::{rebase_points, Entity, EntityCommon};
use crate::types::{Vector2, Vector3};
use bitflags::bitflags;

bitflags! {
    /// SPLINE flags (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SplineFlags: i32 {
        const CLOSED = 1;
        const PERIODIC = 2;
        const RATIONAL = 4;
        const PLANAR = 8;
        const LINEAR = 16;
    }
}

/// A (possibly rational) B-spline curve
#[derive(Debug, Clone)]
pub struct Spline {
    pub common: EntityCommon,
    pub flags: SplineFlags,
    pub degree: usize,
    pub knots: Vec<f64>,
    pub control_points: Vec<Vector3>,
    /// Present only when the file gave weights
    pub weights: Option<Vec<f64>>,
    pub fit_points: Vec<Vector3>,
    pub knot_tolerance: Option<f64>,
    pub control_point_tolerance: Option<f64>,
    pub fit_tolerance: Option<f64>,
    pub number_of_knots: Option<i64>,
    pub number_of_control_points: Option<i64>,
    pub number_of_fit_points: Option<i64>,
}

impl Default for Spline {
    fn default() -> Self {
        Spline {
            common: EntityCommon::default(),
            flags: SplineFlags::empty(),
            degree: 3,
            knots: Vec::new(),
            control_points: Vec::new(),
            weights: None,
            fit_points: Vec::new(),
            knot_tolerance: None,
            control_point_tolerance: None,
            fit_tolerance: None,
            number_of_knots: None,
            number_of_control_points: None,
            number_of_fit_points: None,
        }
    }
}

impl Spline {
    pub fn is_closed(&self) -> bool {
        self.flags.contains(SplineFlags::CLOSED)
    }

    /// Whether any weight differs from 1
    pub fn is_rational(&self) -> bool {
        self.weights
            .as_ref()
            .is_some_and(|w| w.iter().any(|&w| w != 1.0))
    }

    pub fn control_points_2d(&self) -> Vec<Vector2> {
        self.control_points.iter().map(Vector3::xy).collect()
    }
}

impl Entity for Spline {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "SPLINE"
    }

    fn rebase(&mut self, origin: Vector2) {
        rebase_points(&mut self.control_points, origin);
    }
}
