//! Ellipse entity

use super::{Entity, EntityCommon};
use crate::types::{Vector2, Vector3};
use std::f64::consts::TAU;

/// An ellipse or elliptical arc, angles in radians
#[derive(Debug, Clone)]
pub struct Ellipse {
    pub common: EntityCommon,
    pub center: Vector3,
    /// Major axis endpoint, relative to the center
    pub major_axis: Vector3,
    /// Minor to major axis ratio
    pub axis_ratio: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Default for Ellipse {
    fn default() -> Self {
        Ellipse {
            common: EntityCommon::default(),
            center: Vector3::ZERO,
            major_axis: Vector3::ZERO,
            axis_ratio: 1.0,
            start_angle: 0.0,
            end_angle: TAU,
        }
    }
}

impl Ellipse {
    pub fn major_radius(&self) -> f64 {
        self.major_axis.xy().length()
    }

    pub fn minor_radius(&self) -> f64 {
        self.axis_ratio * self.major_radius()
    }

    /// Rotation of the major axis from +X, radians
    pub fn rotation(&self) -> f64 {
        -(-self.major_axis.y).atan2(self.major_axis.x)
    }
}

impl Entity for Ellipse {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "ELLIPSE"
    }

    fn rebase(&mut self, origin: Vector2) {
        self.center = self.center.shifted_back(origin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radii_and_rotation() {
        let e = Ellipse {
            major_axis: Vector3::new(0.0, 4.0, 0.0),
            axis_ratio: 0.5,
            ..Default::default()
        };
        assert_eq!(e.major_radius(), 4.0);
        assert_eq!(e.minor_radius(), 2.0);
        assert!((e.rotation() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }
}
