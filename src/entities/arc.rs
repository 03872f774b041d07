//! Arc entity

use super::{Entity, EntityCommon};
use crate::types::{Vector2, Vector3};

/// A circular arc.
///
/// The file stores ARC angles in degrees; the builder converts them, so
/// `start_angle` and `end_angle` are always radians here.
#[derive(Debug, Clone, Default)]
pub struct Arc {
    pub common: EntityCommon,
    pub center: Vector3,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub thickness: f64,
}

impl Arc {
    pub fn new(center: Vector3, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Arc {
            center,
            radius,
            start_angle,
            end_angle,
            ..Default::default()
        }
    }
}

impl Entity for Arc {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "ARC"
    }

    fn rebase(&mut self, origin: Vector2) {
        self.center = self.center.shifted_back(origin);
    }
}
