//! Circle entity

use super::{Entity, EntityCommon};
use crate::types::{Vector2, Vector3};

/// A full circle
#[derive(Debug, Clone, Default)]
pub struct Circle {
    pub common: EntityCommon,
    pub center: Vector3,
    pub radius: f64,
    pub thickness: f64,
}

impl Circle {
    pub fn new(center: Vector3, radius: f64) -> Self {
        Circle {
            center,
            radius,
            ..Default::default()
        }
    }
}

impl Entity for Circle {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "CIRCLE"
    }

    fn rebase(&mut self, origin: Vector2) {
        self.center = self.center.shifted_back(origin);
    }
}
