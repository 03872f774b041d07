//! Solid (filled triangle/quadrilateral) entity

use super::{rebase_points, Entity, EntityCommon};
use crate::types::{Vector2, Vector3};

#[derive(Debug, Clone, Default)]
pub struct Solid {
    pub common: EntityCommon,
    /// Corners from codes 10-13 / 20-23 / 30-33
    pub corners: [Vector3; 4],
    pub thickness: f64,
}

impl Entity for Solid {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "SOLID"
    }

    fn rebase(&mut self, origin: Vector2) {
        rebase_points(&mut self.corners, origin);
    }
}
