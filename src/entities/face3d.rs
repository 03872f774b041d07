//! 3D face entity

use super::{rebase_points, Entity, EntityCommon};
use crate::types::{Vector2, Vector3};

#[derive(Debug, Clone, Default)]
pub struct Face3D {
    pub common: EntityCommon,
    pub vertices: [Vector3; 4],
}

impl Entity for Face3D {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "3DFACE"
    }

    fn rebase(&mut self, origin: Vector2) {
        rebase_points(&mut self.vertices, origin);
    }
}
