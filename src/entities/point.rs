//! Point entity

use super::{Entity, EntityCommon};
use crate::types::{Vector2, Vector3};

#[derive(Debug, Clone, Default)]
pub struct Point {
    pub common: EntityCommon,
    pub location: Vector3,
    pub thickness: f64,
}

impl Entity for Point {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "POINT"
    }

    fn rebase(&mut self, origin: Vector2) {
        self.location = self.location.shifted_back(origin);
    }
}
