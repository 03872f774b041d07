//! Paper space viewport entity

use super::{Entity, EntityCommon};
use crate::types::{Vector2, Vector3};

#[derive(Debug, Clone, Default)]
pub struct Viewport {
    pub common: EntityCommon,
    pub center: Vector3,
    pub width: f64,
    pub height: f64,
    pub status: i64,
    pub id: i64,
    pub view_center: Vector2,
    pub snap_base: Vector2,
    pub snap_spacing: Vector2,
    pub grid_spacing: Vector2,
    pub view_direction: Vector3,
    pub view_target: Vector3,
    pub view_height: f64,
    /// Degrees
    pub twist_angle: f64,
    pub status_flags: i64,
}

impl Entity for Viewport {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "VIEWPORT"
    }
}
