//! Lightweight polyline entity

use super::{Entity, EntityCommon, Vertex};
use crate::types::Vector2;

/// A 2D polyline with its vertices inline
#[derive(Debug, Clone, Default)]
pub struct LwPolyline {
    pub common: EntityCommon,
    pub vertices: Vec<Vertex>,
    pub closed: bool,
    pub thickness: f64,
}

impl LwPolyline {
    pub fn from_points(points: &[Vector2], closed: bool) -> Self {
        LwPolyline {
            vertices: points.iter().map(|p| Vertex::new(p.x, p.y)).collect(),
            closed,
            ..Default::default()
        }
    }
}

impl Entity for LwPolyline {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "LWPOLYLINE"
    }

    fn rebase(&mut self, origin: Vector2) {
        self.vertices.iter_mut().for_each(|v| v.rebase(origin));
    }
}
