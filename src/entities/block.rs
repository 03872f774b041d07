//! Block definition

use crate::entities::EntityType;
use crate::types::{Vector2, Vector3};

/// A named, reusable group of entities from the BLOCKS section.
///
/// Entity coordinates are stored as written; they are re-based against
/// `origin` only when the block is flattened into an insert.
#[derive(Debug, Clone, Default)]
pub struct Block {
    pub name: String,
    /// Base point, subtracted from every entity coordinate at expansion
    pub origin: Vector3,
    pub xref: Option<String>,
    pub paper_space: bool,
    pub layout: Option<String>,
    pub entities: Vec<EntityType>,
}

impl Block {
    /// Create a new empty block
    pub fn new(name: impl Into<String>, origin: Vector3) -> Self {
        Self {
            name: name.into(),
            origin,
            ..Default::default()
        }
    }

    /// Builder: Append an entity
    pub fn with_entity(mut self, entity: EntityType) -> Self {
        self.entities.push(entity);
        self
    }

    pub fn origin_xy(&self) -> Vector2 {
        self.origin.xy()
    }
}
