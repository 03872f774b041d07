//! Attribute (ATTRIB) entity

use super::{Entity, EntityCommon, TextBody};
use crate::types::Vector2;

#[derive(Debug, Clone, Default)]
pub struct AttributeEntity {
    pub common: EntityCommon,
    pub body: TextBody,
    pub tag: String,
    pub flags: i64,
    pub field_length: i64,
    pub lock_position: bool,
}

impl Entity for AttributeEntity {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "ATTRIB"
    }

    fn rebase(&mut self, origin: Vector2) {
        self.body.rebase(origin);
    }
}
