//! Attribute definition (ATTDEF) entity

use super::{Entity, EntityCommon, TextBody};
use crate::types::Vector2;

/// Template for an attribute, stored inside a block.
/// `body.value` holds the default value.
#[derive(Debug, Clone, Default)]
pub struct AttributeDefinition {
    pub common: EntityCommon,
    pub body: TextBody,
    pub tag: String,
    pub prompt: String,
    pub flags: i64,
    pub field_length: i64,
    pub lock_position: bool,
}

impl Entity for AttributeDefinition {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "ATTDEF"
    }

    fn rebase(&mut self, origin: Vector2) {
        self.body.rebase(origin);
    }
}
