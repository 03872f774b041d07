//! Single-line text entity and the text fields it shares with attributes

use super::{Entity, EntityCommon};
use crate::types::{Vector2, Vector3};

/// Fields common to TEXT, ATTDEF and ATTRIB
#[derive(Debug, Clone, PartialEq)]
pub struct TextBody {
    /// First alignment point (10/20/30)
    pub start: Vector3,
    /// Second alignment point (11/21/31)
    pub end: Vector3,
    pub height: f64,
    /// Relative X scale factor (width)
    pub x_scale: f64,
    /// Degrees
    pub rotation: f64,
    /// Degrees
    pub oblique_angle: f64,
    pub value: String,
    pub style_name: Option<String>,
    pub horizontal_justification: i64,
    pub vertical_justification: i64,
    pub thickness: f64,
}

impl Default for TextBody {
    fn default() -> Self {
        TextBody {
            start: Vector3::ZERO,
            end: Vector3::ZERO,
            height: 0.0,
            x_scale: 1.0,
            rotation: 0.0,
            oblique_angle: 0.0,
            value: String::new(),
            style_name: None,
            horizontal_justification: 0,
            vertical_justification: 0,
            thickness: 0.0,
        }
    }
}

impl TextBody {
    pub(crate) fn rebase(&mut self, origin: Vector2) {
        self.start = self.start.shifted_back(origin);
        self.end = self.end.shifted_back(origin);
    }
}

#[derive(Debug, Clone, Default)]
pub struct Text {
    pub common: EntityCommon,
    pub body: TextBody,
}

impl Entity for Text {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "TEXT"
    }

    fn rebase(&mut self, origin: Vector2) {
        self.body.rebase(origin);
    }
}
