//! Multi-line text entity

use super::{Entity, EntityCommon};
use crate::types::{Vector2, Vector3};

#[derive(Debug, Clone)]
pub struct MText {
    pub common: EntityCommon,
    pub insert_point: Vector3,
    pub nominal_text_height: f64,
    pub reference_width: f64,
    pub attachment_point: i64,
    pub drawing_direction: i64,
    pub style_name: Option<String>,
    /// Text direction; also set from a rotation angle (code 50)
    pub x_axis: Vector3,
    pub horizontal_width: f64,
    pub vertical_height: f64,
    pub line_spacing_style: i64,
    pub line_spacing_factor: f64,
    pub background_fill: i64,
    pub fill_box_scale: f64,
    pub background_fill_color: Option<i64>,
    pub background_transparency: Option<i64>,
    pub column_type: i64,
    pub column_count: i64,
    pub column_flow_reversed: bool,
    pub column_auto_height: bool,
    pub column_width: f64,
    pub column_gutter: f64,
    /// Concatenation of every code 3 chunk and the final code 1 chunk
    pub text: String,
}

impl Default for MText {
    fn default() -> Self {
        MText {
            common: EntityCommon::default(),
            insert_point: Vector3::ZERO,
            nominal_text_height: 0.0,
            reference_width: 0.0,
            attachment_point: 1,
            drawing_direction: 1,
            style_name: None,
            x_axis: Vector3::new(1.0, 0.0, 0.0),
            horizontal_width: 0.0,
            vertical_height: 0.0,
            line_spacing_style: 1,
            line_spacing_factor: 1.0,
            background_fill: 0,
            fill_box_scale: 1.5,
            background_fill_color: None,
            background_transparency: None,
            column_type: 0,
            column_count: 0,
            column_flow_reversed: false,
            column_auto_height: false,
            column_width: 0.0,
            column_gutter: 0.0,
            text: String::new(),
        }
    }
}

impl MText {
    /// Set `x_axis` from a rotation angle in radians
    pub fn set_rotation(&mut self, radians: f64) {
        let (sin, cos) = radians.sin_cos();
        self.x_axis = Vector3::new(cos, sin, 0.0);
    }
}

impl Entity for MText {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "MTEXT"
    }

    fn rebase(&mut self, origin: Vector2) {
        self.insert_point = self.insert_point.shifted_back(origin);
    }
}
