//! Insert entity (block reference)

use crate::entities::{Entity, EntityCommon};
use crate::types::{Transform, Vector2, Vector3};

/// Insert entity - a reference to a block definition
///
/// Places the block's entities at `insert_point`, scaled and rotated, and
/// optionally repeated as a rectangular array of `row_count` by
/// `column_count` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub common: EntityCommon,
    /// Name of the referenced block
    pub block_name: String,
    pub insert_point: Vector3,
    pub x_scale: f64,
    pub y_scale: f64,
    pub z_scale: f64,
    /// Rotation angle in degrees
    pub rotation: f64,
    pub column_count: u32,
    pub row_count: u32,
    pub column_spacing: f64,
    pub row_spacing: f64,
}

impl Default for Insert {
    fn default() -> Self {
        Insert::new("", Vector3::ZERO)
    }
}

impl Insert {
    /// Create a new insert entity
    pub fn new(block_name: impl Into<String>, insert_point: Vector3) -> Self {
        Self {
            common: EntityCommon::default(),
            block_name: block_name.into(),
            insert_point,
            x_scale: 1.0,
            y_scale: 1.0,
            z_scale: 1.0,
            rotation: 0.0,
            column_count: 1,
            row_count: 1,
            column_spacing: 0.0,
            row_spacing: 0.0,
        }
    }

    /// Builder: Set the scale factors
    pub fn with_scale(mut self, x: f64, y: f64, z: f64) -> Self {
        self.x_scale = x;
        self.y_scale = y;
        self.z_scale = z;
        self
    }

    /// Builder: Set the rotation angle in degrees
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Builder: Make this a rectangular array
    pub fn with_array(mut self, rows: u32, columns: u32, row_spacing: f64, column_spacing: f64) -> Self {
        self.row_count = rows;
        self.column_count = columns;
        self.row_spacing = row_spacing;
        self.column_spacing = column_spacing;
        self
    }

    pub fn is_array(&self) -> bool {
        self.row_count > 1 || self.column_count > 1
    }

    /// Row and column step vectors of the array.
    ///
    /// Both follow the insert's rotation but ignore its scale. A plain insert
    /// has zero steps.
    pub fn array_steps(&self) -> (Vector2, Vector2) {
        if !self.is_array() {
            return (Vector2::ZERO, Vector2::ZERO);
        }
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let row = Vector2::new(-sin * self.row_spacing, cos * self.row_spacing);
        let column = Vector2::new(cos * self.column_spacing, sin * self.column_spacing);
        (row, column)
    }

    /// Transform of the array cell at (`row`, `column`)
    pub fn cell_transform(&self, row: u32, column: u32) -> Transform {
        let (row_step, column_step) = self.array_steps();
        let offset = row_step * row as f64 + column_step * column as f64;
        Transform {
            x: self.insert_point.x + offset.x,
            y: self.insert_point.y + offset.y,
            scale_x: self.x_scale,
            scale_y: self.y_scale,
            rotation: self.rotation,
            extrusion_z: self.common.extrusion_z.unwrap_or(1.0),
        }
    }
}

impl Entity for Insert {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "INSERT"
    }

    fn rebase(&mut self, origin: Vector2) {
        self.insert_point = self.insert_point.shifted_back(origin);
    }
}
