//! Dimension entity

use super::{Entity, EntityCommon};
use crate::types::Vector3;

/// Dimension kind, from the low three bits of group code 70
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DimensionKind {
    #[default]
    Linear,
    Aligned,
    Angular,
    Diameter,
    Radius,
    Angular3Point,
    Ordinate,
}

impl DimensionKind {
    pub fn from_flags(flags: i64) -> Self {
        match flags & 7 {
            1 => DimensionKind::Aligned,
            2 => DimensionKind::Angular,
            3 => DimensionKind::Diameter,
            4 => DimensionKind::Radius,
            5 => DimensionKind::Angular3Point,
            6 => DimensionKind::Ordinate,
            _ => DimensionKind::Linear,
        }
    }
}

/// A dimension. Its graphics live in the anonymous block `block_name`.
#[derive(Debug, Clone, Default)]
pub struct Dimension {
    pub common: EntityCommon,
    pub block_name: String,
    pub style_name: Option<String>,
    pub definition_point: Vector3,
    pub text_midpoint: Vector3,
    pub first_point: Vector3,
    pub second_point: Vector3,
    pub arc_point: Vector3,
    pub arc_line_point: Vector3,
    pub flags: i64,
    pub attachment_point: i64,
    pub measurement: Option<f64>,
    pub text_override: Option<String>,
    pub rotation: f64,
    pub text_rotation: f64,
}

impl Dimension {
    pub fn kind(&self) -> DimensionKind {
        DimensionKind::from_flags(self.flags)
    }
}

impl Entity for Dimension {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "DIMENSION"
    }
}
