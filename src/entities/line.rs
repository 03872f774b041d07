//! Line entity

use super::{Entity, EntityCommon};
use crate::types::{Vector2, Vector3};

/// A line entity defined by two endpoints
#[derive(Debug, Clone, Default)]
pub struct Line {
    /// Common entity data
    pub common: EntityCommon,
    /// Start point of the line
    pub start: Vector3,
    /// End point of the line
    pub end: Vector3,
    /// Thickness (extrusion in Z direction)
    pub thickness: f64,
}

impl Line {
    /// Create a new line between two points
    pub fn from_points(start: Vector3, end: Vector3) -> Self {
        Line {
            start,
            end,
            ..Default::default()
        }
    }

    /// Create a new line from XY coordinates
    pub fn from_xy(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Line::from_points(Vector3::new(x1, y1, 0.0), Vector3::new(x2, y2, 0.0))
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).length()
    }
}

impl Entity for Line {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "LINE"
    }

    fn rebase(&mut self, origin: Vector2) {
        self.start = self.start.shifted_back(origin);
        self.end = self.end.shifted_back(origin);
    }
}
