//! Axis-aligned bounding boxes with an explicit validity state

use super::Vector2;
use crate::error::{DxfError, Result};
use std::fmt;

/// 2D bounding box.
///
/// A freshly created box contains no points and is *invalid*: its minimum is
/// `+inf` and its maximum `-inf`. Expanding it by any finite point makes it
/// valid. Invalid boxes must be left out of unions and view boxes, which
/// [`BoundingBox2D::union`] does automatically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox2D {
    /// Minimum point (lower-left corner)
    pub min: Vector2,
    /// Maximum point (upper-right corner)
    pub max: Vector2,
}

impl BoundingBox2D {
    /// An empty, invalid box
    pub const fn empty() -> Self {
        BoundingBox2D {
            min: Vector2::new(f64::INFINITY, f64::INFINITY),
            max: Vector2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Create a box from explicit corners.
    ///
    /// Corners that are not finite, or a minimum lying above the maximum,
    /// are rejected instead of being silently swapped.
    pub fn new(min: Vector2, max: Vector2) -> Result<Self> {
        let finite = [min.x, min.y, max.x, max.y].iter().all(|v| v.is_finite());
        if !finite || min.x > max.x || min.y > max.y {
            return Err(DxfError::InvalidGeometry(format!(
                "bounding box corners {} and {} do not form a box",
                min, max
            )));
        }
        Ok(BoundingBox2D { min, max })
    }

    /// Create a box containing all given points
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vector2>,
    {
        points
            .into_iter()
            .fold(Self::empty(), |bbox, p| bbox.with_point(p))
    }

    /// Whether at least one point has been added
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    /// Expand the box to include a point
    pub fn expand_to_include(&mut self, point: Vector2) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// Builder form of [`expand_to_include`](Self::expand_to_include)
    pub fn with_point(mut self, point: Vector2) -> Self {
        self.expand_to_include(point);
        self
    }

    /// Smallest box containing both; invalid operands are ignored
    pub fn union(&self, other: &BoundingBox2D) -> BoundingBox2D {
        match (self.is_valid(), other.is_valid()) {
            (true, true) => self.with_point(other.min).with_point(other.max),
            (true, false) => *self,
            (false, _) => *other,
        }
    }

    /// The four corners in counter-clockwise order starting at `min`
    pub fn corners(&self) -> [Vector2; 4] {
        [
            self.min,
            Vector2::new(self.max.x, self.min.y),
            self.max,
            Vector2::new(self.min.x, self.max.y),
        ]
    }

    /// Get the width of the bounding box
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Get the height of the bounding box
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

impl Default for BoundingBox2D {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for BoundingBox2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "BBox2D[{} -> {}]", self.min, self.max)
        } else {
            write!(f, "BBox2D[invalid]")
        }
    }
}
