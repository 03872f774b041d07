//! Insert transforms and their composition.
//!
//! A [`Transform`] is what a single INSERT contributes: scale, rotation in
//! degrees, translation, and an optional mirror when the extrusion direction
//! points down the negative Z axis. Flattened entities carry a chain of them,
//! innermost first, and every consumer applies the chain in slice order.
//!
//! Two equivalent forms are provided:
//!
//! - [`Transform::apply`] maps a point step by step: scale X, scale Y,
//!   rotate, translate, then negate X when mirrored.
//! - [`Transform::matrix`] builds the same mapping as a homogeneous 3x3
//!   matrix, which is what bounding boxes and SVG groups use.

use super::{BoundingBox2D, Vector2};
use nalgebra::{Matrix3, Point2};

/// One level of block placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    /// Zero is treated as an absent scale, i.e. 1
    pub scale_x: f64,
    pub scale_y: f64,
    /// Counter-clockwise, degrees
    pub rotation: f64,
    /// Only `-1` has an effect: the result is mirrored about the Y axis
    pub extrusion_z: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            x: 0.0,
            y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
            extrusion_z: 1.0,
        }
    }
}

impl Transform {
    /// Pure translation
    pub fn translation(x: f64, y: f64) -> Self {
        Transform {
            x,
            y,
            ..Default::default()
        }
    }

    /// Pure rotation about the origin, in degrees
    pub fn rotation(degrees: f64) -> Self {
        Transform {
            rotation: degrees,
            ..Default::default()
        }
    }

    pub fn with_scale(mut self, scale_x: f64, scale_y: f64) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    pub fn with_extrusion_z(mut self, extrusion_z: f64) -> Self {
        self.extrusion_z = extrusion_z;
        self
    }

    /// Whether this transform mirrors about the Y axis
    pub fn is_mirrored(&self) -> bool {
        self.extrusion_z == -1.0
    }

    fn effective_scale(&self) -> (f64, f64) {
        let pick = |s: f64| if s == 0.0 { 1.0 } else { s };
        (pick(self.scale_x), pick(self.scale_y))
    }

    /// Map a point through this transform
    pub fn apply(&self, point: Vector2) -> Vector2 {
        let (sx, sy) = self.effective_scale();
        let mut p = Vector2::new(point.x * sx, point.y * sy);
        if self.rotation != 0.0 {
            p = p.rotate(self.rotation.to_radians());
        }
        p = p + Vector2::new(self.x, self.y);
        if self.is_mirrored() {
            p.x = -p.x;
        }
        p
    }

    /// The SVG `matrix(a b c d e f)` coefficients of this transform
    pub fn svg_coefficients(&self) -> [f64; 6] {
        let (sx, sy) = self.effective_scale();
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        if self.is_mirrored() {
            [-sx * cos, sx * sin, sy * sin, sy * cos, -self.x, self.y]
        } else {
            [sx * cos, sx * sin, -sy * sin, sy * cos, self.x, self.y]
        }
    }

    /// Homogeneous matrix acting on column vectors
    pub fn matrix(&self) -> Matrix3<f64> {
        let [a, b, c, d, e, f] = self.svg_coefficients();
        Matrix3::new(a, c, e, b, d, f, 0.0, 0.0, 1.0)
    }
}

/// Apply a transform chain to a point list, chain entries in slice order
pub fn apply_transforms(points: &[Vector2], transforms: &[Transform]) -> Vec<Vector2> {
    points
        .iter()
        .map(|p| transforms.iter().fold(*p, |acc, t| t.apply(acc)))
        .collect()
}

/// Map the four corners of a box through a transform chain and re-derive an
/// axis-aligned box. An invalid box stays invalid.
pub fn transform_bounding_box(bbox: &BoundingBox2D, transforms: &[Transform]) -> BoundingBox2D {
    if !bbox.is_valid() {
        return BoundingBox2D::empty();
    }
    let matrices: Vec<Matrix3<f64>> = transforms.iter().map(Transform::matrix).collect();
    BoundingBox2D::from_points(bbox.corners().iter().map(|corner| {
        let mapped = matrices
            .iter()
            .fold(Point2::new(corner.x, corner.y), |p, m| m.transform_point(&p));
        Vector2::new(mapped.x, mapped.y)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: Vector2, b: Vector2) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn test_rotation_180_negates() {
        let p = apply_transforms(&[Vector2::new(3.0, -2.0)], &[Transform::rotation(180.0)]);
        assert!(close(p[0], Vector2::new(-3.0, 2.0)));
    }

    #[test]
    fn test_order_scale_rotate_translate_mirror() {
        let t = Transform {
            x: 10.0,
            y: 0.0,
            scale_x: 2.0,
            scale_y: 1.0,
            rotation: 90.0,
            extrusion_z: -1.0,
        };
        // (1,0) -> scale (2,0) -> rotate (0,2) -> translate (10,2) -> mirror (-10,2)
        assert!(close(t.apply(Vector2::new(1.0, 0.0)), Vector2::new(-10.0, 2.0)));
    }

    #[test]
    fn test_zero_scale_means_unscaled() {
        let t = Transform::default().with_scale(0.0, 0.0);
        assert!(close(t.apply(Vector2::new(2.0, 3.0)), Vector2::new(2.0, 3.0)));
    }

    #[test]
    fn test_matrix_agrees_with_point_form() {
        let transforms = [
            Transform {
                x: 4.0,
                y: -1.0,
                scale_x: 1.5,
                scale_y: 0.5,
                rotation: 30.0,
                extrusion_z: 1.0,
            },
            Transform {
                x: -2.0,
                y: 7.0,
                scale_x: 1.0,
                scale_y: 2.0,
                rotation: 135.0,
                extrusion_z: -1.0,
            },
        ];
        let p = Vector2::new(1.25, -3.5);
        for t in &transforms {
            let via_matrix = t.matrix().transform_point(&Point2::new(p.x, p.y));
            assert!(close(t.apply(p), Vector2::new(via_matrix.x, via_matrix.y)));
        }
    }

    #[test]
    fn test_bounding_box_chain() {
        let bbox = BoundingBox2D::from_points(vec![Vector2::new(0.0, 0.0), Vector2::new(2.0, 1.0)]);
        let out = transform_bounding_box(&bbox, &[Transform::rotation(90.0), Transform::translation(10.0, 0.0)]);
        assert!(close(out.min, Vector2::new(9.0, 0.0)));
        assert!(close(out.max, Vector2::new(10.0, 2.0)));
    }

    #[test]
    fn test_invalid_box_stays_invalid() {
        let out = transform_bounding_box(&BoundingBox2D::empty(), &[Transform::translation(1.0, 1.0)]);
        assert!(!out.is_valid());
    }
}
