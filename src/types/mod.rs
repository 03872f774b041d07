//! Geometric value types shared by every pipeline stage

pub mod bounds;
pub mod color;
pub mod transform;
pub mod vector;

pub use bounds::BoundingBox2D;
pub use color::{aci_to_rgb, Rgb};
pub use transform::{apply_transforms, transform_bounding_box, Transform};
pub use vector::{Vector2, Vector3};
