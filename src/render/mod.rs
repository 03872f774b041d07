//! Output stages: flat colored polylines and SVG documents

pub mod color;
pub mod polylines;
pub mod svg;

pub use color::{rgb_for_entity, BY_LAYER};
pub use polylines::{to_polylines, ColoredPolyline, PolylineDocument};
pub use svg::{entity_to_bounds_and_element, to_svg, transform_bounding_box_and_element, BoundsAndElement};
