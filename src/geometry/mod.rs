//! Curve sampling and conversion.
//!
//! Everything here works on plain [`Vector2`](crate::types::Vector2) lists
//! and knows nothing about entities; the polyline converter and the SVG
//! renderer pick the pieces they need.

pub mod bezier;
pub mod bspline;
pub mod bulge;
pub mod ellipse;
pub mod knot_insertion;
pub mod polyface;

pub use bezier::{check_pinned, compute_insertions, multiplicity, to_piecewise_bezier};
pub use bspline::{b_spline, interpolate_b_spline};
pub use bulge::{create_arc_for_lw_polyline, ARC_RESOLUTION_DEGREES};
pub use ellipse::{interpolate_ellipse, ELLIPSE_STEPS};
pub use knot_insertion::{insert_knot, ControlNet};
pub use polyface::polyface_outline;
