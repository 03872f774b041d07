//! Conversion of a single entity to a list of 2D points.
//!
//! Curves are sampled: circles, arcs and ellipses every 5 degrees of
//! parameter, polyline bulges every 5 degrees around the arc center and
//! splines a fixed number of times per knot span. The result is in the
//! entity's own coordinates; insert transforms are applied by the caller.

use crate::entities::{Ellipse, EntityType, Polyline, Spline, Vertex};
use crate::geometry::{create_arc_for_lw_polyline, interpolate_b_spline, interpolate_ellipse, polyface_outline};
use crate::notification::{NotificationCollection, NotificationType};
use crate::types::Vector2;
use std::f64::consts::TAU;

/// Sampling density for curve interpolation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolylineOptions {
    /// Samples per spline knot span, minus one
    pub interpolations_per_segment: usize,
}

impl Default for PolylineOptions {
    fn default() -> Self {
        PolylineOptions {
            interpolations_per_segment: 25,
        }
    }
}

/// Points approximating `entity`.
///
/// Unsupported entity types produce an empty list and a warning.
pub fn entity_to_polyline(
    entity: &EntityType,
    options: &PolylineOptions,
    notifications: &mut NotificationCollection,
) -> Vec<Vector2> {
    let mirrored = entity.as_entity().is_mirrored();
    let points = match entity {
        EntityType::Line(line) => vec![line.start.xy(), line.end.xy()],
        EntityType::LwPolyline(lw) => vertex_polyline(&lw.vertices, lw.closed, notifications),
        EntityType::Polyline(polyline) => heavy_polyline(polyline, notifications),
        EntityType::Circle(circle) => {
            interpolate_ellipse(circle.center.xy(), circle.radius, circle.radius, 0.0, TAU, 0.0)
        }
        EntityType::Ellipse(ellipse) => ellipse_points(ellipse),
        EntityType::Arc(arc) => interpolate_ellipse(
            arc.center.xy(),
            arc.radius,
            arc.radius,
            arc.start_angle,
            arc.end_angle,
            0.0,
        ),
        EntityType::Spline(spline) => spline_points(spline, options, notifications),
        other => {
            notifications.warn(format!(
                "unsupported entity for converting to polyline: {}",
                other.type_name()
            ));
            return Vec::new();
        }
    };

    let curved = matches!(
        entity,
        EntityType::Circle(_) | EntityType::Ellipse(_) | EntityType::Arc(_)
    );
    if curved && points.is_empty() {
        notifications.warn(format!(
            "{} has non-finite angles and was not interpolated",
            entity.type_name()
        ));
    }
    if curved && mirrored {
        points.into_iter().map(|p| Vector2::new(-p.x, p.y)).collect()
    } else {
        points
    }
}

fn heavy_polyline(polyline: &Polyline, notifications: &mut NotificationCollection) -> Vec<Vector2> {
    if polyline.is_polyface_mesh() {
        // a single path is returned, so only the first outline is kept
        return polyface_outline(&polyline.vertices)
            .into_iter()
            .next()
            .unwrap_or_default();
    }
    if polyline.is_polygon_mesh() {
        notifications.notify(NotificationType::NotSupported, "polygon meshes are not rendered");
        return Vec::new();
    }
    vertex_polyline(&polyline.vertices, polyline.is_closed(), notifications)
}

/// Straight segments between the vertices, with bulge arcs in between
fn vertex_polyline(vertices: &[Vertex], closed: bool, notifications: &mut NotificationCollection) -> Vec<Vector2> {
    let Some(first) = vertices.first() else {
        notifications.warn("Polyline entity with no vertices");
        return Vec::new();
    };

    let ring: Vec<&Vertex> = if closed {
        vertices.iter().chain(std::iter::once(first)).collect()
    } else {
        vertices.iter().collect()
    };

    let mut points = Vec::with_capacity(ring.len());
    let pairs = ring.len().saturating_sub(1);
    for (i, pair) in ring.windows(2).enumerate() {
        let (from, to) = (pair[0].point(), pair[1].point());
        points.push(from);
        if pair[0].bulge != 0.0 {
            points.extend(create_arc_for_lw_polyline(from, to, pair[0].bulge));
        }
        if i + 1 == pairs {
            points.push(to);
        }
    }
    points
}

fn ellipse_points(ellipse: &Ellipse) -> Vec<Vector2> {
    let rx = ellipse.major_radius();
    interpolate_ellipse(
        ellipse.center.xy(),
        rx,
        ellipse.axis_ratio * rx,
        ellipse.start_angle,
        ellipse.end_angle,
        ellipse.rotation(),
    )
}

fn spline_points(spline: &Spline, options: &PolylineOptions, notifications: &mut NotificationCollection) -> Vec<Vector2> {
    let control_points = spline.control_points_2d();
    match interpolate_b_spline(
        &control_points,
        spline.degree,
        &spline.knots,
        options.interpolations_per_segment,
        spline.weights.as_deref(),
    ) {
        Ok(points) => points,
        Err(err) => {
            notifications.warn(format!("SPLINE could not be interpolated: {}", err));
            Vec::new()
        }
    }
}
