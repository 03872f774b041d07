//! SVG output.
//!
//! Circles, arcs and ellipses become native `<circle>`, `<ellipse>` and arc
//! paths, and low-degree non-rational splines become Bezier paths. Every
//! other supported type is drawn as a sampled `<path>`. Each element is
//! wrapped in one `<g transform="matrix(…)">` per insert level, outermost
//! first, and in a group carrying its stroke color.

use super::color::rgb_for_entity;
use crate::denormalise::FlatEntity;
use crate::document::DxfDocument;
use crate::entities::{Arc, Circle, Ellipse, EntityType, Spline};
use crate::error::CurveError;
use crate::geometry::{multiplicity, to_piecewise_bezier, ControlNet};
use crate::notification::NotificationCollection;
use crate::polyline::{entity_to_polyline, PolylineOptions};
use crate::types::{transform_bounding_box, BoundingBox2D, Transform, Vector2};
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt::Write;

/// An SVG fragment and the world-space box it covers
#[derive(Debug, Clone, PartialEq)]
pub struct BoundsAndElement {
    pub bbox: BoundingBox2D,
    pub element: String,
}

/// Render flattened entities as a complete SVG document.
///
/// The viewBox is the union of all valid element boxes with the Y axis
/// flipped; a drawing without geometry gets `0 0 0 0`.
pub fn to_svg(
    document: &DxfDocument,
    entities: &[FlatEntity],
    options: &PolylineOptions,
    notifications: &mut NotificationCollection,
) -> String {
    let mut bbox = BoundingBox2D::empty();
    let mut elements = Vec::with_capacity(entities.len());

    for flat in entities {
        let rgb = rgb_for_entity(&document.tables.layers, &flat.entity, notifications);
        let Some(rendered) = entity_to_bounds_and_element(flat, options, notifications) else {
            continue;
        };
        bbox = bbox.union(&rendered.bbox);
        elements.push(format!(
            "<g stroke=\"{}\">{}</g>",
            rgb.to_stroke_attribute(),
            rendered.element
        ));
    }

    let view_box = if bbox.is_valid() {
        [bbox.min.x, -bbox.max.y, bbox.width(), bbox.height()]
    } else {
        [0.0; 4]
    };
    tracing::debug!(elements = elements.len(), %bbox, "svg rendered");

    format!(
        "<?xml version=\"1.0\"?>\n\
<svg\n  xmlns=\"http://www.w3.org/2000/svg\"\n  xmlns:xlink=\"http://www.w3.org/1999/xlink\" version=\"1.1\"\n  \
preserveAspectRatio=\"xMinYMin meet\"\n  viewBox=\"{} {} {} {}\"\n  width=\"100%\" height=\"100%\"\n>\n  \
<g stroke=\"#000000\" stroke-width=\"0.1%\" fill=\"none\" transform=\"matrix(1,0,0,-1,0,0)\">\n    {}\n  </g>\n</svg>",
        num(view_box[0]),
        num(view_box[1]),
        num(view_box[2]),
        num(view_box[3]),
        elements.join("\n")
    )
}

/// The transformed element for one entity, or `None` (with a warning) for
/// types that have no SVG form and for geometry that yields no points
pub fn entity_to_bounds_and_element(
    flat: &FlatEntity,
    options: &PolylineOptions,
    notifications: &mut NotificationCollection,
) -> Option<BoundsAndElement> {
    let local = match &flat.entity {
        EntityType::Circle(circle) => flip_x_if_mirrored(&flat.entity, circle_element(circle)),
        EntityType::Ellipse(ellipse) => flip_x_if_mirrored(&flat.entity, ellipse_element(ellipse)),
        EntityType::Arc(arc) => flip_x_if_mirrored(&flat.entity, arc_element(arc)),
        EntityType::Spline(spline) if is_bezier_candidate(spline) => match bezier_element(spline) {
            Ok(rendered) => rendered,
            Err(err) => {
                tracing::debug!(%err, "spline drawn as polyline");
                polyline_element(&flat.entity, options, notifications)?
            }
        },
        EntityType::Spline(_) | EntityType::Line(_) | EntityType::LwPolyline(_) | EntityType::Polyline(_) => {
            polyline_element(&flat.entity, options, notifications)?
        }
        other => {
            notifications.warn(format!(
                "entity type not supported in SVG rendering: {}",
                other.type_name()
            ));
            return None;
        }
    };
    Some(transform_bounding_box_and_element(local.bbox, &local.element, &flat.transforms))
}

/// Apply a transform chain to a box and an element.
///
/// The box goes through the chain in slice order. The element is wrapped
/// in one group per transform, with the last transform outermost, so the
/// first transform is applied first.
pub fn transform_bounding_box_and_element(
    bbox: BoundingBox2D,
    element: &str,
    transforms: &[Transform],
) -> BoundsAndElement {
    let mut wrapped = String::with_capacity(element.len() + transforms.len() * 48);
    for transform in transforms.iter().rev() {
        let [a, b, c, d, e, f] = transform.svg_coefficients();
        let _ = write!(
            wrapped,
            "<g transform=\"matrix({} {} {} {} {} {})\">",
            num(a),
            num(b),
            num(c),
            num(d),
            num(e),
            num(f)
        );
    }
    wrapped.push_str(element);
    for _ in transforms {
        wrapped.push_str("</g>");
    }

    BoundsAndElement {
        bbox: transform_bounding_box(&bbox, transforms),
        element: wrapped,
    }
}

/// Number formatting for attribute values; negative zero prints as `0`
/// and very small or very large magnitudes use exponent notation
fn num(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude < 1e-6 || magnitude >= 1e21 {
        format!("{:e}", value)
    } else {
        format!("{}", value)
    }
}

fn flip_x_if_mirrored(entity: &EntityType, rendered: BoundsAndElement) -> BoundsAndElement {
    if !entity.as_entity().is_mirrored() {
        return rendered;
    }
    let bbox = if rendered.bbox.is_valid() {
        BoundingBox2D::from_points([
            Vector2::new(-rendered.bbox.min.x, rendered.bbox.min.y),
            Vector2::new(-rendered.bbox.max.x, rendered.bbox.max.y),
        ])
    } else {
        rendered.bbox
    };
    BoundsAndElement {
        bbox,
        element: format!(
            "<g transform=\"matrix(-1 0 0 1 0 0)\">\n        {}\n      </g>",
            rendered.element
        ),
    }
}

/// `None` when the entity yields no points; the converter has already
/// reported why
fn polyline_element(
    entity: &EntityType,
    options: &PolylineOptions,
    notifications: &mut NotificationCollection,
) -> Option<BoundsAndElement> {
    let vertices = entity_to_polyline(entity, options, notifications);
    if vertices.is_empty() {
        return None;
    }
    let mut d = String::with_capacity(vertices.len() * 16);
    for (i, p) in vertices.iter().enumerate() {
        let _ = write!(d, "{}{},{}", if i == 0 { 'M' } else { 'L' }, num(p.x), num(p.y));
    }
    Some(BoundsAndElement {
        bbox: BoundingBox2D::from_points(vertices),
        element: format!("<path d=\"{}\" />", d),
    })
}

fn circle_element(circle: &Circle) -> BoundsAndElement {
    let (x, y, r) = (circle.center.x, circle.center.y, circle.radius);
    BoundsAndElement {
        bbox: BoundingBox2D::from_points([Vector2::new(x + r, y + r), Vector2::new(x - r, y - r)]),
        element: format!("<circle cx=\"{}\" cy=\"{}\" r=\"{}\" />", num(x), num(y), num(r)),
    }
}

fn ellipse_element(ellipse: &Ellipse) -> BoundsAndElement {
    ellipse_or_arc(
        ellipse.center.xy(),
        ellipse.major_axis.xy(),
        ellipse.axis_ratio,
        ellipse.start_angle,
        ellipse.end_angle,
    )
}

/// An arc is an ellipse with a unit axis ratio and its major axis along +X
fn arc_element(arc: &Arc) -> BoundsAndElement {
    ellipse_or_arc(
        arc.center.xy(),
        Vector2::new(arc.radius, 0.0),
        1.0,
        arc.start_angle,
        arc.end_angle,
    )
}

fn ellipse_or_arc(center: Vector2, major: Vector2, axis_ratio: f64, start: f64, end: f64) -> BoundsAndElement {
    let rx = major.length();
    let ry = axis_ratio * rx;
    let rotation = -(-major.y).atan2(major.x);
    let bbox = ellipse_bounds(center, major, axis_ratio, start, end);

    let full = (start - end).abs() < 1e-9 || (start - end + TAU).abs() < 1e-9;
    let element = if full {
        // arc paths whose ends coincide do not render
        format!(
            "<g transform=\"rotate({} {}, {})\">\n      <ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\" />\n    </g>",
            num(rotation.to_degrees()),
            num(center.x),
            num(center.y),
            num(center.x),
            num(center.y),
            num(rx),
            num(ry)
        )
    } else {
        let point_at = |angle: f64| center + Vector2::new(angle.cos() * rx, angle.sin() * ry).rotate(rotation);
        let (from, to) = (point_at(start), point_at(end));
        let sweep = if end < start { end + TAU - start } else { end - start };
        let large_arc = if sweep < PI { 0 } else { 1 };
        format!(
            "<path d=\"M {} {} A {} {} {} {} 1 {} {}\" />",
            num(from.x),
            num(from.y),
            num(rx),
            num(ry),
            num(rotation.to_degrees()),
            large_arc,
            num(to.x),
            num(to.y)
        )
    };
    BoundsAndElement { bbox, element }
}

/// Box of an elliptical arc: its two end points plus every axis extremum
/// that lies within the sweep
fn ellipse_bounds(center: Vector2, major: Vector2, axis_ratio: f64, start: f64, end: f64) -> BoundingBox2D {
    if !(start.is_finite() && end.is_finite()) {
        return BoundingBox2D::empty();
    }
    // shift both ends by whole turns so the start lies in [0, 2π)
    let reduced = start.rem_euclid(TAU);
    let end = wrap_above(end - (start - reduced), reduced, false);
    let start = reduced;

    let candidates = if major.x.abs() < 1e-12 || major.y.abs() < 1e-12 {
        [0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2]
    } else {
        let a0 = (-major.y * axis_ratio / major.x).atan() - PI;
        let a1 = (major.x * axis_ratio / major.y).atan() - PI;
        [a0, a1, a0 - PI, a1 - PI]
    };
    let mut angles: Vec<f64> = candidates
        .iter()
        .map(|&angle| wrap_above(angle, start, true))
        .filter(|&angle| angle <= end)
        .collect();
    angles.push(start);
    angles.push(end);

    BoundingBox2D::from_points(angles.into_iter().map(|angle| {
        let (sin, cos) = angle.sin_cos();
        Vector2::new(
            cos * major.x - sin * major.y * axis_ratio + center.x,
            cos * major.y + sin * major.x * axis_ratio + center.y,
        )
    }))
}

/// Add whole turns to `angle` until it is above `floor` (or equal, when
/// `inclusive`)
fn wrap_above(angle: f64, floor: f64, inclusive: bool) -> f64 {
    let below = |a: f64| if inclusive { a < floor } else { a <= floor };
    if !below(angle) {
        return angle;
    }
    let wrapped = floor + (angle - floor).rem_euclid(TAU);
    if below(wrapped) {
        wrapped + TAU
    } else {
        wrapped
    }
}

fn is_bezier_candidate(spline: &Spline) -> bool {
    matches!(spline.degree, 2 | 3) && !spline.is_rational()
}

fn bezier_element(spline: &Spline) -> Result<BoundsAndElement, CurveError> {
    let control_points = spline.control_points_2d();
    let bbox = BoundingBox2D::from_points(control_points.iter().copied());
    let k = spline.degree + 1;
    let net = ControlNet::new(control_points, spline.knots.clone());
    let piecewise = to_piecewise_bezier(k, &net)?;
    let paths = piecewise_to_paths(k, &piecewise)?;
    Ok(BoundsAndElement {
        bbox,
        element: format!("<g>{}</g>", paths.concat()),
    })
}

/// One `<path>` per Bezier segment of a spline already in piecewise form
pub fn piecewise_to_paths(k: usize, net: &ControlNet) -> Result<Vec<String>, CurveError> {
    let knots = &net.knots;
    let mut paths = Vec::new();
    let mut control_point_index = 0;
    let mut knot_index = k;
    while knot_index + k < knots.len() + 1 {
        let m = multiplicity(knots, knot_index);
        let cp = net
            .control_points
            .get(control_point_index..control_point_index + k)
            .ok_or(CurveError::MissingControlPoint((control_point_index + k - 1) as isize))?;
        let command = match k {
            4 => Some('C'),
            3 => Some('Q'),
            _ => None,
        };
        if let Some(command) = command {
            let mut d = format!("M {} {} {}", num(cp[0].x), num(cp[0].y), command);
            for p in &cp[1..] {
                let _ = write!(d, " {} {}", num(p.x), num(p.y));
            }
            paths.push(format!("<path d=\"{}\" />", d));
        }
        control_point_index += m;
        knot_index += m;
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Line, LwPolyline, Text};
    use crate::notification::NotificationType;
    use crate::tables::Layer;
    use crate::types::Vector3;

    fn render(entity: EntityType, transforms: Vec<Transform>) -> (Option<BoundsAndElement>, NotificationCollection) {
        let mut notifications = NotificationCollection::new();
        let flat = FlatEntity { entity, transforms };
        let out = entity_to_bounds_and_element(&flat, &PolylineOptions::default(), &mut notifications);
        (out, notifications)
    }

    #[test]
    fn test_number_format() {
        assert_eq!(num(-0.0), "0");
        assert_eq!(num(1.0), "1");
        assert_eq!(num(-2.5), "-2.5");
        assert_eq!(num(6.123233995736766e-17), "6.123233995736766e-17");
    }

    #[test]
    fn test_circle() {
        let (out, _) = render(EntityType::Circle(Circle::new(Vector3::new(1.0, 2.0, 0.0), 3.0)), vec![]);
        let out = out.unwrap();
        assert_eq!(out.element, "<circle cx=\"1\" cy=\"2\" r=\"3\" />");
        assert_eq!(out.bbox.min, Vector2::new(-2.0, -1.0));
        assert_eq!(out.bbox.max, Vector2::new(4.0, 5.0));
    }

    #[test]
    fn test_mirrored_circle() {
        let mut circle = Circle::new(Vector3::new(5.0, 0.0, 0.0), 1.0);
        circle.common.extrusion_z = Some(-1.0);
        let (out, _) = render(EntityType::Circle(circle), vec![]);
        let out = out.unwrap();
        assert_eq!(
            out.element,
            "<g transform=\"matrix(-1 0 0 1 0 0)\">\n        <circle cx=\"5\" cy=\"0\" r=\"1\" />\n      </g>"
        );
        assert_eq!(out.bbox.min, Vector2::new(-6.0, -1.0));
        assert_eq!(out.bbox.max, Vector2::new(-4.0, 1.0));
    }

    #[test]
    fn test_quarter_arc_path() {
        let (out, _) = render(EntityType::Arc(Arc::new(Vector3::ZERO, 1.0, 0.0, FRAC_PI_2)), vec![]);
        let out = out.unwrap();
        assert_eq!(out.element, "<path d=\"M 1 0 A 1 1 0 0 1 6.123233995736766e-17 1\" />");
        assert!((out.bbox.max - Vector2::new(1.0, 1.0)).length() < 1e-12);
        assert!(out.bbox.min.length() < 1e-12);
    }

    #[test]
    fn test_large_arc_flag() {
        let (out, _) = render(EntityType::Arc(Arc::new(Vector3::ZERO, 1.0, 0.0, 1.5 * PI)), vec![]);
        let out = out.unwrap();
        assert!(out.element.contains(" A 1 1 0 1 1 "));
        assert!((out.bbox.min - Vector2::new(-1.0, -1.0)).length() < 1e-12);
    }

    #[test]
    fn test_full_ellipse() {
        let ellipse = Ellipse {
            center: Vector3::new(1.0, 2.0, 0.0),
            major_axis: Vector3::new(2.0, 0.0, 0.0),
            axis_ratio: 0.5,
            ..Default::default()
        };
        let (out, _) = render(EntityType::Ellipse(ellipse), vec![]);
        let out = out.unwrap();
        assert_eq!(
            out.element,
            "<g transform=\"rotate(0 1, 2)\">\n      <ellipse cx=\"1\" cy=\"2\" rx=\"2\" ry=\"1\" />\n    </g>"
        );
        assert!((out.bbox.min - Vector2::new(-1.0, 1.0)).length() < 1e-12);
        assert!((out.bbox.max - Vector2::new(3.0, 3.0)).length() < 1e-12);
    }

    #[test]
    fn test_rotated_ellipse_bounds() {
        // major axis along the diagonal: the box is wider than the axes' ends
        let ellipse = Ellipse {
            major_axis: Vector3::new(2.0, 2.0, 0.0),
            axis_ratio: 0.5,
            ..Default::default()
        };
        let bbox = ellipse_element(&ellipse).bbox;
        // half extent sqrt(a²cos²45° + b²sin²45°) with a = 2√2, b = √2
        assert!((bbox.max.x - 5f64.sqrt()).abs() < 1e-9);
        assert!((bbox.max.y - 5f64.sqrt()).abs() < 1e-9);
        assert!((bbox.max.x + bbox.min.x).abs() < 1e-9);
    }

    #[test]
    fn test_line_path_with_transform() {
        let (out, _) = render(
            EntityType::Line(Line::from_xy(0.0, 0.0, 1.0, 2.0)),
            vec![Transform::translation(10.0, 5.0), Transform::rotation(90.0)],
        );
        let out = out.unwrap();
        assert!(out.element.starts_with("<g transform=\"matrix(6.123233995736766e-17 1 -1 6.123233995736766e-17 0 0)\"><g transform=\"matrix(1 0 0 1 10 5)\"><path d=\"M0,0L1,2\" />"));
        assert!(out.element.ends_with("</g></g>"));
        // (0,0) -> (10,5) -> (-5,10); (1,2) -> (11,7) -> (-7,11)
        assert!((out.bbox.min - Vector2::new(-7.0, 10.0)).length() < 1e-9);
        assert!((out.bbox.max - Vector2::new(-5.0, 11.0)).length() < 1e-9);
    }

    #[test]
    fn test_cubic_spline_becomes_bezier() {
        let spline = Spline {
            degree: 3,
            knots: vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0],
            control_points: vec![
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(1.0, 2.0, 0.0),
                Vector3::new(3.0, 2.0, 0.0),
                Vector3::new(4.0, 0.0, 0.0),
            ],
            ..Default::default()
        };
        let (out, _) = render(EntityType::Spline(spline), vec![]);
        let out = out.unwrap();
        assert_eq!(out.element, "<g><path d=\"M 0 0 C 1 2 3 2 4 0\" /></g>");
        assert_eq!(out.bbox.max, Vector2::new(4.0, 2.0));
    }

    #[test]
    fn test_quadratic_spline_with_interior_knot() {
        let spline = Spline {
            degree: 2,
            knots: vec![0.0, 0.0, 0.0, 1.0, 2.0, 2.0, 2.0],
            control_points: vec![
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(2.0, 2.0, 0.0),
                Vector3::new(4.0, 2.0, 0.0),
                Vector3::new(6.0, 0.0, 0.0),
            ],
            ..Default::default()
        };
        let (out, _) = render(EntityType::Spline(spline), vec![]);
        assert_eq!(
            out.unwrap().element,
            "<g><path d=\"M 0 0 Q 2 2 3 2\" /><path d=\"M 3 2 Q 4 2 6 0\" /></g>"
        );
    }

    #[test]
    fn test_unpinned_spline_falls_back_to_polyline() {
        let spline = Spline {
            degree: 2,
            knots: vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
            control_points: vec![
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(1.0, 1.0, 0.0),
                Vector3::new(2.0, 0.0, 0.0),
            ],
            ..Default::default()
        };
        let (out, _) = render(EntityType::Spline(spline), vec![]);
        assert!(out.unwrap().element.starts_with("<path d=\"M"));
    }

    #[test]
    fn test_huge_ellipse_parameters_terminate() {
        let ellipse = Ellipse {
            major_axis: Vector3::new(2.0, 0.0, 0.0),
            axis_ratio: 0.5,
            start_angle: 1e17,
            end_angle: 100000000000000016.0,
            ..Default::default()
        };
        let (out, _) = render(EntityType::Ellipse(ellipse), vec![]);
        let bbox = out.unwrap().bbox;
        assert!(bbox.is_valid());
        assert!(bbox.max.x <= 2.0 + 1e-9 && bbox.min.x >= -2.0 - 1e-9);

        let arc = Arc::new(Vector3::ZERO, 1.0, -1e17, 1e9);
        let (out, _) = render(EntityType::Arc(arc), vec![]);
        assert!(out.unwrap().element.starts_with("<path d=\"M"));
    }

    #[test]
    fn test_wrap_above() {
        assert_eq!(wrap_above(1.0, 0.5, true), 1.0);
        assert!((wrap_above(-PI, 0.0, true) - PI).abs() < 1e-12);
        assert!((wrap_above(0.0, 0.0, false) - TAU).abs() < 1e-12);
        assert_eq!(wrap_above(0.0, 0.0, true), 0.0);
        let far = wrap_above(-1e17, 3.0, true);
        assert!((3.0..3.0 + TAU + 1e-9).contains(&far));
    }

    #[test]
    fn test_empty_geometry_has_no_element() {
        let (out, notifications) = render(EntityType::LwPolyline(LwPolyline::default()), vec![]);
        assert!(out.is_none());
        assert!(notifications.mentions("Polyline entity with no vertices"));

        let broken = Spline {
            degree: 4,
            knots: vec![0.0, 1.0],
            control_points: vec![Vector3::ZERO; 5],
            ..Default::default()
        };
        let (out, notifications) = render(EntityType::Spline(broken), vec![]);
        assert!(out.is_none());
        assert!(notifications.mentions("SPLINE could not be interpolated"));
    }

    #[test]
    fn test_unsupported_type() {
        let (out, notifications) = render(EntityType::Text(Text::default()), vec![]);
        assert!(out.is_none());
        assert!(notifications.mentions("entity type not supported in SVG rendering: TEXT"));
        assert!(notifications.has_type(NotificationType::Warning));
    }

    #[test]
    fn test_document() {
        let mut document = DxfDocument::new();
        document.tables.layers.insert(Layer::new("0").with_color(7));
        let entities = vec![FlatEntity::untransformed(EntityType::Line(Line::from_xy(
            0.0, 0.0, 10.0, 5.0,
        )))];
        let mut notifications = NotificationCollection::new();
        let svg = to_svg(&document, &entities, &PolylineOptions::default(), &mut notifications);
        assert!(svg.starts_with("<?xml version=\"1.0\"?>\n<svg\n"));
        assert!(svg.contains("viewBox=\"0 -5 10 5\""));
        // white is drawn black
        assert!(svg.contains("<g stroke=\"rgb(0, 0, 0)\"><path d=\"M0,0L10,5\" /></g>"));
        assert!(svg.ends_with("\n  </g>\n</svg>"));
    }

    #[test]
    fn test_empty_document_view_box() {
        let mut notifications = NotificationCollection::new();
        let svg = to_svg(&DxfDocument::new(), &[], &PolylineOptions::default(), &mut notifications);
        assert!(svg.contains("viewBox=\"0 0 0 0\""));
    }
}
