//! Entity builders.
//!
//! Each builder folds the records of one entity run (everything after the
//! `0` record naming the type) into a default value of its entity struct.
//! Codes a builder does not claim go to [`apply_common`], so builders only
//! spell out their own geometry.

use super::hatch_reader::build_hatch;
use super::stream_reader::DxfCodePair;
use crate::entities::*;
use crate::error::DxfError;
use crate::notification::NotificationCollection;
use crate::types::Vector3;
use std::str::FromStr;

/// Entity types the ENTITIES and BLOCKS sections understand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Point,
    Line,
    LwPolyline,
    Polyline,
    Vertex,
    SeqEnd,
    Circle,
    Arc,
    Ellipse,
    Spline,
    Solid,
    Face3D,
    Insert,
    MText,
    Text,
    AttributeDefinition,
    AttributeEntity,
    Hatch,
    Dimension,
    Viewport,
}

impl FromStr for EntityKind {
    type Err = DxfError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let kind = match name {
            "POINT" => EntityKind::Point,
            "LINE" => EntityKind::Line,
            "LWPOLYLINE" => EntityKind::LwPolyline,
            "POLYLINE" => EntityKind::Polyline,
            "VERTEX" => EntityKind::Vertex,
            "SEQEND" => EntityKind::SeqEnd,
            "CIRCLE" => EntityKind::Circle,
            "ARC" => EntityKind::Arc,
            "ELLIPSE" => EntityKind::Ellipse,
            "SPLINE" => EntityKind::Spline,
            "SOLID" => EntityKind::Solid,
            "3DFACE" => EntityKind::Face3D,
            "INSERT" => EntityKind::Insert,
            "MTEXT" => EntityKind::MText,
            "TEXT" => EntityKind::Text,
            "ATTDEF" => EntityKind::AttributeDefinition,
            "ATTRIB" => EntityKind::AttributeEntity,
            "HATCH" => EntityKind::Hatch,
            "DIMENSION" => EntityKind::Dimension,
            "VIEWPORT" => EntityKind::Viewport,
            other => return Err(DxfError::InvalidEntityType(other.to_string())),
        };
        Ok(kind)
    }
}

/// Split records into runs that each start at a `0` record.
/// Records before the first `0` belong to no run.
pub(crate) fn split_runs(pairs: &[DxfCodePair]) -> Vec<&[DxfCodePair]> {
    let starts: Vec<usize> = pairs
        .iter()
        .enumerate()
        .filter(|(_, pair)| pair.code == 0)
        .map(|(i, _)| i)
        .collect();
    starts
        .iter()
        .enumerate()
        .map(|(n, &start)| {
            let end = starts.get(n + 1).copied().unwrap_or(pairs.len());
            &pairs[start..end]
        })
        .collect()
}

/// Build the entity list of an ENTITIES section or a block body.
///
/// VERTEX runs are appended to the most recent POLYLINE until a SEQEND
/// closes it. Unknown types and orphan vertices are reported and skipped.
pub(crate) fn read_entities(
    pairs: &[DxfCodePair],
    notifications: &mut NotificationCollection,
) -> Vec<EntityType> {
    let mut entities = Vec::new();
    let mut open_polyline: Option<usize> = None;

    for run in split_runs(pairs) {
        let Some((head, records)) = run.split_first() else {
            continue;
        };
        let kind = match head.as_str().parse::<EntityKind>() {
            Ok(kind) => kind,
            Err(err) => {
                tracing::debug!(%err, "entity skipped");
                notifications.warn(format!(
                    "unsupported type in ENTITIES section: {}",
                    head.as_str()
                ));
                continue;
            }
        };

        match kind {
            EntityKind::Vertex => match open_polyline.and_then(|i| entities.get_mut(i)) {
                Some(EntityType::Polyline(polyline)) => {
                    polyline.vertices.push(build_vertex(records))
                }
                _ => notifications.error("ignoring invalid VERTEX entity"),
            },
            EntityKind::SeqEnd => open_polyline = None,
            EntityKind::Polyline => {
                entities.push(EntityType::Polyline(build_polyline(records)));
                open_polyline = Some(entities.len() - 1);
            }
            other => {
                if let Some(entity) = build_entity(other, records) {
                    entities.push(entity);
                }
            }
        }
    }
    entities
}

/// Build a standalone entity. VERTEX and SEQEND only make sense inside a
/// POLYLINE sequence and yield `None`.
pub fn build_entity(kind: EntityKind, records: &[DxfCodePair]) -> Option<EntityType> {
    let entity = match kind {
        EntityKind::Point => EntityType::Point(build_point(records)),
        EntityKind::Line => EntityType::Line(build_line(records)),
        EntityKind::LwPolyline => EntityType::LwPolyline(build_lwpolyline(records)),
        EntityKind::Polyline => EntityType::Polyline(build_polyline(records)),
        EntityKind::Circle => EntityType::Circle(build_circle(records)),
        EntityKind::Arc => EntityType::Arc(build_arc(records)),
        EntityKind::Ellipse => EntityType::Ellipse(build_ellipse(records)),
        EntityKind::Spline => EntityType::Spline(build_spline(records)),
        EntityKind::Solid => EntityType::Solid(build_solid(records)),
        EntityKind::Face3D => EntityType::Face3D(build_face3d(records)),
        EntityKind::Insert => EntityType::Insert(build_insert(records)),
        EntityKind::MText => EntityType::MText(build_mtext(records)),
        EntityKind::Text => EntityType::Text(build_text(records)),
        EntityKind::AttributeDefinition => {
            EntityType::AttributeDefinition(build_attribute_definition(records))
        }
        EntityKind::AttributeEntity => EntityType::AttributeEntity(build_attribute(records)),
        EntityKind::Hatch => EntityType::Hatch(build_hatch(records)),
        EntityKind::Dimension => EntityType::Dimension(build_dimension(records)),
        EntityKind::Viewport => EntityType::Viewport(build_viewport(records)),
        EntityKind::Vertex | EntityKind::SeqEnd => return None,
    };
    Some(entity)
}

// ---------------------------------------------------------------------------
// Record helpers
// ---------------------------------------------------------------------------

pub(crate) fn set_f64(target: &mut f64, pair: &DxfCodePair) {
    if let Some(v) = pair.as_double() {
        *target = v;
    }
}

pub(crate) fn set_i64(target: &mut i64, pair: &DxfCodePair) {
    if let Some(v) = pair.as_int() {
        *target = v;
    }
}

fn set_degrees_as_radians(target: &mut f64, pair: &DxfCodePair) {
    if let Some(v) = pair.as_double() {
        *target = v.to_radians();
    }
}

fn set_bool(target: &mut bool, pair: &DxfCodePair) {
    if let Some(v) = pair.as_bool() {
        *target = v;
    }
}

fn some_string(pair: &DxfCodePair) -> Option<String> {
    Some(pair.value_string.clone())
}

/// Fields every entity type shares
pub(crate) fn apply_common(common: &mut EntityCommon, pair: &DxfCodePair) {
    match pair.code {
        5 => common.handle = some_string(pair),
        6 => common.line_type_name = some_string(pair),
        8 => common.layer = pair.value_string.clone(),
        48 => common.line_type_scale = pair.as_double(),
        60 => {
            if let Some(v) = pair.as_int() {
                common.visible = v == 0;
            }
        }
        62 => common.color_number = pair.as_int(),
        67 => common.paper_space = pair.as_int().is_some_and(|v| v != 0),
        210 => common.extrusion_x = pair.as_double(),
        220 => common.extrusion_y = pair.as_double(),
        230 => common.extrusion_z = pair.as_double(),
        330 => common.owner_handle = some_string(pair),
        370 => common.line_weight = pair.as_int(),
        420 => common.true_color = pair.as_int(),
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

pub fn build_point(records: &[DxfCodePair]) -> Point {
    records.iter().fold(Point::default(), |mut e, pair| {
        match pair.code {
            10 => set_f64(&mut e.location.x, pair),
            20 => set_f64(&mut e.location.y, pair),
            30 => set_f64(&mut e.location.z, pair),
            39 => set_f64(&mut e.thickness, pair),
            _ => apply_common(&mut e.common, pair),
        }
        e
    })
}

pub fn build_line(records: &[DxfCodePair]) -> Line {
    records.iter().fold(Line::default(), |mut e, pair| {
        match pair.code {
            10 => set_f64(&mut e.start.x, pair),
            20 => set_f64(&mut e.start.y, pair),
            30 => set_f64(&mut e.start.z, pair),
            11 => set_f64(&mut e.end.x, pair),
            21 => set_f64(&mut e.end.y, pair),
            31 => set_f64(&mut e.end.z, pair),
            39 => set_f64(&mut e.thickness, pair),
            _ => apply_common(&mut e.common, pair),
        }
        e
    })
}

/// Code 10 opens a vertex; 20 and 42 complete the last one
pub fn build_lwpolyline(records: &[DxfCodePair]) -> LwPolyline {
    records.iter().fold(LwPolyline::default(), |mut e, pair| {
        match pair.code {
            70 => e.closed = pair.as_int().is_some_and(|flags| flags & 1 == 1),
            10 => e.vertices.push(Vertex::new(pair.as_double().unwrap_or(0.0), 0.0)),
            20 => {
                if let Some(vertex) = e.vertices.last_mut() {
                    set_f64(&mut vertex.y, pair);
                }
            }
            42 => {
                if let Some(vertex) = e.vertices.last_mut() {
                    set_f64(&mut vertex.bulge, pair);
                }
            }
            39 => set_f64(&mut e.thickness, pair),
            _ => apply_common(&mut e.common, pair),
        }
        e
    })
}

/// The POLYLINE header. Its vertices arrive as separate VERTEX runs.
pub fn build_polyline(records: &[DxfCodePair]) -> Polyline {
    records.iter().fold(Polyline::default(), |mut e, pair| {
        match pair.code {
            70 => {
                if let Some(flags) = pair.as_int() {
                    e.flags = PolylineFlags::from_bits_retain(flags as i32);
                }
            }
            39 => set_f64(&mut e.thickness, pair),
            // dummy point, only its z carries the elevation
            10 | 20 | 30 => {}
            _ => apply_common(&mut e.common, pair),
        }
        e
    })
}

/// Vertices carry no common fields
pub fn build_vertex(records: &[DxfCodePair]) -> Vertex {
    records.iter().fold(Vertex::default(), |mut v, pair| {
        match pair.code {
            10 => set_f64(&mut v.x, pair),
            20 => set_f64(&mut v.y, pair),
            30 => set_f64(&mut v.z, pair),
            42 => set_f64(&mut v.bulge, pair),
            code @ 71..=74 => {
                let faces = v.faces.get_or_insert([0; 4]);
                set_i64(&mut faces[(code - 71) as usize], pair);
            }
            _ => {}
        }
        v
    })
}

pub fn build_circle(records: &[DxfCodePair]) -> Circle {
    records.iter().fold(Circle::default(), |mut e, pair| {
        match pair.code {
            10 => set_f64(&mut e.center.x, pair),
            20 => set_f64(&mut e.center.y, pair),
            30 => set_f64(&mut e.center.z, pair),
            40 => set_f64(&mut e.radius, pair),
            39 => set_f64(&mut e.thickness, pair),
            _ => apply_common(&mut e.common, pair),
        }
        e
    })
}

/// Arc angles are written in degrees and stored in radians
pub fn build_arc(records: &[DxfCodePair]) -> Arc {
    records.iter().fold(Arc::default(), |mut e, pair| {
        match pair.code {
            10 => set_f64(&mut e.center.x, pair),
            20 => set_f64(&mut e.center.y, pair),
            30 => set_f64(&mut e.center.z, pair),
            40 => set_f64(&mut e.radius, pair),
            50 => set_degrees_as_radians(&mut e.start_angle, pair),
            51 => set_degrees_as_radians(&mut e.end_angle, pair),
            39 => set_f64(&mut e.thickness, pair),
            _ => apply_common(&mut e.common, pair),
        }
        e
    })
}

pub fn build_ellipse(records: &[DxfCodePair]) -> Ellipse {
    records.iter().fold(Ellipse::default(), |mut e, pair| {
        match pair.code {
            10 => set_f64(&mut e.center.x, pair),
            20 => set_f64(&mut e.center.y, pair),
            30 => set_f64(&mut e.center.z, pair),
            11 => set_f64(&mut e.major_axis.x, pair),
            21 => set_f64(&mut e.major_axis.y, pair),
            31 => set_f64(&mut e.major_axis.z, pair),
            40 => set_f64(&mut e.axis_ratio, pair),
            41 => set_f64(&mut e.start_angle, pair),
            42 => set_f64(&mut e.end_angle, pair),
            _ => apply_common(&mut e.common, pair),
        }
        e
    })
}

pub fn build_spline(records: &[DxfCodePair]) -> Spline {
    records.iter().fold(Spline::default(), |mut e, pair| {
        match pair.code {
            10 => e
                .control_points
                .push(Vector3::new(pair.as_double().unwrap_or(0.0), 0.0, 0.0)),
            20 => {
                if let Some(p) = e.control_points.last_mut() {
                    set_f64(&mut p.y, pair);
                }
            }
            30 => {
                if let Some(p) = e.control_points.last_mut() {
                    set_f64(&mut p.z, pair);
                }
            }
            11 => e
                .fit_points
                .push(Vector3::new(pair.as_double().unwrap_or(0.0), 0.0, 0.0)),
            21 => {
                if let Some(p) = e.fit_points.last_mut() {
                    set_f64(&mut p.y, pair);
                }
            }
            31 => {
                if let Some(p) = e.fit_points.last_mut() {
                    set_f64(&mut p.z, pair);
                }
            }
            40 => {
                if let Some(knot) = pair.as_double() {
                    e.knots.push(knot);
                }
            }
            41 => {
                if let Some(weight) = pair.as_double() {
                    e.weights.get_or_insert_with(Vec::new).push(weight);
                }
            }
            42 => e.knot_tolerance = pair.as_double(),
            43 => e.control_point_tolerance = pair.as_double(),
            44 => e.fit_tolerance = pair.as_double(),
            70 => {
                if let Some(flags) = pair.as_int() {
                    e.flags = SplineFlags::from_bits_retain(flags as i32);
                }
            }
            71 => {
                if let Some(degree) = pair.as_int().and_then(|d| usize::try_from(d).ok()) {
                    e.degree = degree;
                }
            }
            72 => e.number_of_knots = pair.as_int(),
            73 => e.number_of_control_points = pair.as_int(),
            74 => e.number_of_fit_points = pair.as_int(),
            _ => apply_common(&mut e.common, pair),
        }
        e
    })
}

pub fn build_solid(records: &[DxfCodePair]) -> Solid {
    records.iter().fold(Solid::default(), |mut e, pair| {
        match pair.code {
            code @ 10..=13 => set_f64(&mut e.corners[(code - 10) as usize].x, pair),
            code @ 20..=23 => set_f64(&mut e.corners[(code - 20) as usize].y, pair),
            code @ 30..=33 => set_f64(&mut e.corners[(code - 30) as usize].z, pair),
            39 => set_f64(&mut e.thickness, pair),
            _ => apply_common(&mut e.common, pair),
        }
        e
    })
}

pub fn build_face3d(records: &[DxfCodePair]) -> Face3D {
    records.iter().fold(Face3D::default(), |mut e, pair| {
        match pair.code {
            code @ 10..=13 => set_f64(&mut e.vertices[(code - 10) as usize].x, pair),
            code @ 20..=23 => set_f64(&mut e.vertices[(code - 20) as usize].y, pair),
            code @ 30..=33 => set_f64(&mut e.vertices[(code - 30) as usize].z, pair),
            _ => apply_common(&mut e.common, pair),
        }
        e
    })
}

pub fn build_insert(records: &[DxfCodePair]) -> Insert {
    let count = |pair: &DxfCodePair| pair.as_int().and_then(|v| u32::try_from(v).ok());
    records.iter().fold(Insert::default(), |mut e, pair| {
        match pair.code {
            2 => e.block_name = pair.value_string.clone(),
            10 => set_f64(&mut e.insert_point.x, pair),
            20 => set_f64(&mut e.insert_point.y, pair),
            30 => set_f64(&mut e.insert_point.z, pair),
            41 => set_f64(&mut e.x_scale, pair),
            42 => set_f64(&mut e.y_scale, pair),
            43 => set_f64(&mut e.z_scale, pair),
            44 => set_f64(&mut e.column_spacing, pair),
            45 => set_f64(&mut e.row_spacing, pair),
            50 => set_f64(&mut e.rotation, pair),
            70 => {
                if let Some(n) = count(pair) {
                    e.column_count = n;
                }
            }
            71 => {
                if let Some(n) = count(pair) {
                    e.row_count = n;
                }
            }
            _ => apply_common(&mut e.common, pair),
        }
        e
    })
}

/// Codes 1 and 3 are chunks of one string; 50 is the rotation in radians
pub fn build_mtext(records: &[DxfCodePair]) -> MText {
    records.iter().fold(MText::default(), |mut e, pair| {
        match pair.code {
            1 | 3 => e.text.push_str(&pair.value_string),
            10 => set_f64(&mut e.insert_point.x, pair),
            20 => set_f64(&mut e.insert_point.y, pair),
            30 => set_f64(&mut e.insert_point.z, pair),
            11 => set_f64(&mut e.x_axis.x, pair),
            21 => set_f64(&mut e.x_axis.y, pair),
            31 => set_f64(&mut e.x_axis.z, pair),
            40 => set_f64(&mut e.nominal_text_height, pair),
            41 => set_f64(&mut e.reference_width, pair),
            42 => set_f64(&mut e.horizontal_width, pair),
            43 => set_f64(&mut e.vertical_height, pair),
            44 => set_f64(&mut e.line_spacing_factor, pair),
            45 => set_f64(&mut e.fill_box_scale, pair),
            48 => set_f64(&mut e.column_width, pair),
            49 => set_f64(&mut e.column_gutter, pair),
            50 => {
                if let Some(radians) = pair.as_double() {
                    e.set_rotation(radians);
                }
            }
            7 => e.style_name = some_string(pair),
            63 => e.background_fill_color = pair.as_int(),
            71 => set_i64(&mut e.attachment_point, pair),
            72 => set_i64(&mut e.drawing_direction, pair),
            73 => set_i64(&mut e.line_spacing_style, pair),
            75 => set_i64(&mut e.column_type, pair),
            76 => set_i64(&mut e.column_count, pair),
            78 => set_bool(&mut e.column_flow_reversed, pair),
            79 => set_bool(&mut e.column_auto_height, pair),
            90 => set_i64(&mut e.background_fill, pair),
            441 => e.background_transparency = pair.as_int(),
            _ => apply_common(&mut e.common, pair),
        }
        e
    })
}

/// Codes shared by TEXT, ATTDEF and ATTRIB. Returns false for codes that
/// are not part of the text body.
fn apply_text_body(body: &mut TextBody, pair: &DxfCodePair) -> bool {
    match pair.code {
        1 => body.value = pair.value_string.clone(),
        7 => body.style_name = some_string(pair),
        10 => set_f64(&mut body.start.x, pair),
        20 => set_f64(&mut body.start.y, pair),
        30 => set_f64(&mut body.start.z, pair),
        11 => set_f64(&mut body.end.x, pair),
        21 => set_f64(&mut body.end.y, pair),
        31 => set_f64(&mut body.end.z, pair),
        39 => set_f64(&mut body.thickness, pair),
        40 => set_f64(&mut body.height, pair),
        41 => set_f64(&mut body.x_scale, pair),
        50 => set_f64(&mut body.rotation, pair),
        51 => set_f64(&mut body.oblique_angle, pair),
        72 => set_i64(&mut body.horizontal_justification, pair),
        73 => set_i64(&mut body.vertical_justification, pair),
        _ => return false,
    }
    true
}

pub fn build_text(records: &[DxfCodePair]) -> Text {
    records.iter().fold(Text::default(), |mut e, pair| {
        if !apply_text_body(&mut e.body, pair) {
            apply_common(&mut e.common, pair);
        }
        e
    })
}

/// In attribute records 73 is the field length and 74 the vertical
/// justification
pub fn build_attribute_definition(records: &[DxfCodePair]) -> AttributeDefinition {
    records.iter().fold(AttributeDefinition::default(), |mut e, pair| {
        match pair.code {
            2 => e.tag = pair.value_string.clone(),
            3 => e.prompt = pair.value_string.clone(),
            70 => set_i64(&mut e.flags, pair),
            73 => set_i64(&mut e.field_length, pair),
            74 => set_i64(&mut e.body.vertical_justification, pair),
            280 => set_bool(&mut e.lock_position, pair),
            _ => {
                if !apply_text_body(&mut e.body, pair) {
                    apply_common(&mut e.common, pair);
                }
            }
        }
        e
    })
}

pub fn build_attribute(records: &[DxfCodePair]) -> AttributeEntity {
    records.iter().fold(AttributeEntity::default(), |mut e, pair| {
        match pair.code {
            2 => e.tag = pair.value_string.clone(),
            70 => set_i64(&mut e.flags, pair),
            73 => set_i64(&mut e.field_length, pair),
            74 => set_i64(&mut e.body.vertical_justification, pair),
            280 => set_bool(&mut e.lock_position, pair),
            _ => {
                if !apply_text_body(&mut e.body, pair) {
                    apply_common(&mut e.common, pair);
                }
            }
        }
        e
    })
}

pub fn build_dimension(records: &[DxfCodePair]) -> Dimension {
    records.iter().fold(Dimension::default(), |mut e, pair| {
        match pair.code {
            1 => e.text_override = some_string(pair),
            2 => e.block_name = pair.value_string.clone(),
            3 => e.style_name = some_string(pair),
            10 => set_f64(&mut e.definition_point.x, pair),
            20 => set_f64(&mut e.definition_point.y, pair),
            30 => set_f64(&mut e.definition_point.z, pair),
            11 => set_f64(&mut e.text_midpoint.x, pair),
            21 => set_f64(&mut e.text_midpoint.y, pair),
            31 => set_f64(&mut e.text_midpoint.z, pair),
            13 => set_f64(&mut e.first_point.x, pair),
            23 => set_f64(&mut e.first_point.y, pair),
            33 => set_f64(&mut e.first_point.z, pair),
            14 => set_f64(&mut e.second_point.x, pair),
            24 => set_f64(&mut e.second_point.y, pair),
            34 => set_f64(&mut e.second_point.z, pair),
            15 => set_f64(&mut e.arc_point.x, pair),
            25 => set_f64(&mut e.arc_point.y, pair),
            35 => set_f64(&mut e.arc_point.z, pair),
            16 => set_f64(&mut e.arc_line_point.x, pair),
            26 => set_f64(&mut e.arc_line_point.y, pair),
            36 => set_f64(&mut e.arc_line_point.z, pair),
            42 => e.measurement = pair.as_double(),
            50 => set_f64(&mut e.rotation, pair),
            53 => set_f64(&mut e.text_rotation, pair),
            70 => set_i64(&mut e.flags, pair),
            71 => set_i64(&mut e.attachment_point, pair),
            _ => apply_common(&mut e.common, pair),
        }
        e
    })
}

pub fn build_viewport(records: &[DxfCodePair]) -> Viewport {
    records.iter().fold(Viewport::default(), |mut e, pair| {
        match pair.code {
            10 => set_f64(&mut e.center.x, pair),
            20 => set_f64(&mut e.center.y, pair),
            30 => set_f64(&mut e.center.z, pair),
            40 => set_f64(&mut e.width, pair),
            41 => set_f64(&mut e.height, pair),
            68 => set_i64(&mut e.status, pair),
            69 => set_i64(&mut e.id, pair),
            12 => set_f64(&mut e.view_center.x, pair),
            22 => set_f64(&mut e.view_center.y, pair),
            13 => set_f64(&mut e.snap_base.x, pair),
            23 => set_f64(&mut e.snap_base.y, pair),
            14 => set_f64(&mut e.snap_spacing.x, pair),
            24 => set_f64(&mut e.snap_spacing.y, pair),
            15 => set_f64(&mut e.grid_spacing.x, pair),
            25 => set_f64(&mut e.grid_spacing.y, pair),
            16 => set_f64(&mut e.view_direction.x, pair),
            26 => set_f64(&mut e.view_direction.y, pair),
            36 => set_f64(&mut e.view_direction.z, pair),
            17 => set_f64(&mut e.view_target.x, pair),
            27 => set_f64(&mut e.view_target.y, pair),
            37 => set_f64(&mut e.view_target.z, pair),
            45 => set_f64(&mut e.view_height, pair),
            51 => set_f64(&mut e.twist_angle, pair),
            90 => set_i64(&mut e.status_flags, pair),
            _ => apply_common(&mut e.common, pair),
        }
        e
    })
}
