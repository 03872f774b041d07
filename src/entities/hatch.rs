//! Hatch entity: boundary loops plus fill pattern settings

use super::{Entity, EntityCommon, Vertex};
use crate::types::{Vector2, Vector3};
use bitflags::bitflags;

bitflags! {
    /// Boundary path type flags (group code 92)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct BoundaryPathFlags: i32 {
        const EXTERNAL = 1;
        const POLYLINE = 2;
        const DERIVED = 4;
        const TEXTBOX = 8;
        const OUTERMOST = 16;
    }
}

/// One edge of a non-polyline boundary loop. Angles are radians.
#[derive(Debug, Clone, PartialEq)]
pub enum HatchEdge {
    Line {
        start: Vector2,
        end: Vector2,
    },
    CircularArc {
        center: Vector2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counter_clockwise: bool,
    },
    EllipticArc {
        center: Vector2,
        major_axis: Vector2,
        axis_ratio: f64,
        start_angle: f64,
        end_angle: f64,
        counter_clockwise: bool,
    },
    Spline {
        degree: i64,
        rational: bool,
        periodic: bool,
        knots: Vec<f64>,
        control_points: Vec<Vector2>,
        weights: Vec<f64>,
    },
}

impl HatchEdge {
    /// Edge for a code 72 edge type, with zeroed geometry
    pub fn from_type_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(HatchEdge::Line {
                start: Vector2::ZERO,
                end: Vector2::ZERO,
            }),
            2 => Some(HatchEdge::CircularArc {
                center: Vector2::ZERO,
                radius: 0.0,
                start_angle: 0.0,
                end_angle: 0.0,
                counter_clockwise: true,
            }),
            3 => Some(HatchEdge::EllipticArc {
                center: Vector2::ZERO,
                major_axis: Vector2::ZERO,
                axis_ratio: 1.0,
                start_angle: 0.0,
                end_angle: 0.0,
                counter_clockwise: true,
            }),
            4 => Some(HatchEdge::Spline {
                degree: 3,
                rational: false,
                periodic: false,
                knots: Vec::new(),
                control_points: Vec::new(),
                weights: Vec::new(),
            }),
            _ => None,
        }
    }
}

/// A boundary loop: either a polyline (`vertices`) or a list of edges
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryPath {
    pub flags: BoundaryPathFlags,
    pub vertices: Vec<Vertex>,
    pub closed: bool,
    pub has_bulge: bool,
    pub edges: Vec<HatchEdge>,
}

impl BoundaryPath {
    pub fn is_polyline(&self) -> bool {
        self.flags.contains(BoundaryPathFlags::POLYLINE)
    }
}

#[derive(Debug, Clone)]
pub struct Hatch {
    pub common: EntityCommon,
    pub elevation: Vector3,
    pub pattern_name: String,
    pub solid_fill: bool,
    pub associative: bool,
    pub boundary_paths: Vec<BoundaryPath>,
    pub hatch_style: i64,
    pub pattern_type: i64,
    /// Degrees
    pub pattern_angle: f64,
    pub pattern_scale: f64,
    pub seed_points: Vec<Vector2>,
}

impl Default for Hatch {
    fn default() -> Self {
        Hatch {
            common: EntityCommon::default(),
            elevation: Vector3::ZERO,
            pattern_name: String::new(),
            solid_fill: false,
            associative: false,
            boundary_paths: Vec::new(),
            hatch_style: 0,
            pattern_type: 1,
            pattern_angle: 0.0,
            pattern_scale: 1.0,
            seed_points: Vec::new(),
        }
    }
}

impl Entity for Hatch {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "HATCH"
    }
}
