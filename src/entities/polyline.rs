//! POLYLINE entity and the vertex record shared with LWPOLYLINE

use super::{Entity, EntityCommon};
use crate::types::{Vector2, Vector3};
use bitflags::bitflags;

bitflags! {
    /// POLYLINE flags (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PolylineFlags: i32 {
        const CLOSED = 1;
        const CURVE_FIT = 2;
        const SPLINE_FIT = 4;
        const POLYLINE_3D = 8;
        const POLYGON_MESH = 16;
        const CLOSED_N = 32;
        const POLYFACE_MESH = 64;
        const LINETYPE_CONTINUOUS = 128;
    }
}

/// A polyline vertex.
///
/// For polyface meshes a vertex either holds a point, or (when `faces` is
/// set) up to four 1-based vertex indices describing a face. A negative
/// index marks the edge starting at that vertex as hidden, and 0 ends the
/// list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// tan(included angle / 4) of the arc to the next vertex; 0 is straight
    pub bulge: f64,
    pub faces: Option<[i64; 4]>,
}

impl Vertex {
    pub fn new(x: f64, y: f64) -> Self {
        Vertex {
            x,
            y,
            ..Default::default()
        }
    }

    pub fn with_bulge(mut self, bulge: f64) -> Self {
        self.bulge = bulge;
        self
    }

    pub fn face(indices: [i64; 4]) -> Self {
        Vertex {
            faces: Some(indices),
            ..Default::default()
        }
    }

    pub fn point(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    pub(crate) fn rebase(&mut self, origin: Vector2) {
        self.x -= origin.x;
        self.y -= origin.y;
    }
}

impl From<Vector3> for Vertex {
    fn from(p: Vector3) -> Self {
        Vertex {
            x: p.x,
            y: p.y,
            z: p.z,
            ..Default::default()
        }
    }
}

/// A heavy polyline whose vertices arrive as separate VERTEX records
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    pub common: EntityCommon,
    pub flags: PolylineFlags,
    pub vertices: Vec<Vertex>,
    pub thickness: f64,
}

impl Polyline {
    pub fn is_closed(&self) -> bool {
        self.flags.contains(PolylineFlags::CLOSED)
    }

    pub fn is_polygon_mesh(&self) -> bool {
        self.flags.contains(PolylineFlags::POLYGON_MESH)
    }

    pub fn is_polyface_mesh(&self) -> bool {
        self.flags.contains(PolylineFlags::POLYFACE_MESH)
    }
}

impl Entity for Polyline {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "POLYLINE"
    }

    fn rebase(&mut self, origin: Vector2) {
        self.vertices.iter_mut().for_each(|v| v.rebase(origin));
    }
}
