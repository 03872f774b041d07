//! HATCH records.
//!
//! Unlike the other entity types, the meaning of a hatch code depends on
//! where it appears: `10` is the elevation point in the header, a vertex in a
//! polyline loop, an edge coordinate in an edge loop and a seed point at the
//! end. The fold therefore carries a small cursor next to the entity.

use super::entity_reader::{apply_common, set_f64, set_i64};
use super::stream_reader::DxfCodePair;
use crate::entities::{BoundaryPath, BoundaryPathFlags, Hatch, HatchEdge, Vertex};
use crate::types::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    Header,
    PolylineLoop,
    EdgeLoop,
    Pattern,
    SeedPoints,
}

struct HatchFold {
    hatch: Hatch,
    cursor: Cursor,
}

pub fn build_hatch(records: &[DxfCodePair]) -> Hatch {
    let start = HatchFold {
        hatch: Hatch::default(),
        cursor: Cursor::Header,
    };
    records.iter().fold(start, HatchFold::apply).hatch
}

impl HatchFold {
    fn apply(mut self, pair: &DxfCodePair) -> Self {
        match pair.code {
            92 => {
                let flags = BoundaryPathFlags::from_bits_retain(pair.as_int().unwrap_or(0) as i32);
                self.cursor = if flags.contains(BoundaryPathFlags::POLYLINE) {
                    Cursor::PolylineLoop
                } else {
                    Cursor::EdgeLoop
                };
                self.hatch.boundary_paths.push(BoundaryPath {
                    flags,
                    ..Default::default()
                });
                return self;
            }
            75 => {
                set_i64(&mut self.hatch.hatch_style, pair);
                self.cursor = Cursor::Pattern;
                return self;
            }
            98 => {
                self.cursor = Cursor::SeedPoints;
                return self;
            }
            _ => {}
        }

        match self.cursor {
            Cursor::Header => self.header(pair),
            Cursor::PolylineLoop => self.polyline_loop(pair),
            Cursor::EdgeLoop => self.edge_loop(pair),
            Cursor::Pattern => self.pattern(pair),
            Cursor::SeedPoints => self.seed_point(pair),
        }
        self
    }

    fn header(&mut self, pair: &DxfCodePair) {
        let hatch = &mut self.hatch;
        match pair.code {
            2 => hatch.pattern_name = pair.value_string.clone(),
            10 => set_f64(&mut hatch.elevation.x, pair),
            20 => set_f64(&mut hatch.elevation.y, pair),
            30 => set_f64(&mut hatch.elevation.z, pair),
            70 => hatch.solid_fill = pair.as_bool().unwrap_or(false),
            71 => hatch.associative = pair.as_bool().unwrap_or(false),
            91 => {}
            _ => apply_common(&mut hatch.common, pair),
        }
    }

    fn current_path(&mut self) -> Option<&mut BoundaryPath> {
        self.hatch.boundary_paths.last_mut()
    }

    fn polyline_loop(&mut self, pair: &DxfCodePair) {
        let Some(path) = self.current_path() else {
            return;
        };
        match pair.code {
            72 => path.has_bulge = pair.as_bool().unwrap_or(false),
            73 => path.closed = pair.as_bool().unwrap_or(false),
            10 => path
                .vertices
                .push(Vertex::new(pair.as_double().unwrap_or(0.0), 0.0)),
            20 => {
                if let Some(v) = path.vertices.last_mut() {
                    set_f64(&mut v.y, pair);
                }
            }
            42 => {
                if let Some(v) = path.vertices.last_mut() {
                    set_f64(&mut v.bulge, pair);
                }
            }
            // vertex count, source objects
            _ => {}
        }
    }

    fn edge_loop(&mut self, pair: &DxfCodePair) {
        let Some(path) = self.current_path() else {
            return;
        };
        if pair.code == 72 {
            if let Some(edge) = pair.as_int().and_then(HatchEdge::from_type_code) {
                path.edges.push(edge);
            }
            return;
        }
        if let Some(edge) = path.edges.last_mut() {
            apply_edge(edge, pair);
        }
    }

    fn pattern(&mut self, pair: &DxfCodePair) {
        let hatch = &mut self.hatch;
        match pair.code {
            76 => set_i64(&mut hatch.pattern_type, pair),
            52 => set_f64(&mut hatch.pattern_angle, pair),
            41 => set_f64(&mut hatch.pattern_scale, pair),
            // pattern definition lines, gradient data
            53 | 43..=46 | 49 | 77..=79 | 47 | 450..=470 => {}
            _ => apply_common(&mut hatch.common, pair),
        }
    }

    fn seed_point(&mut self, pair: &DxfCodePair) {
        let seeds = &mut self.hatch.seed_points;
        match pair.code {
            10 => seeds.push(Vector2::new(pair.as_double().unwrap_or(0.0), 0.0)),
            20 => {
                if let Some(p) = seeds.last_mut() {
                    set_f64(&mut p.y, pair);
                }
            }
            _ => apply_common(&mut self.hatch.common, pair),
        }
    }
}

/// Edge data. Arc angles are written in degrees.
fn apply_edge(edge: &mut HatchEdge, pair: &DxfCodePair) {
    match edge {
        HatchEdge::Line { start, end } => match pair.code {
            10 => set_f64(&mut start.x, pair),
            20 => set_f64(&mut start.y, pair),
            11 => set_f64(&mut end.x, pair),
            21 => set_f64(&mut end.y, pair),
            _ => {}
        },
        HatchEdge::CircularArc {
            center,
            radius,
            start_angle,
            end_angle,
            counter_clockwise,
        } => match pair.code {
            10 => set_f64(&mut center.x, pair),
            20 => set_f64(&mut center.y, pair),
            40 => set_f64(radius, pair),
            50 => *start_angle = pair.as_double().unwrap_or(0.0).to_radians(),
            51 => *end_angle = pair.as_double().unwrap_or(0.0).to_radians(),
            73 => *counter_clockwise = pair.as_bool().unwrap_or(true),
            _ => {}
        },
        HatchEdge::EllipticArc {
            center,
            major_axis,
            axis_ratio,
            start_angle,
            end_angle,
            counter_clockwise,
        } => match pair.code {
            10 => set_f64(&mut center.x, pair),
            20 => set_f64(&mut center.y, pair),
            11 => set_f64(&mut major_axis.x, pair),
            21 => set_f64(&mut major_axis.y, pair),
            40 => set_f64(axis_ratio, pair),
            50 => *start_angle = pair.as_double().unwrap_or(0.0).to_radians(),
            51 => *end_angle = pair.as_double().unwrap_or(0.0).to_radians(),
            73 => *counter_clockwise = pair.as_bool().unwrap_or(true),
            _ => {}
        },
        HatchEdge::Spline {
            degree,
            rational,
            periodic,
            knots,
            control_points,
            weights,
        } => match pair.code {
            94 => set_i64(degree, pair),
            73 => *rational = pair.as_bool().unwrap_or(false),
            74 => *periodic = pair.as_bool().unwrap_or(false),
            40 => knots.extend(pair.as_double()),
            42 => weights.extend(pair.as_double()),
            10 => control_points.push(Vector2::new(pair.as_double().unwrap_or(0.0), 0.0)),
            20 => {
                if let Some(p) = control_points.last_mut() {
                    set_f64(&mut p.y, pair);
                }
            }
            _ => {}
        },
    }
}
