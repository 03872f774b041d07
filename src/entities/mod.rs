//! Entity records produced by the builders.
//!
//! Every variant carries an [`EntityCommon`] with the fields shared by all
//! entity types, plus its own geometry. Coordinates default to 0 because
//! records are sparse.

use crate::types::{Vector2, Vector3};

pub mod arc;
pub mod attribute_definition;
pub mod attribute_entity;
pub mod block;
pub mod circle;
pub mod dimension;
pub mod ellipse;
pub mod face3d;
pub mod hatch;
pub mod insert;
pub mod line;
pub mod lwpolyline;
pub mod mtext;
pub mod point;
pub mod polyline;
pub mod solid;
pub mod spline;
pub mod text;
pub mod viewport;

pub use arc::Arc;
pub use attribute_definition::AttributeDefinition;
pub use attribute_entity::AttributeEntity;
pub use block::Block;
pub use circle::Circle;
pub use dimension::{Dimension, DimensionKind};
pub use ellipse::Ellipse;
pub use face3d::Face3D;
pub use hatch::{BoundaryPath, BoundaryPathFlags, Hatch, HatchEdge};
pub use insert::Insert;
pub use line::Line;
pub use lwpolyline::LwPolyline;
pub use mtext::MText;
pub use point::Point;
pub use polyline::{Polyline, PolylineFlags, Vertex};
pub use solid::Solid;
pub use spline::{Spline, SplineFlags};
pub use text::{Text, TextBody};
pub use viewport::Viewport;

/// Behaviour shared by all entity records
pub trait Entity {
    fn common(&self) -> &EntityCommon;

    fn common_mut(&mut self) -> &mut EntityCommon;

    /// DXF type name, e.g. `"LWPOLYLINE"`
    fn entity_type(&self) -> &'static str;

    /// Move block-local coordinates so that `origin` becomes (0, 0).
    ///
    /// Only applied while flattening block inserts. Types without
    /// positional data keep the default no-op.
    fn rebase(&mut self, _origin: Vector2) {}

    fn layer(&self) -> &str {
        &self.common().layer
    }

    fn set_layer(&mut self, layer: String) {
        self.common_mut().layer = layer;
    }

    /// Entity-level ACI color, if one was given
    fn color_number(&self) -> Option<i64> {
        self.common().color_number
    }

    /// Whether the extrusion direction is -Z, which mirrors the entity
    fn is_mirrored(&self) -> bool {
        self.common().extrusion_z == Some(-1.0)
    }
}

/// Fields every entity may carry
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCommon {
    pub handle: Option<String>,
    pub layer: String,
    pub line_type_name: Option<String>,
    pub line_type_scale: Option<f64>,
    pub visible: bool,
    pub color_number: Option<i64>,
    pub true_color: Option<i64>,
    pub paper_space: bool,
    pub owner_handle: Option<String>,
    pub line_weight: Option<i64>,
    pub extrusion_x: Option<f64>,
    pub extrusion_y: Option<f64>,
    pub extrusion_z: Option<f64>,
}

impl EntityCommon {
    pub fn new() -> Self {
        EntityCommon {
            handle: None,
            layer: "0".to_string(),
            line_type_name: None,
            line_type_scale: None,
            visible: true,
            color_number: None,
            true_color: None,
            paper_space: false,
            owner_handle: None,
            line_weight: None,
            extrusion_x: None,
            extrusion_y: None,
            extrusion_z: None,
        }
    }

    pub fn with_layer(layer: impl Into<String>) -> Self {
        EntityCommon {
            layer: layer.into(),
            ..Self::new()
        }
    }
}

impl Default for EntityCommon {
    fn default() -> Self {
        Self::new()
    }
}

/// Closed set of entity variants
#[derive(Debug, Clone)]
pub enum EntityType {
    Point(Point),
    Line(Line),
    LwPolyline(LwPolyline),
    Polyline(Polyline),
    Circle(Circle),
    Arc(Arc),
    Ellipse(Ellipse),
    Spline(Spline),
    Solid(Solid),
    Face3D(Face3D),
    Insert(Insert),
    MText(MText),
    Text(Text),
    AttributeDefinition(AttributeDefinition),
    AttributeEntity(AttributeEntity),
    Hatch(Hatch),
    Dimension(Dimension),
    Viewport(Viewport),
}

impl EntityType {
    pub fn as_entity(&self) -> &dyn Entity {
        match self {
            EntityType::Point(e) => e,
            EntityType::Line(e) => e,
            EntityType::LwPolyline(e) => e,
            EntityType::Polyline(e) => e,
            EntityType::Circle(e) => e,
            EntityType::Arc(e) => e,
            EntityType::Ellipse(e) => e,
            EntityType::Spline(e) => e,
            EntityType::Solid(e) => e,
            EntityType::Face3D(e) => e,
            EntityType::Insert(e) => e,
            EntityType::MText(e) => e,
            EntityType::Text(e) => e,
            EntityType::AttributeDefinition(e) => e,
            EntityType::AttributeEntity(e) => e,
            EntityType::Hatch(e) => e,
            EntityType::Dimension(e) => e,
            EntityType::Viewport(e) => e,
        }
    }

    pub fn as_entity_mut(&mut self) -> &mut dyn Entity {
        match self {
            EntityType::Point(e) => e,
            EntityType::Line(e) => e,
            EntityType::LwPolyline(e) => e,
            EntityType::Polyline(e) => e,
            EntityType::Circle(e) => e,
            EntityType::Arc(e) => e,
            EntityType::Ellipse(e) => e,
            EntityType::Spline(e) => e,
            EntityType::Solid(e) => e,
            EntityType::Face3D(e) => e,
            EntityType::Insert(e) => e,
            EntityType::MText(e) => e,
            EntityType::Text(e) => e,
            EntityType::AttributeDefinition(e) => e,
            EntityType::AttributeEntity(e) => e,
            EntityType::Hatch(e) => e,
            EntityType::Dimension(e) => e,
            EntityType::Viewport(e) => e,
        }
    }

    pub fn common(&self) -> &EntityCommon {
        self.as_entity().common()
    }

    pub fn layer(&self) -> &str {
        self.as_entity().layer()
    }

    pub fn type_name(&self) -> &'static str {
        self.as_entity().entity_type()
    }

    pub fn as_insert(&self) -> Option<&Insert> {
        match self {
            EntityType::Insert(insert) => Some(insert),
            _ => None,
        }
    }
}

/// Shift each point back by `origin` in XY
pub(crate) fn rebase_points(points: &mut [Vector3], origin: Vector2) {
    for p in points.iter_mut() {
        *p = p.shifted_back(origin);
    }
}
