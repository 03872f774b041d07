//! The parsed drawing: header, tables, blocks, top-level entities and layouts

use crate::entities::{Block, EntityType};
use crate::notification::NotificationCollection;
use crate::tables::{Layer, Table, TextStyle};
use crate::types::{Vector2, Vector3};
use ahash::AHashMap;

/// The header variables the renderer cares about
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderVariables {
    /// $ACADVER, e.g. `AC1015`
    pub version: Option<String>,
    /// $MEASUREMENT: 0 imperial, 1 metric
    pub measurement: Option<i64>,
    /// $INSUNITS
    pub insertion_units: Option<i64>,
    /// $EXTMIN
    pub extents_min: Option<Vector3>,
    /// $EXTMAX
    pub extents_max: Option<Vector3>,
    /// $DIMASZ
    pub dim_arrow_size: Option<f64>,
}

/// Tables that survive parsing
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub layers: Table<Layer>,
    pub styles: Table<TextStyle>,
}

/// A LAYOUT object from the OBJECTS section
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub name: String,
    pub handle: Option<String>,
    pub owner_handle: Option<String>,
    pub flags: i64,
    pub tab_order: i64,
    pub min_limits: Vector2,
    pub max_limits: Vector2,
    /// Handle of the paper space block record this layout draws
    pub block_record: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Objects {
    pub layouts: Vec<Layout>,
}

/// A fully assembled document.
///
/// Nothing downstream mutates it: block expansion and rendering work on
/// copies, so one document can be rendered any number of times.
#[derive(Debug, Clone, Default)]
pub struct DxfDocument {
    pub header: HeaderVariables,
    pub tables: Tables,
    pub blocks: Vec<Block>,
    pub entities: Vec<EntityType>,
    pub objects: Objects,
    /// Notifications collected while reading
    pub notifications: NotificationCollection,
}

impl DxfDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.tables.layers.get(name)
    }

    /// Block with the given name. With duplicates the last definition wins,
    /// as in [`DxfDocument::blocks_by_name`].
    pub fn block(&self, name: &str) -> Option<&Block> {
        self.blocks.iter().rev().find(|b| b.name == name)
    }

    /// Index of blocks by name. Later definitions win over earlier ones.
    pub fn blocks_by_name(&self) -> AHashMap<&str, &Block> {
        self.blocks.iter().map(|b| (b.name.as_str(), b)).collect()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}
