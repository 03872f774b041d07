//! Block expansion.
//!
//! Turns the top-level entity list of a document into a flat list in which
//! every INSERT has been replaced by copies of its block's entities. Each
//! copy carries the chain of insert transforms that places it in the world,
//! innermost first, so consumers fold the chain in slice order.
//!
//! Block entities are stored in block-local coordinates relative to the
//! block's base point. Before a block entity is expanded it is cloned, moved
//! onto the insert's layer and rebased so that the base point becomes the
//! origin; the insert transforms are defined relative to that origin.

use crate::document::DxfDocument;
use crate::entities::{Block, Entity, EntityType, Insert};
use crate::notification::NotificationCollection;
use crate::types::Transform;
use ahash::AHashMap;
use indexmap::IndexMap;

/// An entity with the transforms that place it, innermost first
#[derive(Debug, Clone)]
pub struct FlatEntity {
    pub entity: EntityType,
    pub transforms: Vec<Transform>,
}

impl FlatEntity {
    /// An entity that was not inserted through any block
    pub fn untransformed(entity: EntityType) -> Self {
        FlatEntity {
            entity,
            transforms: Vec::new(),
        }
    }

    pub fn layer(&self) -> &str {
        self.entity.layer()
    }

    pub fn type_name(&self) -> &'static str {
        self.entity.type_name()
    }

    /// Whether the entity itself has a -Z extrusion
    pub fn is_mirrored(&self) -> bool {
        self.entity.as_entity().is_mirrored()
    }
}

/// Limits for block expansion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpandOptions {
    /// Deepest block nesting that is expanded. Top-level inserts are depth 1.
    /// `None` expands without limit, so a block that inserts itself recurses
    /// until the stack runs out.
    pub max_depth: Option<usize>,
}

/// Expand every INSERT of a document
pub fn denormalise(
    document: &DxfDocument,
    options: &ExpandOptions,
    notifications: &mut NotificationCollection,
) -> Vec<FlatEntity> {
    let blocks = document.blocks_by_name();
    expand(&document.entities, &blocks, options, notifications)
}

/// Expand `entities` against a block index, starting from an empty chain
pub fn expand(
    entities: &[EntityType],
    blocks: &AHashMap<&str, &Block>,
    options: &ExpandOptions,
    notifications: &mut NotificationCollection,
) -> Vec<FlatEntity> {
    let mut expander = Expander {
        blocks,
        options,
        notifications,
        chain: Vec::new(),
    };
    let mut out = Vec::with_capacity(entities.len());
    expander.gather(entities, 0, &mut out);
    tracing::debug!(input = entities.len(), output = out.len(), "blocks expanded");
    out
}

struct Expander<'a, 'b> {
    blocks: &'a AHashMap<&'b str, &'b Block>,
    options: &'a ExpandOptions,
    notifications: &'a mut NotificationCollection,
    /// Transforms of the enclosing inserts, outermost first
    chain: Vec<Transform>,
}

impl Expander<'_, '_> {
    fn gather(&mut self, entities: &[EntityType], depth: usize, out: &mut Vec<FlatEntity>) {
        for entity in entities {
            match entity {
                EntityType::Insert(insert) => self.expand_insert(insert, depth + 1, out),
                other => out.push(FlatEntity {
                    entity: other.clone(),
                    transforms: self.chain.iter().rev().copied().collect(),
                }),
            }
        }
    }

    fn expand_insert(&mut self, insert: &Insert, depth: usize, out: &mut Vec<FlatEntity>) {
        let Some(block) = self.blocks.get(insert.block_name.as_str()).copied() else {
            self.notifications
                .error(format!("could not find block {}", insert.block_name));
            return;
        };
        if let Some(max_depth) = self.options.max_depth {
            if depth > max_depth {
                self.notifications.error(format!(
                    "block {} nested deeper than {} levels, not expanded",
                    block.name, max_depth
                ));
                return;
            }
        }

        let block_entities = localise(block, insert.layer());
        for row in 0..insert.row_count {
            for column in 0..insert.column_count {
                self.chain.push(insert.cell_transform(row, column));
                self.gather(&block_entities, depth, out);
                self.chain.pop();
            }
        }
    }
}

/// Clones of a block's entities on `layer`, rebased to the block origin
fn localise(block: &Block, layer: &str) -> Vec<EntityType> {
    let origin = block.origin_xy();
    block
        .entities
        .iter()
        .map(|entity| {
            let mut copy = entity.clone();
            let inner = copy.as_entity_mut();
            inner.set_layer(layer.to_string());
            inner.rebase(origin);
            copy
        })
        .collect()
}

/// Group flattened entities by layer, in order of first appearance
pub fn group_entities_by_layer(entities: &[FlatEntity]) -> IndexMap<String, Vec<&FlatEntity>> {
    let mut groups: IndexMap<String, Vec<&FlatEntity>> = IndexMap::new();
    for entity in entities {
        groups
            .entry(entity.layer().to_string())
            .or_default()
            .push(entity);
    }
    groups
}
