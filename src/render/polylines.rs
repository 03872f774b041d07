//! Flat polyline output

use super::color::rgb_for_entity;
use crate::denormalise::FlatEntity;
use crate::document::DxfDocument;
use crate::notification::NotificationCollection;
use crate::polyline::{entity_to_polyline, PolylineOptions};
use crate::types::{apply_transforms, BoundingBox2D, Rgb, Vector2};

/// One entity as world-space points
#[derive(Debug, Clone, PartialEq)]
pub struct ColoredPolyline {
    pub rgb: Rgb,
    pub vertices: Vec<Vector2>,
}

/// All entities of a drawing as polylines, with their overall extent
#[derive(Debug, Clone)]
pub struct PolylineDocument {
    /// Invalid when no entity produced a point
    pub bbox: BoundingBox2D,
    pub polylines: Vec<ColoredPolyline>,
}

/// Convert every flattened entity to a colored, transformed polyline.
///
/// Entities that produce no points still get an (empty) entry, so the
/// output lines up one to one with `entities`.
pub fn to_polylines(
    document: &DxfDocument,
    entities: &[FlatEntity],
    options: &PolylineOptions,
    notifications: &mut NotificationCollection,
) -> PolylineDocument {
    let polylines: Vec<ColoredPolyline> = entities
        .iter()
        .map(|flat| {
            let rgb = rgb_for_entity(&document.tables.layers, &flat.entity, notifications);
            let local = entity_to_polyline(&flat.entity, options, notifications);
            ColoredPolyline {
                rgb,
                vertices: apply_transforms(&local, &flat.transforms),
            }
        })
        .collect();

    let bbox = BoundingBox2D::from_points(
        polylines
            .iter()
            .flat_map(|polyline| polyline.vertices.iter().copied()),
    );
    tracing::debug!(count = polylines.len(), %bbox, "polylines rendered");

    PolylineDocument { bbox, polylines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{EntityType, Line, Text};
    use crate::tables::Layer;
    use crate::types::Transform;

    #[test]
    fn test_transforms_color_and_bounds() {
        let mut document = DxfDocument::new();
        document.tables.layers.insert(Layer::new("0").with_color(3));
        let entities = vec![
            FlatEntity {
                entity: EntityType::Line(Line::from_xy(0.0, 0.0, 1.0, 0.0)),
                transforms: vec![Transform::translation(10.0, 5.0)],
            },
            FlatEntity::untransformed(EntityType::Text(Text::default())),
        ];
        let mut notifications = NotificationCollection::new();
        let out = to_polylines(&document, &entities, &PolylineOptions::default(), &mut notifications);

        assert_eq!(out.polylines.len(), 2);
        assert_eq!(out.polylines[0].rgb, Rgb::new(0, 255, 0));
        assert_eq!(
            out.polylines[0].vertices,
            vec![Vector2::new(10.0, 5.0), Vector2::new(11.0, 5.0)]
        );
        assert!(out.polylines[1].vertices.is_empty());
        assert_eq!(out.bbox.min, Vector2::new(10.0, 5.0));
        assert_eq!(out.bbox.max, Vector2::new(11.0, 5.0));
    }

    #[test]
    fn test_empty_drawing_has_invalid_bounds() {
        let mut notifications = NotificationCollection::new();
        let out = to_polylines(&DxfDocument::new(), &[], &PolylineOptions::default(), &mut notifications);
        assert!(out.polylines.is_empty());
        assert!(!out.bbox.is_valid());
    }
}
