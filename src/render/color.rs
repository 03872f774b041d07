//! Stroke color of a flattened entity

use crate::entities::EntityType;
use crate::notification::NotificationCollection;
use crate::tables::{Layer, Table};
use crate::types::{aci_to_rgb, Rgb};

/// Entity color number meaning "use the layer color"
pub const BY_LAYER: i64 = 256;

/// Resolve the color of `entity` against the layer table.
///
/// An entity color other than [`BY_LAYER`] wins over the layer color. A
/// missing layer or a number outside the palette yields black and a warning.
pub fn rgb_for_entity(
    layers: &Table<Layer>,
    entity: &EntityType,
    notifications: &mut NotificationCollection,
) -> Rgb {
    let Some(layer) = layers.get(entity.layer()) else {
        notifications.warn(format!("no layer table for layer: {}", entity.layer()));
        return Rgb::BLACK;
    };

    let color_number = match entity.common().color_number {
        Some(number) if number != BY_LAYER => number,
        _ => layer.color_number,
    };
    aci_to_rgb(color_number).unwrap_or_else(|| {
        notifications.warn(format!("Color index {} invalid, defaulting to black", color_number));
        Rgb::BLACK
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Line;

    fn layers() -> Table<Layer> {
        [Layer::new("0").with_color(1), Layer::new("odd").with_color(300)]
            .into_iter()
            .collect()
    }

    fn line(layer: &str, color: Option<i64>) -> EntityType {
        let mut line = Line::from_xy(0.0, 0.0, 1.0, 1.0);
        line.common.layer = layer.to_string();
        line.common.color_number = color;
        EntityType::Line(line)
    }

    #[test]
    fn test_layer_color() {
        let mut notifications = NotificationCollection::new();
        let rgb = rgb_for_entity(&layers(), &line("0", None), &mut notifications);
        assert_eq!(rgb, aci_to_rgb(1).unwrap());
        assert!(notifications.is_empty());
    }

    #[test]
    fn test_entity_color_overrides_unless_by_layer() {
        let mut notifications = NotificationCollection::new();
        assert_eq!(
            rgb_for_entity(&layers(), &line("0", Some(5)), &mut notifications),
            Rgb::new(0, 0, 255)
        );
        assert_eq!(
            rgb_for_entity(&layers(), &line("0", Some(BY_LAYER)), &mut notifications),
            Rgb::new(255, 0, 0)
        );
    }

    #[test]
    fn test_missing_layer_and_bad_index() {
        let mut notifications = NotificationCollection::new();
        assert_eq!(rgb_for_entity(&layers(), &line("nope", None), &mut notifications), Rgb::BLACK);
        assert!(notifications.mentions("no layer table for layer: nope"));
        assert_eq!(rgb_for_entity(&layers(), &line("odd", None), &mut notifications), Rgb::BLACK);
        assert!(notifications.mentions("Color index 300 invalid, defaulting to black"));
    }
}
