//! Layer table entry

use super::TableEntry;
use bitflags::bitflags;

bitflags! {
    /// Layer state flags (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LayerFlags: i64 {
        const FROZEN = 1;
        const FROZEN_IN_NEW_VIEWPORTS = 2;
        const LOCKED = 4;
        const XREF_DEPENDENT = 16;
        const XREF_RESOLVED = 32;
        const REFERENCED = 64;
    }
}

/// A layer table entry
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub name: String,
    pub line_type: Option<String>,
    /// ACI color index. Negative means the layer is switched off.
    pub color_number: i64,
    pub flags: LayerFlags,
    /// Whether the layer is plotted (group code 290)
    pub plot: bool,
    pub line_weight: Option<i64>,
}

impl Layer {
    /// Create a new layer with color 7 (white, shown as black on paper)
    pub fn new(name: impl Into<String>) -> Self {
        Layer {
            name: name.into(),
            line_type: None,
            color_number: 7,
            flags: LayerFlags::empty(),
            plot: true,
            line_weight: None,
        }
    }

    pub fn with_color(mut self, color_number: i64) -> Self {
        self.color_number = color_number;
        self
    }

    pub fn is_off(&self) -> bool {
        self.color_number < 0
    }

    pub fn is_frozen(&self) -> bool {
        self.flags.contains(LayerFlags::FROZEN)
    }

    pub fn is_locked(&self) -> bool {
        self.flags.contains(LayerFlags::LOCKED)
    }
}

impl Default for Layer {
    fn default() -> Self {
        Layer::new("0")
    }
}

impl TableEntry for Layer {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_and_state() {
        let mut layer = Layer::new("hidden").with_color(-3);
        layer.flags = LayerFlags::from_bits_retain(5);
        assert!(layer.is_off());
        assert!(layer.is_frozen());
        assert!(layer.is_locked());
        assert!(!Layer::default().is_off());
    }
}
