//! Text style table entry

use super::TableEntry;
use bitflags::bitflags;

bitflags! {
    /// Style flags (group code 71)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TextGenerationFlags: i64 {
        const BACKWARD = 2;
        const UPSIDE_DOWN = 4;
    }
}

/// A text style table entry
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub name: String,
    pub line_type: Option<String>,
    /// Fixed text height, 0 when variable
    pub fixed_text_height: f64,
    pub width_factor: f64,
    /// Degrees
    pub oblique_angle: f64,
    pub flags: TextGenerationFlags,
    pub last_height_used: f64,
    pub font_file: Option<String>,
    pub big_font_file: Option<String>,
}

impl TextStyle {
    pub fn new(name: impl Into<String>) -> Self {
        TextStyle {
            name: name.into(),
            line_type: None,
            fixed_text_height: 0.0,
            width_factor: 1.0,
            oblique_angle: 0.0,
            flags: TextGenerationFlags::empty(),
            last_height_used: 0.0,
            font_file: None,
            big_font_file: None,
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle::new("STANDARD")
    }
}

impl TableEntry for TextStyle {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
