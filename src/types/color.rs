//! RGB colors and the AutoCAD Color Index (ACI) palette

use once_cell::sync::Lazy;
use std::fmt;

/// An 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its components
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Components as an array, the shape polyline output uses
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// SVG stroke attribute value. White is drawn as black, since drawings
    /// authored on a dark background would otherwise vanish on paper.
    pub fn to_stroke_attribute(self) -> String {
        let c = if self == Rgb::WHITE { Rgb::BLACK } else { self };
        c.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        c.to_array()
    }
}

/// Brightness levels of the five shades in every ACI hue group
const SHADE_VALUES: [f64; 5] = [255.0, 204.0, 153.0, 127.0, 76.0];

/// Grays at indices 250..=255
const GRAYS: [u8; 6] = [51, 91, 132, 173, 214, 255];

/// Index 1..=9
const STANDARD: [Rgb; 9] = [
    Rgb::new(255, 0, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 255, 255),
    Rgb::new(0, 0, 255),
    Rgb::new(255, 0, 255),
    Rgb::new(255, 255, 255),
    Rgb::new(65, 65, 65),
    Rgb::new(128, 128, 128),
];

static PALETTE: Lazy<[Rgb; 256]> = Lazy::new(build_palette);

/// Look up an ACI color number.
///
/// Returns `None` for anything outside `0..=255`, including the by-layer
/// sentinel 256; callers treat that as an invalid index.
pub fn aci_to_rgb(index: i64) -> Option<Rgb> {
    usize::try_from(index)
        .ok()
        .and_then(|i| PALETTE.get(i).copied())
}

fn build_palette() -> [Rgb; 256] {
    let mut palette = [Rgb::BLACK; 256];
    palette[1..10].copy_from_slice(&STANDARD);

    // 24 hues at 15 degree steps; each hue has five shades, every shade
    // followed by its half-saturated companion.
    for index in 10..250 {
        let hue = ((index - 10) / 10) as f64 * 15.0;
        let shade = (index % 10) / 2;
        let pale = index % 2 == 1;
        palette[index] = hue_color(hue, SHADE_VALUES[shade], if pale { 0.5 } else { 1.0 });
    }

    for (offset, gray) in GRAYS.iter().enumerate() {
        palette[250 + offset] = Rgb::new(*gray, *gray, *gray);
    }
    palette
}

/// HSV to RGB, truncating each channel
fn hue_color(hue: f64, value: f64, saturation: f64) -> Rgb {
    let sector = (hue / 60.0).floor();
    let f = hue / 60.0 - sector;
    let (r, g, b) = match sector as u32 {
        0 => (1.0, f, 0.0),
        1 => (1.0 - f, 1.0, 0.0),
        2 => (0.0, 1.0, f),
        3 => (0.0, 1.0 - f, 1.0),
        4 => (f, 0.0, 1.0),
        _ => (1.0, 0.0, 1.0 - f),
    };
    let low = value * (1.0 - saturation);
    let channel = |c: f64| (low + (value - low) * c).floor() as u8;
    Rgb::new(channel(r), channel(g), channel(b))
}
