//! Shared test utilities for dxf-render integration tests.
//!
//! Drawings are built in memory as DXF text so every test states exactly
//! which records it feeds the reader.

#![allow(dead_code)]

use dxf_render::io::dxf::DxfReader;
use dxf_render::DxfDocument;
use std::fmt::Write;

/// Group code and value, in file order
pub type Records = Vec<(i32, String)>;

fn push(records: &mut Records, code: i32, value: impl ToString) {
    records.push((code, value.to_string()));
}

/// In-memory DXF text builder
#[derive(Debug, Default)]
pub struct DrawingBuilder {
    layers: Vec<(String, i64)>,
    blocks: Vec<Records>,
    entities: Records,
}

impl DrawingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layer(mut self, name: &str, color: i64) -> Self {
        self.layers.push((name.to_string(), color));
        self
    }

    /// A block at `base` holding `entities`
    pub fn block(mut self, name: &str, base: (f64, f64), entities: Vec<Records>) -> Self {
        let mut records = Records::new();
        push(&mut records, 0, "BLOCK");
        push(&mut records, 8, "0");
        push(&mut records, 2, name);
        push(&mut records, 70, 0);
        push(&mut records, 10, base.0);
        push(&mut records, 20, base.1);
        push(&mut records, 30, 0);
        push(&mut records, 3, name);
        for entity in entities {
            records.extend(entity);
        }
        push(&mut records, 0, "ENDBLK");
        self.blocks.push(records);
        self
    }

    pub fn entity(mut self, records: Records) -> Self {
        self.entities.extend(records);
        self
    }

    pub fn build(&self) -> String {
        let mut all = Records::new();
        push(&mut all, 0, "SECTION");
        push(&mut all, 2, "HEADER");
        push(&mut all, 9, "$ACADVER");
        push(&mut all, 1, "AC1015");
        push(&mut all, 0, "ENDSEC");

        push(&mut all, 0, "SECTION");
        push(&mut all, 2, "TABLES");
        push(&mut all, 0, "TABLE");
        push(&mut all, 2, "LAYER");
        push(&mut all, 70, self.layers.len());
        for (name, color) in &self.layers {
            push(&mut all, 0, "LAYER");
            push(&mut all, 2, name);
            push(&mut all, 70, 0);
            push(&mut all, 62, color);
            push(&mut all, 6, "CONTINUOUS");
        }
        push(&mut all, 0, "ENDTAB");
        push(&mut all, 0, "ENDSEC");

        push(&mut all, 0, "SECTION");
        push(&mut all, 2, "BLOCKS");
        for block in &self.blocks {
            all.extend(block.iter().cloned());
        }
        push(&mut all, 0, "ENDSEC");

        push(&mut all, 0, "SECTION");
        push(&mut all, 2, "ENTITIES");
        all.extend(self.entities.iter().cloned());
        push(&mut all, 0, "ENDSEC");
        push(&mut all, 0, "EOF");

        let mut text = String::new();
        for (code, value) in all {
            let _ = writeln!(text, "{:>3}\n{}", code, value);
        }
        text
    }

    pub fn read(&self) -> DxfDocument {
        DxfReader::from_text(&self.build())
            .read()
            .expect("fixture drawing should parse")
    }
}

pub fn line(layer: &str, from: (f64, f64), to: (f64, f64)) -> Records {
    let mut r = Records::new();
    push(&mut r, 0, "LINE");
    push(&mut r, 8, layer);
    push(&mut r, 10, from.0);
    push(&mut r, 20, from.1);
    push(&mut r, 30, 0);
    push(&mut r, 11, to.0);
    push(&mut r, 21, to.1);
    push(&mut r, 31, 0);
    r
}

pub fn circle(layer: &str, center: (f64, f64), radius: f64) -> Records {
    let mut r = Records::new();
    push(&mut r, 0, "CIRCLE");
    push(&mut r, 8, layer);
    push(&mut r, 10, center.0);
    push(&mut r, 20, center.1);
    push(&mut r, 30, 0);
    push(&mut r, 40, radius);
    r
}

/// Angles in degrees, as written in files
pub fn arc(layer: &str, center: (f64, f64), radius: f64, start: f64, end: f64) -> Records {
    let mut r = circle(layer, center, radius);
    r[0].1 = "ARC".to_string();
    push(&mut r, 50, start);
    push(&mut r, 51, end);
    r
}

/// Parameters in radians, major axis relative to the center
pub fn ellipse(layer: &str, center: (f64, f64), major: (f64, f64), ratio: f64, start: f64, end: f64) -> Records {
    let mut r = Records::new();
    push(&mut r, 0, "ELLIPSE");
    push(&mut r, 8, layer);
    push(&mut r, 10, center.0);
    push(&mut r, 20, center.1);
    push(&mut r, 30, 0);
    push(&mut r, 11, major.0);
    push(&mut r, 21, major.1);
    push(&mut r, 31, 0);
    push(&mut r, 40, ratio);
    push(&mut r, 41, start);
    push(&mut r, 42, end);
    r
}

pub fn with_color(mut records: Records, color: i64) -> Records {
    records.insert(2, (62, color.to_string()));
    records
}

pub fn lwpolyline(layer: &str, points: &[(f64, f64)], closed: bool) -> Records {
    let mut r = Records::new();
    push(&mut r, 0, "LWPOLYLINE");
    push(&mut r, 8, layer);
    push(&mut r, 90, points.len());
    push(&mut r, 70, if closed { 1 } else { 0 });
    for (x, y) in points {
        push(&mut r, 10, x);
        push(&mut r, 20, y);
    }
    r
}

/// Polyface mesh: vertex positions then 1-based faces
pub fn polyface(layer: &str, points: &[(f64, f64)], faces: &[[i64; 3]]) -> Records {
    let mut r = Records::new();
    push(&mut r, 0, "POLYLINE");
    push(&mut r, 8, layer);
    push(&mut r, 66, 1);
    push(&mut r, 70, 64);
    for (x, y) in points {
        push(&mut r, 0, "VERTEX");
        push(&mut r, 8, layer);
        push(&mut r, 10, x);
        push(&mut r, 20, y);
        push(&mut r, 30, 0);
        push(&mut r, 70, 192);
    }
    for face in faces {
        push(&mut r, 0, "VERTEX");
        push(&mut r, 8, layer);
        push(&mut r, 10, 0);
        push(&mut r, 20, 0);
        push(&mut r, 30, 0);
        push(&mut r, 70, 128);
        push(&mut r, 71, face[0]);
        push(&mut r, 72, face[1]);
        push(&mut r, 73, face[2]);
    }
    push(&mut r, 0, "SEQEND");
    r
}

pub fn spline(layer: &str, degree: usize, knots: &[f64], points: &[(f64, f64)]) -> Records {
    let mut r = Records::new();
    push(&mut r, 0, "SPLINE");
    push(&mut r, 8, layer);
    push(&mut r, 70, 8);
    push(&mut r, 71, degree);
    push(&mut r, 72, knots.len());
    push(&mut r, 73, points.len());
    for knot in knots {
        push(&mut r, 40, knot);
    }
    for (x, y) in points {
        push(&mut r, 10, x);
        push(&mut r, 20, y);
        push(&mut r, 30, 0);
    }
    r
}

pub fn text(layer: &str, at: (f64, f64), value: &str) -> Records {
    let mut r = Records::new();
    push(&mut r, 0, "TEXT");
    push(&mut r, 8, layer);
    push(&mut r, 10, at.0);
    push(&mut r, 20, at.1);
    push(&mut r, 40, 2.5);
    push(&mut r, 1, value);
    r
}

#[derive(Debug, Clone)]
pub struct InsertSpec {
    pub layer: String,
    pub block: String,
    pub at: (f64, f64),
    pub scale: (f64, f64),
    pub rotation: f64,
    pub columns: u32,
    pub rows: u32,
    pub spacing: (f64, f64),
}

impl InsertSpec {
    pub fn new(layer: &str, block: &str, at: (f64, f64)) -> Self {
        InsertSpec {
            layer: layer.to_string(),
            block: block.to_string(),
            at,
            scale: (1.0, 1.0),
            rotation: 0.0,
            columns: 1,
            rows: 1,
            spacing: (0.0, 0.0),
        }
    }

    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn scaled(mut self, x: f64, y: f64) -> Self {
        self.scale = (x, y);
        self
    }

    /// `spacing` is (column, row)
    pub fn array(mut self, columns: u32, rows: u32, spacing: (f64, f64)) -> Self {
        self.columns = columns;
        self.rows = rows;
        self.spacing = spacing;
        self
    }

    pub fn records(&self) -> Records {
        let mut r = Records::new();
        push(&mut r, 0, "INSERT");
        push(&mut r, 8, &self.layer);
        push(&mut r, 2, &self.block);
        push(&mut r, 10, self.at.0);
        push(&mut r, 20, self.at.1);
        push(&mut r, 30, 0);
        push(&mut r, 41, self.scale.0);
        push(&mut r, 42, self.scale.1);
        push(&mut r, 50, self.rotation);
        push(&mut r, 70, self.columns);
        push(&mut r, 71, self.rows);
        push(&mut r, 44, self.spacing.0);
        push(&mut r, 45, self.spacing.1);
        r
    }
}

pub fn insert(layer: &str, block: &str, at: (f64, f64)) -> Records {
    InsertSpec::new(layer, block, at).records()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
