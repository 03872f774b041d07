//! Parse, expand and render a generated drawing.
//!
//! Run with: cargo bench --bench pipeline

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dxf_render::io::dxf::DxfReader;
use dxf_render::{
    denormalise, to_svg, ExpandOptions, NotificationCollection, PolylineOptions,
};
use std::fmt::Write;

fn record(text: &mut String, code: i32, value: impl std::fmt::Display) {
    let _ = writeln!(text, "{:>3}\n{}", code, value);
}

/// A drawing with `cells` array inserts of a block holding a line, an arc,
/// a closed polyline and a cubic spline
fn generate_drawing(cells: usize) -> String {
    let mut text = String::new();
    record(&mut text, 0, "SECTION");
    record(&mut text, 2, "TABLES");
    record(&mut text, 0, "TABLE");
    record(&mut text, 2, "LAYER");
    for (name, color) in [("0", 7), ("parts", 1)] {
        record(&mut text, 0, "LAYER");
        record(&mut text, 2, name);
        record(&mut text, 62, color);
    }
    record(&mut text, 0, "ENDTAB");
    record(&mut text, 0, "ENDSEC");

    record(&mut text, 0, "SECTION");
    record(&mut text, 2, "BLOCKS");
    record(&mut text, 0, "BLOCK");
    record(&mut text, 2, "part");
    record(&mut text, 10, 0);
    record(&mut text, 20, 0);
    for (code, value) in [(0, "LINE"), (8, "0"), (10, "0"), (20, "0"), (11, "4"), (21, "3")] {
        record(&mut text, code, value);
    }
    for (code, value) in [(0, "ARC"), (8, "0"), (10, "2"), (20, "2"), (40, "1.5"), (50, "30"), (51, "300")] {
        record(&mut text, code, value);
    }
    record(&mut text, 0, "LWPOLYLINE");
    record(&mut text, 8, "0");
    record(&mut text, 70, 1);
    for (x, y, bulge) in [(0.0, 0.0, 0.5), (4.0, 0.0, 0.0), (4.0, 4.0, -0.3), (0.0, 4.0, 0.0)] {
        record(&mut text, 10, x);
        record(&mut text, 20, y);
        record(&mut text, 42, bulge);
    }
    record(&mut text, 0, "SPLINE");
    record(&mut text, 8, "0");
    record(&mut text, 71, 3);
    for knot in [0.0, 0.0, 0.0, 0.0, 0.5, 1.0, 1.0, 1.0, 1.0] {
        record(&mut text, 40, knot);
    }
    for (x, y) in [(0.0, 0.0), (1.0, 3.0), (2.0, -1.0), (3.0, 2.0), (4.0, 0.0)] {
        record(&mut text, 10, x);
        record(&mut text, 20, y);
    }
    record(&mut text, 0, "ENDBLK");
    record(&mut text, 0, "ENDSEC");

    record(&mut text, 0, "SECTION");
    record(&mut text, 2, "ENTITIES");
    let side = (cells as f64).sqrt().ceil() as usize;
    for i in 0..cells {
        record(&mut text, 0, "INSERT");
        record(&mut text, 8, "parts");
        record(&mut text, 2, "part");
        record(&mut text, 10, (i % side) as f64 * 10.0);
        record(&mut text, 20, (i / side) as f64 * 10.0);
        record(&mut text, 50, (i * 15) % 360);
    }
    record(&mut text, 0, "ENDSEC");
    record(&mut text, 0, "EOF");
    text
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    for cells in [10, 100, 1000] {
        let text = generate_drawing(cells);
        let document = match DxfReader::from_text(&text).read() {
            Ok(document) => document,
            Err(err) => panic!("generated drawing failed to parse: {err}"),
        };
        let flat = denormalise(
            &document,
            &ExpandOptions::default(),
            &mut NotificationCollection::errors_only(),
        );

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse", cells), &text, |b, text| {
            b.iter(|| DxfReader::from_text(black_box(text)).read())
        });

        group.throughput(Throughput::Elements(cells as u64));
        group.bench_with_input(BenchmarkId::new("expand", cells), &document, |b, document| {
            b.iter(|| {
                let mut notifications = NotificationCollection::errors_only();
                denormalise(black_box(document), &ExpandOptions::default(), &mut notifications)
            })
        });

        group.bench_with_input(BenchmarkId::new("svg", cells), &flat, |b, flat| {
            b.iter(|| {
                let mut notifications = NotificationCollection::errors_only();
                to_svg(&document, black_box(flat), &PolylineOptions::default(), &mut notifications)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
