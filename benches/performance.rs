// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use t3dkit::io::{export_map, filter_brushes, parse_t3d};
use t3dkit::{Brush, Polygon, Vec3};

/// Axis aligned box brush with six textured faces
fn box_brush(index: usize, size: f64) -> Brush {
    let h = size / 2.0;
    let corners = |sx: [f64; 4], sy: [f64; 4], sz: [f64; 4]| -> Polygon {
        let mut p = Polygon::new(
            (0..4)
                .map(|i| Vec3::new(sx[i] * h, sy[i] * h, sz[i] * h))
                .collect(),
        );
        p.texture = "Bench.Tile".to_string();
        p
    };
    let polygons = vec![
        corners([-1.0, -1.0, -1.0, -1.0], [1.0, 1.0, -1.0, -1.0], [-1.0, 1.0, 1.0, -1.0]),
        corners([1.0, 1.0, 1.0, 1.0], [-1.0, -1.0, 1.0, 1.0], [-1.0, 1.0, 1.0, -1.0]),
        corners([1.0, 1.0, -1.0, -1.0], [1.0, 1.0, 1.0, 1.0], [-1.0, 1.0, 1.0, -1.0]),
        corners([-1.0, -1.0, 1.0, 1.0], [-1.0, -1.0, -1.0, -1.0], [-1.0, 1.0, 1.0, -1.0]),
        corners([-1.0, 1.0, 1.0, -1.0], [1.0, 1.0, -1.0, -1.0], [1.0, 1.0, 1.0, 1.0]),
        corners([-1.0, 1.0, 1.0, -1.0], [-1.0, -1.0, 1.0, 1.0], [-1.0, -1.0, -1.0, -1.0]),
    ];
    let location = Vec3::new(index as f64 * size, 0.0, 0.0);
    Brush::new(polygons, location, Some(format!("Brush{}", index)))
}

fn generated_map(brushes: usize) -> String {
    let brushes: Vec<Brush> = (0..brushes).map(|i| box_brush(i, 256.0)).collect();
    export_map(&brushes)
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for count in [1, 50, 500] {
        let text = generated_map(count);
        group.bench_with_input(BenchmarkId::new("brushes", count), &text, |b, text| {
            b.iter(|| parse_t3d(black_box(text)).unwrap());
        });
    }

    let text = generated_map(500);
    group.bench_function("filter_500", |b| {
        b.iter(|| filter_brushes(black_box(&text)));
    });

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");

    for count in [1, 50, 500] {
        let brushes: Vec<Brush> = (0..count).map(|i| box_brush(i, 256.0)).collect();
        group.bench_with_input(BenchmarkId::new("brushes", count), &brushes, |b, brushes| {
            b.iter(|| export_map(black_box(brushes)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_export);
criterion_main!(benches);
