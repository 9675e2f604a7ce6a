// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use floorplan_scene::{Apartment, ApartmentShape, AreaSummary, Scene};
use kurbo::{Point, Rect};
use peniko::Color;

/// A `side` × `side` grid of compact four-room apartments.
fn grid_scene(side: u32) -> Scene {
    let mut apartments = Vec::new();
    for row in 0..side {
        for col in 0..side {
            apartments.push(Apartment {
                id: format!("apt-{row}-{col}").into(),
                number: row * side + col + 1,
                area: AreaSummary::new("24.30", "45.47"),
                origin: Point::new(f64::from(col) * 150.0, f64::from(row) * 300.0),
                shapes: vec![
                    ApartmentShape::new(0.0, 80.0, 120.0, 120.0).with_label("С/У"),
                    ApartmentShape::new(0.0, 0.0, 60.0, 80.0).with_label("кухня"),
                    ApartmentShape::new(60.0, 0.0, 60.0, 80.0),
                    ApartmentShape::new(0.0, 200.0, 120.0, 80.0),
                ],
                highlight: Color::from_rgb8(0x7D, 0xD3, 0xC0),
            });
        }
    }
    let extent = f64::from(side);
    Scene::new(
        apartments,
        Rect::new(0.0, 0.0, extent * 150.0, extent * 300.0),
        vec![1],
        vec![1],
    )
    .expect("grid scene is valid")
}

fn probes(scene: &Scene) -> Vec<Point> {
    let bounds = scene.bounds();
    (0..256_u32)
        .map(|i| {
            let t = f64::from(i) / 256.0;
            Point::new(
                bounds.x0 + bounds.width() * t,
                bounds.y0 + bounds.height() * ((t * 7.0) % 1.0),
            )
        })
        .collect()
}

fn bench_reference_hit_test(c: &mut Criterion) {
    let scene = Scene::reference();
    let points = probes(&scene);
    let mut group = c.benchmark_group("hit_test/reference");
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("256_probes", |b| {
        b.iter(|| {
            for pt in &points {
                black_box(scene.hit_test(black_box(*pt)));
            }
        });
    });
    group.finish();
}

fn bench_grid_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test/grid");
    for side in [4_u32, 16, 64] {
        let scene = grid_scene(side);
        let points = probes(&scene);
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("apartments", side * side),
            &(scene, points),
            |b, (scene, points)| {
                b.iter(|| {
                    for pt in points {
                        black_box(scene.hit_test(black_box(*pt)));
                    }
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_reference_hit_test, bench_grid_hit_test);
criterion_main!(benches);
