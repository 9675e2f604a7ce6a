// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use floorplan::{Context, ControllerConfig, Event, FloorPlanState, reduce};
use floorplan_scene::Scene;
use floorplan_view2d::{Viewport2D, ZoomDirection, ZoomLimits};
use kurbo::{Point, Rect};

fn bench_zoom_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/zoom_step");
    let view = Rect::new(0.0, 0.0, 1000.0, 600.0);

    group.bench_function("unbounded", |b| {
        b.iter_batched(
            || Viewport2D::new(view),
            |mut vp| {
                for i in 0..64_u32 {
                    let pointer = Point::new(f64::from(i) * 15.0, 300.0);
                    let direction = if i % 3 == 0 {
                        ZoomDirection::Out
                    } else {
                        ZoomDirection::In
                    };
                    vp.zoom_step(black_box(pointer), direction, 1.02);
                }
                black_box(vp);
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("limited", |b| {
        b.iter_batched(
            || {
                let mut vp = Viewport2D::new(view);
                vp.set_zoom_limits(ZoomLimits::new(0.5, 1.5));
                vp
            },
            |mut vp| {
                for i in 0..64_u32 {
                    let pointer = Point::new(f64::from(i) * 15.0, 300.0);
                    vp.zoom_step(black_box(pointer), ZoomDirection::In, 1.02);
                }
                black_box(vp);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_reduce_wheel(c: &mut Criterion) {
    let scene = Scene::reference();
    let config = ControllerConfig::default();
    let ctx = Context {
        scene: &scene,
        config: &config,
    };
    let initial = FloorPlanState::initial(&scene, &config);
    let event = Event::Wheel {
        pointer: Point::new(500.0, 300.0),
        delta_y: -100.0,
    };

    c.bench_function("viewport/reduce_wheel", |b| {
        b.iter(|| black_box(reduce(&ctx, black_box(&initial), black_box(&event))));
    });
}

criterion_group!(benches, bench_zoom_step, bench_reduce_wheel);
criterion_main!(benches);
