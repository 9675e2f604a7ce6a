// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use floorplan::{Controller, Event};

fn bench_render(c: &mut Criterion) {
    let mut viewer = Controller::reference();
    viewer.handle(Event::Click {
        apartment: "apt-left".into(),
    });

    let mut group = c.benchmark_group("render/reference");
    group.bench_function("display_tree", |b| {
        b.iter(|| black_box(viewer.render()));
    });

    let display = viewer.render();
    group.bench_function("svg_export", |b| {
        b.iter(|| black_box(display.to_svg()));
    });
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
