// Copyright 2025 the Gearwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gearwork_sites::{Placement, SiteRegistry};
use kurbo::{Point, Rect};

fn registry(n: usize) -> SiteRegistry {
    let placements = (0..n)
        .map(|i| Placement::new(Point::new(i as f64 * 2.0, 0.0), 0.8))
        .collect();
    let slots = (0..n)
        .map(|i| {
            let x = i as f64 * 20.0;
            Rect::new(x, 100.0, x + 16.0, 116.0)
        })
        .collect();
    SiteRegistry::new(placements, slots, Rect::new(0.0, 90.0, n as f64 * 20.0, 120.0))
}

fn bench_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("gearwork_sites");

    for &n in &[8_usize, 128, 1024] {
        let sites = registry(n);
        let last_slot = sites.slot(n - 1).expect("slot").center();
        let last_placement = sites.placement(n - 1).expect("placement").center;

        group.bench_function(format!("hit_last_slot(n={n})"), |b| {
            b.iter(|| black_box(sites.hit(black_box(Point::new(-50.0, -50.0)), last_slot)));
        });
        group.bench_function(format!("hit_last_placement(n={n})"), |b| {
            b.iter(|| {
                black_box(sites.hit(black_box(last_placement), Point::new(-50.0, -50.0)))
            });
        });
        group.bench_function(format!("miss(n={n})"), |b| {
            b.iter(|| {
                black_box(sites.hit(
                    black_box(Point::new(-50.0, -50.0)),
                    Point::new(-50.0, -50.0),
                ))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_hit);
criterion_main!(benches);
