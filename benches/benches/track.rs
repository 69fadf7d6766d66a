// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `zoetrope_track` + `zoetrope_carousel` hot paths.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use zoetrope_carousel::VisibilityLog;
use zoetrope_track::{
    ContentProvider, FixedPitchContent, TrackMetrics, clamp_index, resolve_position,
};

fn bench_track(c: &mut Criterion) {
    let mut group = c.benchmark_group("track");

    for len in [16_usize, 1_024, 10_000] {
        let mut metrics = TrackMetrics::new();
        metrics.set_content_width(len as f64 * 100.0);
        metrics.set_viewport_width(260.0);

        group.bench_with_input(BenchmarkId::new("resolve_position", len), &len, |b, &len| {
            let mut content = FixedPitchContent::new(len, 100.0);
            b.iter(|| {
                let index = clamp_index(black_box(len as i64 - 1), content.len()).unwrap();
                resolve_position(&mut content, &metrics, index, true)
            });
        });

        group.bench_with_input(BenchmarkId::new("visibility_record", len), &len, |b, &len| {
            let mut content = FixedPitchContent::new(len, 100.0);
            b.iter(|| {
                let mut log = VisibilityLog::new();
                log.record(&mut content, black_box(metrics.end_stop()), 260.0);
                log.len()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_track);
criterion_main!(benches);
