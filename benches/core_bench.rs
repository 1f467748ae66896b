use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use geo_measure_editor::app::summarize;
use geo_measure_editor::core::measurement::total_distance;
use geo_measure_editor::{DistanceUnit, GeoPoint, UnitPreference};
use std::hint::black_box;

/// Zickzack-Route über Mitteleuropa, jeder 50. Punkt unvollständig.
fn build_synthetic_sequence(point_count: usize) -> Vec<GeoPoint> {
    (0..point_count)
        .map(|i| {
            if i % 50 == 49 {
                return GeoPoint::empty();
            }
            let lat = 47.0 + (i % 200) as f64 * 0.01;
            let long = 8.0 + (i / 200) as f64 * 0.01 + (i % 3) as f64 * 0.002;
            GeoPoint::new(lat, long)
        })
        .collect()
}

fn bench_total_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("total_distance");

    for &point_count in &[1_000usize, 100_000usize] {
        let points = build_synthetic_sequence(point_count);

        group.bench_with_input(
            BenchmarkId::new("kilometers", point_count),
            &points,
            |b, points| {
                b.iter(|| black_box(total_distance(black_box(points), DistanceUnit::Kilometers)))
            },
        );
    }

    group.finish();
}

fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");

    for &point_count in &[100usize, 10_000usize] {
        let points = build_synthetic_sequence(point_count);

        group.bench_with_input(
            BenchmarkId::new("rows", point_count),
            &points,
            |b, points| {
                b.iter(|| {
                    let summary = summarize(black_box(points), UnitPreference::default());
                    black_box(summary.rows.len())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(core_benches, bench_total_distance, bench_summarize);
criterion_main!(core_benches);
