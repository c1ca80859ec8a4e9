//! Benchmarks for the two Delaunay engines.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use delaunay2d::triangulation::{
    divide_and_conquer_delaunay, incremental_delaunay, incremental_delaunay_with,
    IncrementalConfig, LegalityTest,
};
use delaunay2d::Point2;

/// Generates random points in a 100x100 square.
fn generate_random_points(count: usize, seed: u64) -> Vec<Point2<f64>> {
    let mut points = Vec::with_capacity(count);
    let mut state = seed;

    for _ in 0..count {
        // xorshift for deterministic random
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let x = (state as f64 / u64::MAX as f64) * 100.0;

        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let y = (state as f64 / u64::MAX as f64) * 100.0;

        points.push(Point2::new(x, y));
    }

    points
}

/// Generates a jittered grid, which gives both engines many near-cocircular quads.
fn generate_grid_points(side: usize, seed: u64) -> Vec<Point2<f64>> {
    let mut points = Vec::with_capacity(side * side);
    let mut state = seed;

    for i in 0..side {
        for j in 0..side {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let jitter = (state as f64 / u64::MAX as f64 - 0.5) * 0.1;
            points.push(Point2::new(i as f64 + jitter, j as f64 - jitter));
        }
    }

    points
}

fn bench_incremental(c: &mut Criterion) {
    let mut group = c.benchmark_group("incremental_delaunay");

    for count in [100, 500, 1000, 2000] {
        let points = generate_random_points(count, 12345);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("random", count), &points, |b, pts| {
            b.iter(|| incremental_delaunay(black_box(pts)))
        });
    }

    group.finish();
}

fn bench_incremental_angle_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("incremental_angle_sum");
    let config = IncrementalConfig::default().with_legality(LegalityTest::AngleSum);

    for count in [100, 500, 1000] {
        let points = generate_random_points(count, 12345);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("random", count), &points, |b, pts| {
            b.iter(|| incremental_delaunay_with(black_box(pts), &config))
        });
    }

    group.finish();
}

fn bench_divide_and_conquer(c: &mut Criterion) {
    let mut group = c.benchmark_group("divide_and_conquer_delaunay");

    for count in [100, 1000, 10000, 50000] {
        let points = generate_random_points(count, 12345);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("random", count), &points, |b, pts| {
            b.iter(|| divide_and_conquer_delaunay(black_box(pts)))
        });
    }

    for side in [10, 30, 100] {
        let points = generate_grid_points(side, 54321);
        group.throughput(Throughput::Elements((side * side) as u64));

        group.bench_with_input(BenchmarkId::new("grid", side * side), &points, |b, pts| {
            b.iter(|| divide_and_conquer_delaunay(black_box(pts)))
        });
    }

    group.finish();
}

fn bench_face_recovery(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_triangulation_triangles");

    for count in [1000, 10000] {
        let points = generate_random_points(count, 12345);
        let Ok(dt) = divide_and_conquer_delaunay(&points) else {
            continue;
        };
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("random", count), &dt, |b, dt| {
            b.iter(|| black_box(dt).triangles())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_incremental,
    bench_incremental_angle_sum,
    bench_divide_and_conquer,
    bench_face_recovery,
);

criterion_main!(benches);
