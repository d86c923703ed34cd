use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use pdcel::Dcel;

// Triangulated grid of `n` by `n` vertices with unit spacing.
fn grid(n: usize) -> (Vec<(f64, f64)>, Vec<(usize, usize)>) {
    let vid = |i: usize, j: usize| j * n + i;
    let verts = (0..n)
        .flat_map(|j| (0..n).map(move |i| (i as f64, j as f64)))
        .collect();
    let mut edges = Vec::new();
    for j in 0..n {
        for i in 0..n {
            if i + 1 < n {
                edges.push((vid(i, j), vid(i + 1, j)));
            }
            if j + 1 < n {
                edges.push((vid(i, j), vid(i, j + 1)));
            }
            if i + 1 < n && j + 1 < n {
                edges.push((vid(i, j), vid(i + 1, j + 1)));
            }
        }
    }
    (verts, edges)
}

// Construction Benchmarks
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for n in [16usize, 64, 256] {
        let (verts, edges) = grid(n);
        group.bench_function(format!("grid_{}", n), |b| {
            b.iter(|| {
                let dcel = Dcel::from_parts(black_box(&verts), black_box(&edges)).unwrap();
                black_box(dcel);
            });
        });
    }

    group.finish();
}

// Query Benchmarks
fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");

    let (verts, edges) = grid(64);
    let dcel = Dcel::from_parts(&verts, &edges).unwrap();

    group.bench_function("statistics", |b| {
        b.iter(|| {
            black_box(dcel.statistics());
        });
    });

    group.bench_function("locate", |b| {
        b.iter(|| {
            black_box(dcel.locate(black_box((31.3, 17.8))));
        });
    });

    group.bench_function("check_topology", |b| {
        b.iter(|| {
            black_box(dcel.check_topology().unwrap());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_queries);
criterion_main!(benches);
