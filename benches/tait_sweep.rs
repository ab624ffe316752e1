// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Criterion benchmarks for the Tait-0 spin sweep: sequential vs.
//! `rayon`-parallel, on the cube graph Q3 (8 vertices, 6 faces).

use criterion::{criterion_group, criterion_main, Criterion};
use tait0_engine::{build_faces_matrix, calc_tait_0_detailed, find_faces, positions, AdjacencyMatrix, SweepOptions};

fn cube() -> AdjacencyMatrix {
    let n = 8;
    let mut data = vec![vec![0u8; n]; n];
    for i in 0..n {
        for bit in 0..3 {
            let j = i ^ (1 << bit);
            data[i][j] = 1;
        }
    }
    AdjacencyMatrix::new(data)
}

fn bench_tait_sweep(c: &mut Criterion) {
    let adj = cube();
    let pos = positions(&adj).expect("cube graph is planar");
    let faces = find_faces(&adj, &pos);
    let fm = build_faces_matrix(&faces);

    let mut group = c.benchmark_group("tait_sweep_cube");

    group.bench_function("sequential", |b| {
        b.iter(|| calc_tait_0_detailed(&fm, &SweepOptions::default()).unwrap())
    });

    group.bench_function("parallel", |b| {
        let opts = SweepOptions {
            parallel: true,
            cancel: None,
        };
        b.iter(|| calc_tait_0_detailed(&fm, &opts).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_tait_sweep);
criterion_main!(benches);
