use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use monoscore::{create, Bounds, ReferenceSet};

fn grid_refs() -> ReferenceSet {
    let mut set = ReferenceSet::new();
    for x in 0..4 {
        for y in 0..4 {
            let point = vec![f64::from(x), f64::from(y)];
            let value = f64::from(x) * 3.0 + f64::from(y) * 7.0;
            set.insert(point, value);
        }
    }
    set
}

fn bench_create(c: &mut Criterion) {
    let refs = grid_refs();
    c.bench_function("create_16pt_grid", |b| {
        b.iter(|| create(black_box(&refs), &[1, 1], Bounds::none()).unwrap())
    });
}

fn bench_calculate(c: &mut Criterion) {
    let refs = grid_refs();
    let func = create(&refs, &[1, 1], Bounds::none()).unwrap();
    let queries: Vec<Vec<f64>> = (0..100)
        .map(|i| vec![f64::from(i) * 0.03, 3.0 - f64::from(i) * 0.03])
        .collect();
    c.bench_function("calculate_100_queries", |b| {
        b.iter(|| func.calculate(black_box(&queries)))
    });
}

criterion_group!(benches, bench_create, bench_calculate);
criterion_main!(benches);
