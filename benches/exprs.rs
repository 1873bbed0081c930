extern crate criterion;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use mipmodel::*;

// Flattening of lazy expressions into model storage

fn objective_from_xsum(n : usize) -> Model {
    let mut m = Model::new();
    let x = m.add_vars(n, |i : usize| i);
    m.add_obj(xsum_with(0..n, &x, |i| (i % 7) as f64 - 3.0));
    m
}

fn dense_rows(n : usize) -> Model {
    let mut m = Model::new();
    let x = m.add_vars(n * n, |(i,j) : (usize,usize)| i * n + j);
    for i in 0..n {
        m.add_constraint(xsum(0..n, |j| x((i,j))).less_than(1.0));
        m.add_constraint(xsum(0..n, |j| x((j,i))).equal_to(1.0));
    }
    m
}

fn chained_operators(n : usize) -> Model {
    let mut m = Model::new();
    let x = m.add_vars(n, |i : usize| i);
    for i in 2..n {
        m.add_constraint((2.0 * x(i) - x(i-1) - x(i-2) + 1.0).in_range(-1.0,1.0));
    }
    m
}

fn materialized(n : usize) -> Model {
    let mut m = Model::new();
    let x = m.add_vars(n, |i : usize| i);
    let rows : Vec<LinearExpr> = (1..n).map(|i| (x(i) - x(i-1)).to_linear_expr()).collect();
    for r in rows.iter() {
        m.add_constraint(r.greater_than(0.0));
    }
    m
}

fn bench_flatten(c : &mut Criterion) {
    let mut group = c.benchmark_group("flatten");
    for n in [100usize, 1000] {
        group.bench_with_input(BenchmarkId::new("objective_xsum", n), &n, |b,&n| b.iter(|| black_box(objective_from_xsum(n))));
        group.bench_with_input(BenchmarkId::new("chained_operators", n), &n, |b,&n| b.iter(|| black_box(chained_operators(n))));
        group.bench_with_input(BenchmarkId::new("materialized", n), &n, |b,&n| b.iter(|| black_box(materialized(n))));
    }
    for n in [10usize, 50] {
        group.bench_with_input(BenchmarkId::new("assignment_rows", n), &n, |b,&n| b.iter(|| black_box(dense_rows(n))));
    }
    group.finish();
}

fn bench_build(c : &mut Criterion) {
    let m = dense_rows(50);
    c.bench_function("build_dummy", |b| b.iter(|| {
        let s : DummySolver = m.build().unwrap();
        black_box(s)
    }));
}

criterion_group!(benches, bench_flatten, bench_build);
criterion_main!(benches);
