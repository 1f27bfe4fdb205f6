//! Preview vs commit cost on the starter tree

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use treestep::{BstEngine, EngineConfig, Operation};

fn benchmark_engine(c: &mut Criterion) {
    let engine = BstEngine::<i32>::new(EngineConfig::starter());

    c.bench_function("preview_insert", |b| {
        b.iter(|| engine.preview(Operation::Insert, Some(black_box(44))))
    });

    c.bench_function("preview_delete_root", |b| {
        b.iter(|| engine.preview(Operation::Delete, Some(black_box(50))))
    });

    c.bench_function("preview_inorder", |b| {
        b.iter(|| engine.preview(Operation::Inorder, None))
    });

    c.bench_function("commit_insert_on_clone", |b| {
        b.iter(|| {
            let mut scratch = engine.clone();
            scratch
                .commit(Operation::Insert, Some(black_box(44)))
                .map(|()| scratch.count())
        })
    });
}

criterion_group!(benches, benchmark_engine);
criterion_main!(benches);
