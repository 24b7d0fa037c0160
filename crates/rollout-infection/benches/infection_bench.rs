use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use rollout_core::{RolloutConfig, TraversalOrder};
use rollout_infection::InfectionEngine;

fn bench_total_infection(c: &mut Criterion) {
    let (graph, teachers) = test_fixtures::school(200, 4, 25);
    for order in [TraversalOrder::BreadthFirst, TraversalOrder::DepthFirst] {
        let mut config = RolloutConfig::default();
        config.traversal.order = order;
        let engine = InfectionEngine::with_config(&config);

        c.bench_function(&format!("total_infection_{order}_20k_people"), |b| {
            b.iter_batched(
                || graph.clone(),
                |mut graph| engine.total_infection(&mut graph, teachers[100]),
                BatchSize::LargeInput,
            );
        });
    }
}

fn bench_limited_infection(c: &mut Criterion) {
    let (graph, teachers) = test_fixtures::school(200, 4, 25);
    let engine = InfectionEngine::new();

    c.bench_function("limited_infection_target_2k", |b| {
        b.iter_batched(
            || graph.clone(),
            |mut graph| engine.limited_infection(&mut graph, teachers[0], 2_000),
            BatchSize::LargeInput,
        );
    });
}

fn bench_pick_best_teacher(c: &mut Criterion) {
    let (mut graph, teachers) = test_fixtures::school(200, 4, 25);
    let engine = InfectionEngine::new();
    engine.infect_class(&mut graph, teachers[50]);

    c.bench_function("pick_best_teacher_200_teachers", |b| {
        b.iter(|| engine.pick_best_teacher(&graph));
    });
}

criterion_group!(
    benches,
    bench_total_infection,
    bench_limited_infection,
    bench_pick_best_teacher
);
criterion_main!(benches);
