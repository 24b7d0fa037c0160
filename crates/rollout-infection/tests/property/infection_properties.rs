//! Property tests for rollout-infection on random school layouts.

use proptest::prelude::*;

use rollout_core::{PersonId, RolloutConfig, TraversalOrder};
use rollout_graph::UserGraph;
use rollout_infection::InfectionEngine;

const PEOPLE: usize = 24;

type Layout = Vec<(usize, Vec<Vec<usize>>)>;

fn layout_strategy() -> impl Strategy<Value = Layout> {
    prop::collection::vec(
        (
            0..PEOPLE,
            prop::collection::vec(prop::collection::vec(0..PEOPLE, 0..5), 0..3),
        ),
        0..10,
    )
}

/// Reachable set computed from the layout alone: a class with at least one
/// student links its teacher and students together.
fn expected_reachable(layout: &Layout, start: usize) -> Vec<bool> {
    let mut reached = vec![false; PEOPLE];
    reached[start] = true;
    let mut changed = true;
    while changed {
        changed = false;
        for (teacher, classes) in layout {
            for class in classes.iter().filter(|c| !c.is_empty()) {
                let members: Vec<usize> = std::iter::once(*teacher).chain(class.iter().copied()).collect();
                if members.iter().any(|&m| reached[m]) {
                    for m in members {
                        if !reached[m] {
                            reached[m] = true;
                            changed = true;
                        }
                    }
                }
            }
        }
    }
    reached
}

fn flags(graph: &UserGraph) -> Vec<bool> {
    graph.population().iter().map(|(_, p)| p.is_infected()).collect()
}

fn engine(order: TraversalOrder) -> InfectionEngine {
    let mut config = RolloutConfig::default();
    config.traversal.order = order;
    InfectionEngine::with_config(&config)
}

fn order_strategy() -> impl Strategy<Value = TraversalOrder> {
    prop_oneof![
        Just(TraversalOrder::BreadthFirst),
        Just(TraversalOrder::DepthFirst)
    ]
}

proptest! {
    #[test]
    fn total_infection_marks_exactly_the_reachable_set(
        layout in layout_strategy(),
        start in 0..PEOPLE,
        order in order_strategy(),
    ) {
        let (mut graph, ids) = test_fixtures::from_layout(PEOPLE, &layout);
        engine(order).total_infection(&mut graph, ids[start]);
        prop_assert_eq!(flags(&graph), expected_reachable(&layout, start));
    }

    #[test]
    fn total_infection_is_idempotent(
        layout in layout_strategy(),
        start in 0..PEOPLE,
    ) {
        let (mut graph, ids) = test_fixtures::from_layout(PEOPLE, &layout);
        let engine = InfectionEngine::new();
        engine.total_infection(&mut graph, ids[start]);
        let once = flags(&graph);
        let again = engine.total_infection(&mut graph, ids[start]);
        prop_assert_eq!(flags(&graph), once);
        prop_assert_eq!(again.newly_infected, 0);
    }

    #[test]
    fn limited_infection_infects_whole_classes(
        layout in layout_strategy(),
        start in 0..PEOPLE,
        target in 0_usize..PEOPLE * 2,
    ) {
        let (mut graph, ids) = test_fixtures::from_layout(PEOPLE, &layout);
        let outcome = InfectionEngine::new().limited_infection(&mut graph, ids[start], target);

        for &teacher in &outcome.infected_teachers {
            prop_assert!(graph.is_infected(teacher));
            for student in graph.class_graph().students(teacher) {
                prop_assert!(graph.is_infected(student));
            }
        }

        // Everyone infected belongs to one of the infected teachers' groups.
        for (person, p) in graph.population().iter() {
            if p.is_infected() {
                let covered = outcome.infected_teachers.iter().any(|&t| {
                    t == person || graph.class_graph().students(t).any(|s| s == person)
                });
                prop_assert!(covered, "{person} infected outside any infected class");
            }
        }

        let infected = flags(&graph).iter().filter(|&&f| f).count();
        prop_assert_eq!(infected, outcome.newly_infected);
        if outcome.target_reached() {
            prop_assert!(outcome.newly_infected >= target);
        } else {
            prop_assert!(engine(TraversalOrder::BreadthFirst).pick_best_teacher(&graph).is_none());
        }
    }

    #[test]
    fn infection_count_never_decreases(
        layout in layout_strategy(),
        ops in prop::collection::vec((any::<bool>(), 0..PEOPLE, 0_usize..10), 1..8),
    ) {
        let (mut graph, ids) = test_fixtures::from_layout(PEOPLE, &layout);
        let engine = InfectionEngine::new();
        let mut previous_flags = flags(&graph);
        let mut previous_count = graph.count_infected();

        for (total, who, target) in ops {
            let person: PersonId = ids[who];
            if total {
                engine.total_infection(&mut graph, person);
            } else {
                engine.limited_infection(&mut graph, person, target);
            }

            let current_flags = flags(&graph);
            for (before, after) in previous_flags.iter().zip(&current_flags) {
                prop_assert!(!before || *after, "a flag was reset");
            }
            let count = graph.count_infected();
            prop_assert!(count >= previous_count);
            previous_flags = current_flags;
            previous_count = count;
        }
    }
}
