//! InfectionEngine: configured entry point for both propagation policies.

use std::sync::Arc;

use rollout_core::events::{
    EventDispatcher, InfectionEventHandler, LimitedInfectionCompleteEvent,
    TotalInfectionCompleteEvent,
};
use rollout_core::{PersonId, RolloutConfig, TraversalOrder};
use rollout_graph::UserGraph;
use tracing::info;

use crate::outcome::{LimitedInfectionOutcome, TotalInfectionOutcome};
use crate::selection::{self, TeacherSelection};
use crate::{class_infection, limited, total};

/// Runs total and limited infection against a [`UserGraph`].
///
/// The engine borrows the graph mutably for the whole call, so the graph
/// cannot change underneath a propagation.
#[derive(Debug, Clone)]
pub struct InfectionEngine {
    order: TraversalOrder,
    max_rounds: u32,
    events: EventDispatcher,
}

impl InfectionEngine {
    /// Create an engine with default settings.
    pub fn new() -> Self {
        Self::with_config(&RolloutConfig::default())
    }

    pub fn with_config(config: &RolloutConfig) -> Self {
        Self {
            order: config.traversal.order,
            max_rounds: config.limited.effective_max_rounds(),
            events: EventDispatcher::new(),
        }
    }

    pub fn register_handler(&mut self, handler: Arc<dyn InfectionEventHandler>) {
        self.events.register(handler);
    }

    pub fn traversal_order(&self) -> TraversalOrder {
        self.order
    }

    /// Infect everyone reachable from `start`.
    pub fn total_infection(&self, graph: &mut UserGraph, start: PersonId) -> TotalInfectionOutcome {
        let span = rollout_core::total_infection_span!(start, self.order);
        let _guard = span.enter();

        let outcome = total::infect_reachable(graph, start, self.order, &self.events);
        info!(
            visited = outcome.visited,
            newly_infected = outcome.newly_infected,
            "total infection complete"
        );
        self.events
            .emit_total_infection_complete(&TotalInfectionCompleteEvent {
                start,
                visited: outcome.visited,
                newly_infected: outcome.newly_infected,
            });
        outcome
    }

    /// Infect whole classes, starting with `start_teacher`, until at least
    /// `target` people were newly infected or nobody is left to pick.
    pub fn limited_infection(
        &self,
        graph: &mut UserGraph,
        start_teacher: PersonId,
        target: usize,
    ) -> LimitedInfectionOutcome {
        let span = rollout_core::limited_infection_span!(start_teacher, target);
        let _guard = span.enter();

        let outcome =
            limited::infect_limited(graph, start_teacher, target, self.max_rounds, &self.events);
        info!(
            newly_infected = outcome.newly_infected,
            classes_infected = outcome.infected_teachers.len(),
            rounds = outcome.rounds,
            "limited infection complete"
        );
        self.events
            .emit_limited_infection_complete(&LimitedInfectionCompleteEvent {
                start_teacher,
                target,
                newly_infected: outcome.newly_infected,
                rounds: outcome.rounds,
                target_reached: outcome.target_reached(),
            });
        outcome
    }

    /// Infect one teacher and all their students. Returns the newly-infected count.
    pub fn infect_class(&self, graph: &mut UserGraph, teacher: PersonId) -> usize {
        class_infection::infect_class(graph, teacher, &self.events)
    }

    /// The teacher limited infection would pick next.
    pub fn pick_best_teacher(&self, graph: &UserGraph) -> Option<TeacherSelection> {
        selection::pick_best_teacher(graph)
    }
}

impl Default for InfectionEngine {
    fn default() -> Self {
        Self::new()
    }
}
