//! Total infection: mark everyone reachable from a start person.
//!
//! Work-list traversal over the connection index with a visited set owned by
//! the call, so depth is bounded by memory rather than the call stack.

use std::collections::VecDeque;

use rollout_core::events::{EventDispatcher, PersonInfectedEvent};
use rollout_core::{PersonId, TraversalOrder};
use rollout_graph::UserGraph;
use rustc_hash::FxHashSet;

use crate::outcome::TotalInfectionOutcome;

/// Infect `start` and every person reachable from it.
///
/// People already infected stay infected; unreachable people are untouched.
/// An unknown handle is a no-op. A person never attached to the graph only
/// reaches itself.
pub fn infect_reachable(
    graph: &mut UserGraph,
    start: PersonId,
    order: TraversalOrder,
    events: &EventDispatcher,
) -> TotalInfectionOutcome {
    let mut outcome = TotalInfectionOutcome {
        start,
        visited: 0,
        newly_infected: 0,
    };

    let (_, connections, people) = graph.parts_mut();
    if !people.contains(start) {
        return outcome;
    }

    let mut visit = |person: PersonId| {
        outcome.visited += 1;
        if people.infect(person) {
            outcome.newly_infected += 1;
            events.emit_person_infected(&PersonInfectedEvent { person });
        }
    };

    let Some(start_idx) = connections.node(start) else {
        visit(start);
        return outcome;
    };

    let net = connections.graph();
    let mut visited = FxHashSet::default();
    visited.insert(start_idx);
    let mut frontier = VecDeque::new();
    frontier.push_back(start_idx);

    loop {
        let next = match order {
            TraversalOrder::BreadthFirst => frontier.pop_front(),
            TraversalOrder::DepthFirst => frontier.pop_back(),
        };
        let Some(current) = next else {
            break;
        };

        visit(net[current]);

        for neighbor in net.neighbors(current) {
            // Marked on discovery so nobody is queued twice.
            if visited.insert(neighbor) {
                frontier.push_back(neighbor);
            }
        }
    }

    outcome
}
