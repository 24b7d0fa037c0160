//! The unit of work for limited infection: one teacher and all their classes.

use rollout_core::events::{ClassInfectedEvent, EventDispatcher, PersonInfectedEvent};
use rollout_core::PersonId;
use rollout_graph::UserGraph;
use tracing::debug;

/// Infect `teacher` and every student of every class they teach.
///
/// Returns how many flags flipped (teacher included). A person who teaches
/// nothing contributes only themselves; an unknown handle contributes 0.
pub fn infect_class(graph: &mut UserGraph, teacher: PersonId, events: &EventDispatcher) -> usize {
    let (classes, _, people) = graph.parts_mut();
    if !people.contains(teacher) {
        return 0;
    }

    let mut newly_infected = 0;
    for person in std::iter::once(teacher).chain(classes.students(teacher)) {
        if people.infect(person) {
            newly_infected += 1;
            events.emit_person_infected(&PersonInfectedEvent { person });
        }
    }

    debug!(
        teacher = %teacher,
        classes = classes.classes(teacher).len(),
        newly_infected,
        "classes infected"
    );
    events.emit_class_infected(&ClassInfectedEvent {
        teacher,
        newly_infected,
    });
    newly_infected
}
