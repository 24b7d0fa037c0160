//! Limited infection: whole classes until a target count is reached.

use rollout_core::events::{EventDispatcher, TeacherSelectedEvent};
use rollout_core::PersonId;
use rollout_graph::UserGraph;
use tracing::{debug, info};

use crate::class_infection::infect_class;
use crate::outcome::{LimitedInfectionOutcome, StopReason};
use crate::selection::pick_best_teacher;

/// Infect `start_teacher`'s classes, then keep infecting the classes of the
/// heuristic's pick until at least `target` flags flipped, no teacher is
/// eligible, or `max_rounds` picks were made.
///
/// Falling short of `target` is not an error. Overshoot is expected.
pub fn infect_limited(
    graph: &mut UserGraph,
    start_teacher: PersonId,
    target: usize,
    max_rounds: u32,
    events: &EventDispatcher,
) -> LimitedInfectionOutcome {
    let first = infect_class(graph, start_teacher, events);
    let mut remaining = target.saturating_sub(first);
    let mut outcome = LimitedInfectionOutcome {
        start_teacher,
        target,
        newly_infected: first,
        infected_teachers: vec![start_teacher],
        rounds: 0,
        stop_reason: StopReason::TargetReached,
    };

    while remaining > 0 {
        if outcome.rounds >= max_rounds as usize {
            outcome.stop_reason = StopReason::RoundLimit;
            break;
        }
        let Some(selection) = pick_best_teacher(graph) else {
            outcome.stop_reason = StopReason::NoEligibleTeacher;
            break;
        };

        let teacher = selection.teacher();
        debug!(
            teacher = %teacher,
            kind = ?selection.kind,
            infected_students = selection.tally.infected_students,
            total_students = selection.tally.total_students,
            remaining,
            "teacher selected"
        );
        events.emit_teacher_selected(&TeacherSelectedEvent {
            teacher,
            kind: selection.kind,
            infected_students: selection.tally.infected_students,
            total_students: selection.tally.total_students,
        });

        let newly = infect_class(graph, teacher, events);
        remaining = remaining.saturating_sub(newly);
        outcome.newly_infected += newly;
        outcome.infected_teachers.push(teacher);
        outcome.rounds += 1;
    }

    if outcome.stop_reason != StopReason::TargetReached {
        info!(
            target_count = target,
            newly_infected = outcome.newly_infected,
            reason = ?outcome.stop_reason,
            "limited infection stopped short of target"
        );
    }
    outcome
}
