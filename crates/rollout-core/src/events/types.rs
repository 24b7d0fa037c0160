//! Event payloads emitted by the infection engine.

use serde::{Deserialize, Serialize};

use crate::models::PersonId;

/// How the selection heuristic arrived at a teacher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionKind {
    /// Strictly more infected students than every earlier candidate.
    Best,
    /// Fallback: some uninfected surface left, no overlap winner found.
    Backup,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonInfectedEvent {
    pub person: PersonId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassInfectedEvent {
    pub teacher: PersonId,
    /// Teacher plus students whose flag flipped.
    pub newly_infected: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherSelectedEvent {
    pub teacher: PersonId,
    pub kind: SelectionKind,
    pub infected_students: usize,
    pub total_students: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalInfectionCompleteEvent {
    pub start: PersonId,
    pub visited: usize,
    pub newly_infected: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitedInfectionCompleteEvent {
    pub start_teacher: PersonId,
    pub target: usize,
    pub newly_infected: usize,
    pub rounds: usize,
    pub target_reached: bool,
}
