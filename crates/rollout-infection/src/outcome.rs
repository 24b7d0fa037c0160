//! Summaries returned by the propagation policies.
//!
//! The contract of both policies is the flag mutation on the graph; these
//! structs only report what happened.

use rollout_core::PersonId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalInfectionOutcome {
    pub start: PersonId,
    /// People reached, `start` included.
    pub visited: usize,
    /// People whose flag flipped during this call.
    pub newly_infected: usize,
}

/// Why limited infection stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    TargetReached,
    /// Every teacher's classes are already fully infected.
    NoEligibleTeacher,
    /// `limited.max_rounds` was hit first.
    RoundLimit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitedInfectionOutcome {
    pub start_teacher: PersonId,
    pub target: usize,
    /// May exceed `target`: classes are infected whole.
    pub newly_infected: usize,
    /// Teachers whose classes were infected, in order, starting teacher first.
    pub infected_teachers: Vec<PersonId>,
    /// Heuristic-selected rounds after the starting teacher.
    pub rounds: usize,
    pub stop_reason: StopReason,
}

impl LimitedInfectionOutcome {
    pub fn target_reached(&self) -> bool {
        self.stop_reason == StopReason::TargetReached
    }
}
