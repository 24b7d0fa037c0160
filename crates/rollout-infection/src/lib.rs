//! # rollout-infection
//!
//! Moves people onto the new version. Two policies:
//! - **total**: everyone reachable from a start person over the connection index;
//! - **limited**: whole classes, teacher by teacher, until a target count is met,
//!   with the next teacher chosen greedily by infected-student overlap.

pub mod class_infection;
pub mod engine;
pub mod limited;
pub mod outcome;
pub mod selection;
pub mod total;

pub use engine::InfectionEngine;
pub use outcome::{LimitedInfectionOutcome, StopReason, TotalInfectionOutcome};
pub use selection::{TeacherSelection, TeacherTally};
