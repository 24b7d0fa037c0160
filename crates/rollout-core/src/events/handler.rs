//! InfectionEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing infection events.
///
/// Handlers only override the events they care about.
pub trait InfectionEventHandler: Send + Sync {
    fn on_person_infected(&self, _event: &PersonInfectedEvent) {}
    fn on_class_infected(&self, _event: &ClassInfectedEvent) {}
    fn on_teacher_selected(&self, _event: &TeacherSelectedEvent) {}
    fn on_total_infection_complete(&self, _event: &TotalInfectionCompleteEvent) {}
    fn on_limited_infection_complete(&self, _event: &LimitedInfectionCompleteEvent) {}
}
