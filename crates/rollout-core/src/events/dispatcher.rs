//! EventDispatcher: synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use tracing::warn;

use super::handler::InfectionEventHandler;
use super::types::*;

/// Synchronous dispatcher wrapping a list of handlers.
#[derive(Default, Clone)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn InfectionEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn register(&mut self, handler: Arc<dyn InfectionEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler does not prevent later handlers from receiving the event.
    fn emit<F: Fn(&dyn InfectionEventHandler)>(&self, f: F) {
        for (position, handler) in self.handlers.iter().enumerate() {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                warn!(handler = position, "event handler panicked");
            }
        }
    }

    pub fn emit_person_infected(&self, event: &PersonInfectedEvent) {
        self.emit(|h| h.on_person_infected(event));
    }

    pub fn emit_class_infected(&self, event: &ClassInfectedEvent) {
        self.emit(|h| h.on_class_infected(event));
    }

    pub fn emit_teacher_selected(&self, event: &TeacherSelectedEvent) {
        self.emit(|h| h.on_teacher_selected(event));
    }

    pub fn emit_total_infection_complete(&self, event: &TotalInfectionCompleteEvent) {
        self.emit(|h| h.on_total_infection_complete(event));
    }

    pub fn emit_limited_infection_complete(&self, event: &LimitedInfectionCompleteEvent) {
        self.emit(|h| h.on_limited_infection_complete(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
