//! Event system: observe infection as it happens.
//! Synchronous dispatch, no-op defaults, zero cost when no handler is registered.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::InfectionEventHandler;
pub use types::*;
