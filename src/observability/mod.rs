//! Observability for the movie service
//!
//! Structured JSON logging only: one line per event, deterministic key
//! ordering, synchronous writes. Logging is read-only with respect to
//! request handling and must never affect a response.

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event with fields.
pub fn log_event(event: Event, fields: &[(&str, &str)]) {
    Logger::info(event.as_str(), fields);
}
