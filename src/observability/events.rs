//! Lifecycle event names
//!
//! Events are a closed set so log consumers can match on exact names.

/// Lifecycle events emitted by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Process started, configuration resolved
    BootStart,
    /// Seed file loaded into the store
    SeedLoaded,
    /// Listener bound, serving requests
    ServerListening,
    /// A record was created
    MovieCreated,
    /// A record was updated in place
    MovieUpdated,
    /// A record was deleted
    MovieDeleted,
    /// A request body failed validation
    PayloadRejected,
}

impl Event {
    /// Returns the event name as logged.
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::SeedLoaded => "SEED_LOADED",
            Event::ServerListening => "SERVER_LISTENING",
            Event::MovieCreated => "MOVIE_CREATED",
            Event::MovieUpdated => "MOVIE_UPDATED",
            Event::MovieDeleted => "MOVIE_DELETED",
            Event::PayloadRejected => "PAYLOAD_REJECTED",
        }
    }
}
