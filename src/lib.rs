//! filmoteca - A small in-memory movie catalog served over REST
//!
//! CRUD over an ordered in-memory record store seeded from a JSON file,
//! with structured payload validation and an allow-list cross-origin
//! policy.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod schema;
pub mod store;
