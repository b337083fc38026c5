//! HTTP surface of the movie catalog
//!
//! Routing, handlers, error mapping, the cross-origin policy, and server
//! configuration. Handlers orchestrate the `schema` validator and the
//! `store`; cross-cutting concerns (CORS) are router-level layers.

mod config;
pub mod cors;
mod errors;
mod movie_routes;
mod server;

pub use config::{HttpServerConfig, DEFAULT_PORT, PORT_ENV_VAR};
pub use errors::{ApiError, ApiResult};
pub use movie_routes::{movie_routes, CatalogState, ListMoviesQuery, MessageResponse};
pub use server::{build_router, HttpServer};
