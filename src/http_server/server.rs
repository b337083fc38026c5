//! HTTP server
//!
//! Assembles the movie routes, applies the cross-origin layer, and
//! serves over a Tokio TCP listener.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::observability::{log_event, Event};
use crate::store::MovieStore;

use super::config::HttpServerConfig;
use super::cors::cors_layer;
use super::movie_routes::{movie_routes, CatalogState};

/// HTTP server for the movie catalog
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server owning the given store.
    pub fn new(config: HttpServerConfig, store: MovieStore) -> Self {
        let router = build_router(store);
        Self { config, router }
    }

    /// Get the socket address string.
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for driving the service in tests without a
    /// listener).
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process exits.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        log_event(
            Event::ServerListening,
            &[("addr", &addr.to_string())],
        );

        axum::serve(listener, self.router).await
    }
}

/// Build the full router: movie routes behind the cross-origin layer.
pub fn build_router(store: MovieStore) -> Router {
    let state = Arc::new(CatalogState::new(store));
    movie_routes(state).layer(cors_layer())
}
