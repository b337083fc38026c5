//! Movie HTTP routes
//!
//! Endpoints over the movie catalog. Handlers orchestrate the validator
//! and the store and return JSON; CORS headers come from the router-level
//! layer, never from here.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, options, patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::observability::{log_event, Event};
use crate::schema::{validate_movie, validate_partial_movie};
use crate::store::{Movie, MovieStore};

use super::errors::ApiResult;

/// State shared across movie handlers: the catalog itself.
pub struct CatalogState {
    pub store: MovieStore,
}

impl CatalogState {
    pub fn new(store: MovieStore) -> Self {
        Self { store }
    }
}

/// Plain message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Query parameters accepted by the listing endpoint
#[derive(Debug, Deserialize)]
pub struct ListMoviesQuery {
    pub genre: Option<String>,
}

/// Create the movie routes.
pub fn movie_routes(state: Arc<CatalogState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/movies", get(list_movies_handler))
        .route("/movies", post(create_movie_handler))
        .route("/movies/:id", get(get_movie_handler))
        .route("/movies/:id", patch(update_movie_handler))
        .route("/movies/:id", delete(delete_movie_handler))
        .route("/movies/:id", options(preflight_handler))
        .with_state(state)
}

async fn index_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new("hola mundo"))
}

async fn list_movies_handler(
    State(state): State<Arc<CatalogState>>,
    Query(query): Query<ListMoviesQuery>,
) -> Json<Vec<Movie>> {
    let movies = state.store.list(query.genre.as_deref());
    Json(movies)
}

async fn get_movie_handler(
    State(state): State<Arc<CatalogState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Movie>> {
    let movie = state.store.get(&id)?;
    Ok(Json(movie))
}

async fn create_movie_handler(
    State(state): State<Arc<CatalogState>>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<Movie>)> {
    let draft = validate_movie(&body).inspect_err(|err| {
        let count = err.violations.len().to_string();
        log_event(
            Event::PayloadRejected,
            &[("path", "/movies"), ("violations", &count)],
        );
    })?;

    let movie = state.store.create(draft);
    log_event(
        Event::MovieCreated,
        &[("id", &movie.id), ("title", &movie.title)],
    );

    Ok((StatusCode::CREATED, Json(movie)))
}

async fn update_movie_handler(
    State(state): State<Arc<CatalogState>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Movie>> {
    let patch = validate_partial_movie(&body).inspect_err(|err| {
        let count = err.violations.len().to_string();
        log_event(
            Event::PayloadRejected,
            &[("path", "/movies/:id"), ("violations", &count)],
        );
    })?;

    let movie = state.store.update(&id, patch)?;
    log_event(Event::MovieUpdated, &[("id", &movie.id)]);

    Ok(Json(movie))
}

async fn delete_movie_handler(
    State(state): State<Arc<CatalogState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state.store.delete(&id)?;
    log_event(Event::MovieDeleted, &[("id", &id)]);

    Ok(Json(MessageResponse::new("Movie deleted")))
}

/// Plain 200 for non-preflight OPTIONS probes. Real preflights are
/// answered by the CORS layer before they reach the router.
async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_state_creation() {
        let state = CatalogState::new(MovieStore::new());
        assert!(state.store.is_empty());
    }

    #[test]
    fn test_message_response_shape() {
        let json = serde_json::to_value(MessageResponse::new("hola mundo")).unwrap();
        assert_eq!(json["message"], "hola mundo");
    }
}
