//! Route definitions for the movie resource, mounted at `/movie`.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Movie routes mounted at `/movie`.
///
/// ```text
/// POST   /create                  -> create
/// GET    /all                     -> list
/// GET    /{id}                    -> get_by_id
/// GET    /search/title/{fragment} -> search_by_title
/// PUT    /update/{id}             -> update
/// DELETE /delete/{id}             -> delete
/// ```
///
/// Static segments take precedence over `/{id}`, so `/all` never reaches
/// `get_by_id`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(movie::create))
        .route("/all", get(movie::list))
        .route("/{id}", get(movie::get_by_id))
        .route("/search/title/{fragment}", get(movie::search_by_title))
        .route("/update/{id}", put(movie::update))
        .route("/delete/{id}", delete(movie::delete))
}
