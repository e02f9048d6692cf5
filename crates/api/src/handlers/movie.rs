//! Handlers for the `/movie` resource.
//!
//! Body and path extractors are taken as `Result`s so that malformed input is
//! reported through [`AppError`](crate::error::AppError) as a 400 with a JSON
//! body. The `{id}` segment is extracted as text: an id that is not an integer
//! names no movie and is answered with 404.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cinedex_core::error::CoreError;
use cinedex_core::movie::{require_text, require_text_if_present};
use cinedex_core::types::{parse_db_id, DbId};
use cinedex_db::models::movie::{CreateMovie, Movie, UpdateMovie};
use cinedex_db::repositories::MovieRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Resolve the `{id}` segment, treating non-integer text as an unknown movie.
fn movie_id(raw: &str) -> Result<DbId, CoreError> {
    parse_db_id(raw).ok_or_else(|| CoreError::movie_not_found(raw))
}

/// POST /movie/create
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateMovie>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let Json(input) = payload?;
    require_text("title", &input.title)?;
    require_text("director", &input.director)?;
    require_text("genre", &input.genre)?;

    let movie = MovieRepo::create(&state.pool, &input).await?;
    tracing::info!(movie_id = movie.id, title = %movie.title, "Movie created");
    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /movie/all
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Movie>>> {
    let movies = MovieRepo::list(&state.pool).await?;
    Ok(Json(movies))
}

/// GET /movie/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Movie>> {
    let Path(raw_id) = raw_id?;
    let id = movie_id(&raw_id)?;
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::movie_not_found(id))?;
    Ok(Json(movie))
}

/// GET /movie/search/title/{fragment}
///
/// An empty list is a successful result, never a 404.
pub async fn search_by_title(
    State(state): State<AppState>,
    fragment: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Vec<Movie>>> {
    let Path(fragment) = fragment?;
    let movies = MovieRepo::search_by_title(&state.pool, &fragment).await?;
    tracing::debug!(%fragment, matches = movies.len(), "Title search");
    Ok(Json(movies))
}

/// PUT /movie/update/{id}
///
/// Existence is checked before the body is decoded, so an unknown id wins
/// over a malformed body.
pub async fn update(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateMovie>, JsonRejection>,
) -> AppResult<Json<Movie>> {
    let Path(raw_id) = raw_id?;
    let id = movie_id(&raw_id)?;
    if MovieRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(CoreError::movie_not_found(id).into());
    }

    let Json(input) = payload?;
    require_text_if_present("title", input.title.as_deref())?;
    require_text_if_present("director", input.director.as_deref())?;
    require_text_if_present("genre", input.genre.as_deref())?;

    let movie = MovieRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::movie_not_found(id))?;
    tracing::info!(movie_id = id, "Movie updated");
    Ok(Json(movie))
}

/// DELETE /movie/delete/{id}
///
/// Responds with the record as it was before deletion.
pub async fn delete(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Movie>> {
    let Path(raw_id) = raw_id?;
    let id = movie_id(&raw_id)?;
    let movie = MovieRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::movie_not_found(id))?;
    tracing::info!(movie_id = id, "Movie deleted");
    Ok(Json(movie))
}
