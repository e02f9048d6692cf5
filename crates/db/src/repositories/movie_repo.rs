//! Repository for the `movie` table.

use cinedex_core::search::contains_pattern;
use cinedex_core::types::DbId;

use crate::models::movie::{CreateMovie, Movie, UpdateMovie};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, director, release_year, genre";

/// Provides CRUD and title search for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row with its assigned id.
    pub async fn create(pool: &DbPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movie (title, director, release_year, genre)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.director)
            .bind(input.release_year)
            .bind(&input.genre)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie WHERE id = ?1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every movie in insertion order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie ORDER BY id");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// Number of stored movies.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM movie")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Movies whose title contains `fragment`, in insertion order.
    ///
    /// SQLite's `LIKE` folds ASCII case only, so `"incep"` matches
    /// `"Inception"` but non-ASCII letters must match exactly.
    pub async fn search_by_title(
        pool: &DbPool,
        fragment: &str,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movie
             WHERE title LIKE ?1 ESCAPE '\\'
             ORDER BY id"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(contains_pattern(fragment))
            .fetch_all(pool)
            .await
    }

    /// Update a movie. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movie SET
                title = COALESCE(?2, title),
                director = COALESCE(?3, director),
                release_year = COALESCE(?4, release_year),
                genre = COALESCE(?5, genre)
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.director)
            .bind(input.release_year)
            .bind(&input.genre)
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie by ID, returning the row as it was before removal.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("DELETE FROM movie WHERE id = ?1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
