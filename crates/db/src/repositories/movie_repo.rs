//! Repository for the `movies` table.

use movies_core::types::DbId;
use sqlx::types::Json;

use crate::models::movie::{Movie, MovieInput};
use crate::DbPool;

/// Column list for `movies` queries.
const MOVIE_COLUMNS: &str = "\
    id, title, year, cover, description, duration, \
    content_rating, source, tags, created_at, updated_at";

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// List movies, optionally filtered by tags.
    ///
    /// The filter is any-match: a movie qualifies when at least one of
    /// its tags appears in `tag_filter`. An empty filter returns the
    /// full collection.
    pub async fn list(pool: &DbPool, tag_filter: &[String]) -> Result<Vec<Movie>, sqlx::Error> {
        if tag_filter.is_empty() {
            let query = format!("SELECT {MOVIE_COLUMNS} FROM movies ORDER BY id");
            return sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await;
        }

        // The tags column is a JSON array; json_each unnests it so the
        // filter is a plain IN over the requested set.
        let placeholders = vec!["?"; tag_filter.len()].join(", ");
        let query = format!(
            "SELECT {MOVIE_COLUMNS} FROM movies \
             WHERE EXISTS (\
                 SELECT 1 FROM json_each(movies.tags) \
                 WHERE json_each.value IN ({placeholders})) \
             ORDER BY id"
        );

        let mut q = sqlx::query_as::<_, Movie>(&query);
        for tag in tag_filter {
            q = q.bind(tag);
        }
        q.fetch_all(pool).await
    }

    /// Find a movie by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {MOVIE_COLUMNS} FROM movies WHERE id = ?");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a movie and return the generated ID.
    ///
    /// A duplicate title violates `uq_movies_title` and surfaces as a
    /// unique-constraint database error.
    pub async fn create(pool: &DbPool, input: &MovieInput) -> Result<DbId, sqlx::Error> {
        let now = chrono::Utc::now();

        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO movies \
                 (title, year, cover, description, duration, \
                  content_rating, source, tags, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING id",
        )
        .bind(&input.title)
        .bind(input.year)
        .bind(&input.cover)
        .bind(&input.description)
        .bind(input.duration)
        .bind(&input.content_rating)
        .bind(&input.source)
        .bind(Json(input.normalized_tags()))
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await
    }

    /// Fully replace a movie's fields. Omitted optional fields become
    /// NULL; `id` and `created_at` are never touched.
    ///
    /// Returns `None` if no movie with the given ID exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &MovieInput,
    ) -> Result<Option<DbId>, sqlx::Error> {
        let now = chrono::Utc::now();

        sqlx::query_scalar::<_, DbId>(
            "UPDATE movies SET \
                 title = ?, year = ?, cover = ?, description = ?, \
                 duration = ?, content_rating = ?, source = ?, \
                 tags = ?, updated_at = ? \
             WHERE id = ? \
             RETURNING id",
        )
        .bind(&input.title)
        .bind(input.year)
        .bind(&input.cover)
        .bind(&input.description)
        .bind(input.duration)
        .bind(&input.content_rating)
        .bind(&input.source)
        .bind(Json(input.normalized_tags()))
        .bind(now)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Delete a movie by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
