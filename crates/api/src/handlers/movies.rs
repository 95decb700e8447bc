//! Handlers for the `/movies` resource.
//!
//! Each handler follows the same sequence: validate input, call the
//! repository, wrap the result in the standard envelope. Any failure
//! propagates to [`AppError`]'s centralized response mapping.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use movies_core::error::CoreError;
use movies_core::types::DbId;
use movies_core::validation::{self, ValidationError, Violations};
use movies_db::models::movie::{Movie, MovieInput, MovieListParams};
use movies_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::{Cached, DataResponse, FIVE_MINUTES_IN_SECONDS, SIXTY_MINUTES_IN_SECONDS};
use crate::state::AppState;

/// GET /api/movies
///
/// List all movies, optionally filtered by `?tags=a,b` (any-match).
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<MovieListParams>,
) -> AppResult<Cached<Json<DataResponse<Vec<Movie>>>>> {
    let movies = MovieRepo::list(&state.pool, &params.tag_filter()).await?;

    Ok(Cached::new(
        FIVE_MINUTES_IN_SECONDS,
        Json(DataResponse {
            data: movies,
            message: "Movies listed",
        }),
    ))
}

/// GET /api/movies/{movie_id}
pub async fn get_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<Cached<Json<DataResponse<Movie>>>> {
    validate_movie_id(movie_id)?;

    let movie = MovieRepo::find_by_id(&state.pool, movie_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        }))?;

    Ok(Cached::new(
        SIXTY_MINUTES_IN_SECONDS,
        Json(DataResponse {
            data: movie,
            message: "Movie retrieved",
        }),
    ))
}

/// POST /api/movies
pub async fn create_movie(
    State(state): State<AppState>,
    AppJson(input): AppJson<MovieInput>,
) -> AppResult<(StatusCode, Json<DataResponse<DbId>>)> {
    input.validate()?;

    let created_movie_id = MovieRepo::create(&state.pool, &input).await?;

    tracing::info!(movie_id = created_movie_id, "Movie created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: created_movie_id,
            message: "Movie created",
        }),
    ))
}

/// PUT /api/movies/{movie_id}
///
/// Full replace: the row is overwritten with exactly the supplied
/// representation.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
    AppJson(input): AppJson<MovieInput>,
) -> AppResult<Json<DataResponse<DbId>>> {
    validate_movie_id(movie_id)?;
    input.validate()?;

    let updated_movie_id = MovieRepo::update(&state.pool, movie_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        }))?;

    tracing::info!(movie_id = updated_movie_id, "Movie updated");

    Ok(Json(DataResponse {
        data: updated_movie_id,
        message: "Movie updated",
    }))
}

/// DELETE /api/movies/{movie_id}
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<Json<DataResponse<DbId>>> {
    validate_movie_id(movie_id)?;

    let deleted = MovieRepo::delete(&state.pool, movie_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        }));
    }

    tracing::info!(movie_id, "Movie deleted");

    Ok(Json(DataResponse {
        data: movie_id,
        message: "Movie deleted",
    }))
}

/// Path ids must be positive. Non-numeric ids never get this far: the
/// `Path<DbId>` extractor rejects them with 400 before the handler runs.
fn validate_movie_id(movie_id: DbId) -> Result<(), ValidationError> {
    let mut v = Violations::new();
    validation::positive_id(&mut v, "movieId", movie_id);
    v.into_result()
}
