pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /movies              list (GET), create (POST)
/// /movies/{movie_id}   get, update (PUT), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/movies", movies::router())
}
