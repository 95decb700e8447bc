//! Route definitions for the movies resource.
//!
//! ```text
//! GET    /            -> list_movies
//! POST   /            -> create_movie
//! GET    /{movie_id}  -> get_movie
//! PUT    /{movie_id}  -> update_movie
//! DELETE /{movie_id}  -> delete_movie
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Movie routes, mounted at `/movies`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list_movies).post(movies::create_movie))
        .route(
            "/{movie_id}",
            get(movies::get_movie)
                .put(movies::update_movie)
                .delete(movies::delete_movie),
        )
}
