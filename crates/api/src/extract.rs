//! Request extractors with app-specific rejection mapping.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use crate::error::AppError;

/// JSON body extractor that routes deserialization failures through
/// [`AppError`].
///
/// Axum's bare `Json` rejects bad bodies on its own (422 for a missing
/// field, 415 for a missing content-type), bypassing the centralized
/// error mapping. Wrapping it keeps the contract: any invalid body is a
/// 400 with the standard error envelope.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}
