//! Shared response envelope types for API handlers.
//!
//! All successful responses use a `{ "data": ..., "message": ... }`
//! envelope. Use [`DataResponse`] instead of ad-hoc
//! `serde_json::json!(...)` to get compile-time type safety and
//! consistent serialization. Read endpoints additionally wrap their
//! payload in [`Cached`] to attach client-side caching directives.

use axum::http::header::{HeaderValue, CACHE_CONTROL};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Cache lifetime for list responses, which change more often.
pub const FIVE_MINUTES_IN_SECONDS: u32 = 300;

/// Cache lifetime for single-item responses.
pub const SIXTY_MINUTES_IN_SECONDS: u32 = 3600;

/// Standard `{ "data": T, "message": ... }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
    pub message: &'static str,
}

/// Attaches `Cache-Control: public, max-age=N` to a successful response.
///
/// The header is only applied to 2xx responses; error responses pass
/// through untouched so intermediaries never cache failures.
pub struct Cached<T> {
    max_age_secs: u32,
    inner: T,
}

impl<T> Cached<T> {
    pub fn new(max_age_secs: u32, inner: T) -> Self {
        Self {
            max_age_secs,
            inner,
        }
    }
}

impl<T: IntoResponse> IntoResponse for Cached<T> {
    fn into_response(self) -> Response {
        let mut response = self.inner.into_response();
        if response.status().is_success() {
            // "public, max-age=<u32>" is always a valid header value.
            let directive = format!("public, max-age={}", self.max_age_secs);
            let value =
                HeaderValue::from_str(&directive).expect("cache-control directive is ASCII");
            response.headers_mut().insert(CACHE_CONTROL, value);
        }
        response
    }
}
