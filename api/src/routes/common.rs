//! Helpers shared by the route modules: body parsing and the catch-all responders.

use axum::{
    body::Bytes,
    extract::{Query, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::de::DeserializeOwned;

use crate::response::ApiError;

/// Parses a JSON request body.
///
/// An empty (or whitespace-only) body is the payload's default, so that e.g. a
/// `DELETE` carrying only query parameters needs no body at all. Anything that is not
/// a JSON object of the expected shape is a `400`.
pub fn parse_body<T>(body: &Bytes) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected request body");
        ApiError::BadRequest("Invalid JSON body".into())
    })
}

/// Unwraps a query-string extraction, turning a rejection into a `400` envelope.
pub fn parse_query<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    query
        .map(|Query(q)| q)
        .map_err(|e| ApiError::BadRequest(format!("Invalid query string: {}", e.body_text())))
}

/// Trimmed, non-blank discriminator value (`action` / `resource`).
pub fn discriminator(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Picks the query value when present and non-blank, else the body value.
pub fn query_or_body(query: Option<String>, body: Option<String>) -> Option<String> {
    query.filter(|v| !v.trim().is_empty()).or(body)
}

/// Method fallback for every route: `405` in the standard envelope.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Plain `OPTIONS` requests (not CORS preflights) get an empty `200`.
pub async fn options_ok() -> impl IntoResponse {
    StatusCode::OK
}

/// Router fallback for unknown paths.
pub async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found".into())
}
