use axum::{
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::Response,
};
use services::resource_service::{ResourceInput, ResourceService};
use util::state::AppState;

use super::common::{ResourceQuery, unknown_action};
use crate::response::{ApiError, respond};
use crate::routes::common::{parse_body, parse_query};

/// PUT /api/resources
///
/// Sparse update: only `title`, `description` and `link` keys present in the body
/// are written; `updated_at` is bumped.
///
/// ### Request Body
/// ```json
/// { "id": 1, "title": "The Rust Book" }
/// ```
///
/// ### Responses
/// - `200 OK` with the refreshed record
/// - `400 Bad Request` (`Valid Resource ID required`, `No fields to update`,
///   `Invalid URL format`)
/// - `404 Not Found` (`Resource not found`)
pub async fn put_resource(
    State(app_state): State<AppState>,
    query: Result<Query<ResourceQuery>, QueryRejection>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let query = parse_query(query)?;
    if let Some(action) = query.action() {
        return Err(unknown_action(action));
    }

    let input: ResourceInput = parse_body(&body)?;
    let updated = ResourceService::update(app_state.db(), input).await?;
    Ok(respond(StatusCode::OK, updated, "Resource updated successfully"))
}
