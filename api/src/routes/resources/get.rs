use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::Response,
};
use common::validation::trimmed;
use services::resource_service::ResourceService;
use util::state::AppState;

use super::common::{ResourceQuery, unknown_action};
use crate::response::{ApiError, respond};
use crate::routes::common::parse_query;

/// GET /api/resources
///
/// Dispatches on the query string:
/// - `?action=comments&resource_id={id}` → comments of a resource, oldest first
/// - `?id={id}` → a single resource
/// - otherwise → every resource, filtered by `search` and ordered by `sort`/`order`
///
/// ### Query Parameters (list)
/// - `search` (optional): case-insensitive substring of title or description
/// - `sort` (optional): `title` | `created_at` (default `created_at`)
/// - `order` (optional): `asc` | `desc` (default `desc`)
///
/// Unknown `sort` / `order` values fall back to the defaults.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "id": 1,
///       "title": "Rust Book",
///       "description": "",
///       "link": "https://doc.rust-lang.org/book",
///       "created_at": "2025-05-23T18:00:00Z",
///       "updated_at": "2025-05-23T18:00:00Z"
///     }
///   ],
///   "message": "Resources retrieved successfully"
/// }
/// ```
/// - `400 Bad Request` (`Invalid resource ID`, `resource_id parameter is required`)
/// - `404 Not Found` (`Resource not found`)
pub async fn get_resources(
    State(app_state): State<AppState>,
    query: Result<Query<ResourceQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let query = parse_query(query)?;
    let db = app_state.db();

    match query.action() {
        Some("comments") => {
            let comments =
                ResourceService::list_comments(db, query.resource_id.as_deref()).await?;
            Ok(respond(StatusCode::OK, comments, "Comments retrieved successfully"))
        }
        Some(other) => Err(unknown_action(other)),
        None if trimmed(query.id.as_deref()).is_some() => {
            let resource = ResourceService::get(db, query.id.as_deref()).await?;
            Ok(respond(StatusCode::OK, resource, "Resource retrieved successfully"))
        }
        None => {
            let resources = ResourceService::list(db, &query.list_params()).await?;
            Ok(respond(StatusCode::OK, resources, "Resources retrieved successfully"))
        }
    }
}
