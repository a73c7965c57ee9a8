use axum::{
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::Response,
};
use services::resource_service::ResourceService;
use util::state::AppState;

use super::common::{DeleteBody, ResourceQuery, unknown_action};
use crate::response::{ApiError, respond};
use crate::routes::common::{parse_body, parse_query, query_or_body};

/// DELETE /api/resources
///
/// - `?id={id}` (or body `{"id": 1}`) → deletes the resource and all of its
///   comments in one transaction
/// - `?action=delete_comment&comment_id={id}` (or body `comment_id`) → deletes one
///   comment
///
/// ### Responses
/// - `200 OK`
/// ```json
/// { "success": true, "data": null, "message": "Resource deleted successfully" }
/// ```
/// - `400 Bad Request` (missing or non-numeric id)
/// - `404 Not Found` (`Resource not found`, `Comment not found`)
/// - `500 Internal Server Error` (transaction rolled back)
pub async fn delete_resources(
    State(app_state): State<AppState>,
    query: Result<Query<ResourceQuery>, QueryRejection>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let query = parse_query(query)?;
    let body: DeleteBody = parse_body(&body)?;
    let db = app_state.db();

    match query.action() {
        Some("delete_comment") => {
            let comment_id = query_or_body(query.comment_id, body.comment_id);
            ResourceService::delete_comment(db, comment_id.as_deref()).await?;
            Ok(respond(StatusCode::OK, (), "Comment deleted successfully"))
        }
        Some(other) => Err(unknown_action(other)),
        None => {
            let id = query_or_body(query.id, body.id);
            ResourceService::delete(db, id.as_deref()).await?;
            Ok(respond(StatusCode::OK, (), "Resource deleted successfully"))
        }
    }
}
