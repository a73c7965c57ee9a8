use axum::{
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::Response,
};
use services::resource_service::{ResourceCommentInput, ResourceInput, ResourceService};
use util::state::AppState;

use super::common::{ResourceQuery, unknown_action};
use crate::response::{ApiError, respond};
use crate::routes::common::{parse_body, parse_query};

/// POST /api/resources
///
/// Creates a resource, or with `?action=comment` a comment on one.
///
/// ### Request Body (resource)
/// ```json
/// { "title": "Rust Book", "description": "Free online", "link": "https://doc.rust-lang.org/book" }
/// ```
///
/// ### Request Body (`?action=comment`)
/// ```json
/// { "resource_id": 1, "author": "Sam", "text": "Very helpful" }
/// ```
///
/// ### Responses
/// - `201 Created` with the stored record in `data`
/// - `400 Bad Request` (`Title and link are required`, `Invalid URL format`,
///   `resource_id, author and text are required`, malformed JSON)
/// - `404 Not Found` (comment on a resource that does not exist)
pub async fn post_resources(
    State(app_state): State<AppState>,
    query: Result<Query<ResourceQuery>, QueryRejection>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let query = parse_query(query)?;
    let db = app_state.db();

    match query.action() {
        None => {
            let input: ResourceInput = parse_body(&body)?;
            let created = ResourceService::create(db, input).await?;
            Ok(respond(StatusCode::CREATED, created, "Resource created successfully"))
        }
        Some("comment") => {
            let input: ResourceCommentInput = parse_body(&body)?;
            let comment = ResourceService::create_comment(db, input).await?;
            Ok(respond(StatusCode::CREATED, comment, "Comment created successfully"))
        }
        Some(other) => Err(unknown_action(other)),
    }
}
