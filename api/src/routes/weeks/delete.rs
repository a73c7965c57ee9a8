use axum::{
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::Response,
};
use services::week_service::WeekService;
use util::state::AppState;

use super::common::{DeleteBody, WeekQuery, WeekResource};
use crate::response::{ApiError, respond};
use crate::routes::common::{parse_body, parse_query, query_or_body};

/// DELETE /api/weeks
///
/// - `?week_id={id}` (or body `week_id`) → the week and all of its comments, atomically
/// - `?resource=comments&id={id}` (or body `id`) → a single comment
///
/// ### Responses
/// - `200 OK`
/// ```json
/// { "success": true, "data": null, "message": "Week and associated comments deleted successfully" }
/// ```
/// - `400 Bad Request` (`week_id is required`, `commentId is required`, `Invalid comment ID`)
/// - `404 Not Found`
pub async fn delete_weeks(
    State(app_state): State<AppState>,
    query: Result<Query<WeekQuery>, QueryRejection>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let query = parse_query(query)?;
    let resource = query.resource()?;
    let body: DeleteBody = parse_body(&body)?;
    let db = app_state.db();

    match resource {
        WeekResource::Weeks => {
            let week_id = query_or_body(query.week_id, body.week_id);
            WeekService::delete(db, week_id.as_deref()).await?;
            Ok(respond(
                StatusCode::OK,
                (),
                "Week and associated comments deleted successfully",
            ))
        }
        WeekResource::Comments => {
            let comment_id = query_or_body(query.id, body.id);
            WeekService::delete_comment(db, comment_id.as_deref()).await?;
            Ok(respond(StatusCode::OK, (), "Comment deleted successfully"))
        }
    }
}
