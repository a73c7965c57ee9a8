use axum::{
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::Response,
};
use services::week_service::{WeekCommentInput, WeekInput, WeekService};
use util::state::AppState;

use super::common::{WeekQuery, WeekResource};
use crate::response::{ApiError, respond};
use crate::routes::common::{parse_body, parse_query};

/// POST /api/weeks
///
/// ### Request Body (week)
/// ```json
/// {
///   "week_id": "week-1",
///   "title": "Ownership",
///   "start_date": "2025-02-03",
///   "description": "Moves and borrows",
///   "links": ["https://example.com/slides"]
/// }
/// ```
/// `links` is optional; anything other than an array is stored as `[]`.
///
/// ### Request Body (`?resource=comments`)
/// ```json
/// { "week_id": "week-1", "author": "Sam", "text": "Great week" }
/// ```
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request` (`Missing required fields`, `Invalid start_date format`)
/// - `404 Not Found` (comment on an unknown week)
/// - `409 Conflict` (`week_id already exists`)
pub async fn post_weeks(
    State(app_state): State<AppState>,
    query: Result<Query<WeekQuery>, QueryRejection>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let query = parse_query(query)?;
    let db = app_state.db();

    match query.resource()? {
        WeekResource::Weeks => {
            let input: WeekInput = parse_body(&body)?;
            let week = WeekService::create(db, input).await?;
            Ok(respond(StatusCode::CREATED, week, "Week created successfully"))
        }
        WeekResource::Comments => {
            let input: WeekCommentInput = parse_body(&body)?;
            let comment = WeekService::create_comment(db, input).await?;
            Ok(respond(StatusCode::CREATED, comment, "Comment created successfully"))
        }
    }
}
