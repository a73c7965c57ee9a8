use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::Response,
};
use services::week_service::WeekService;
use util::state::AppState;

use super::common::{WeekQuery, WeekResource};
use crate::response::{ApiError, respond};
use crate::routes::common::parse_query;

/// GET /api/weeks
///
/// - `?resource=comments&week_id={id}` → comments of the week, oldest first
/// - `?week_id={id}` → a single week (a blank `week_id` is a 400)
/// - otherwise → all weeks
///
/// ### Query Parameters (list)
/// - `search` (optional): matches title or description, case-insensitive
/// - `sort` (optional): `title` | `start_date` | `created_at` (default `start_date`)
/// - `order` (optional): `asc` | `desc` (default `asc`)
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "week_id": "week-1",
///       "title": "Ownership",
///       "start_date": "2025-02-03",
///       "description": "Moves and borrows",
///       "links": ["https://doc.rust-lang.org/book/ch04-00-understanding-ownership.html"],
///       "created_at": "2025-01-30T09:00:00Z",
///       "updated_at": "2025-01-30T09:00:00Z"
///     }
///   ],
///   "message": "Weeks retrieved successfully"
/// }
/// ```
/// - `400 Bad Request` (unknown `resource`, `week_id is required` for comments)
/// - `404 Not Found` (`Week not found`)
pub async fn get_weeks(
    State(app_state): State<AppState>,
    query: Result<Query<WeekQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let query = parse_query(query)?;
    let db = app_state.db();

    match query.resource()? {
        WeekResource::Comments => {
            let comments = WeekService::list_comments(db, query.week_id.as_deref()).await?;
            Ok(respond(StatusCode::OK, comments, "Comments retrieved successfully"))
        }
        WeekResource::Weeks if query.week_id.is_some() => {
            let week = WeekService::get(db, query.week_id.as_deref()).await?;
            Ok(respond(StatusCode::OK, week, "Week retrieved successfully"))
        }
        WeekResource::Weeks => {
            let weeks = WeekService::list(db, &query.list_params()).await?;
            Ok(respond(StatusCode::OK, weeks, "Weeks retrieved successfully"))
        }
    }
}
