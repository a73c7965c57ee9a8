use axum::{
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::Response,
};
use services::week_service::{WeekInput, WeekService};
use util::state::AppState;

use super::common::{WeekQuery, WeekResource};
use crate::response::{ApiError, respond};
use crate::routes::common::{parse_body, parse_query};

/// PUT /api/weeks
///
/// Sparse update keyed by `week_id` in the body. `title`, `start_date`,
/// `description` and `links` are optional; at least one must be present.
///
/// ### Responses
/// - `200 OK` with the refreshed week
/// - `400 Bad Request` (`week_id is required`, `No fields to update`,
///   `links must be an array`, `Invalid start_date format`)
/// - `404 Not Found` (`Week not found`)
/// - `405 Method Not Allowed` for `?resource=comments`
pub async fn put_week(
    State(app_state): State<AppState>,
    query: Result<Query<WeekQuery>, QueryRejection>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let query = parse_query(query)?;
    if query.resource()? == WeekResource::Comments {
        return Err(ApiError::MethodNotAllowed);
    }

    let input: WeekInput = parse_body(&body)?;
    let week = WeekService::update(app_state.db(), input).await?;
    Ok(respond(StatusCode::OK, week, "Week updated successfully"))
}
