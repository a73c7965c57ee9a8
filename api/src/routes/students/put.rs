use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use services::user_service::{ResetPassword, UpdateStudent, UserService};
use util::state::AppState;

use crate::response::{ApiError, respond};
use crate::routes::common::parse_body;

/// PUT /api/students/{id}
///
/// Sparse update of `name`, `student_id` and `email`. Sending a blank
/// `student_id` clears it.
///
/// ### Responses
/// - `200 OK` with the updated student
/// - `400 Bad Request` (`No fields to update`, invalid email)
/// - `404 Not Found`
/// - `409 Conflict` (`Email already exists`)
pub async fn update_student(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let input: UpdateStudent = parse_body(&body)?;
    let student = UserService::update_student(app_state.db(), &id, input).await?;
    Ok(respond(StatusCode::OK, student, "Student updated successfully"))
}

/// PUT /api/students/{id}/password
///
/// ### Request Body
/// ```json
/// { "new_password": "another-secret" }
/// ```
///
/// ### Responses
/// - `200 OK`
/// - `400 Bad Request` (`new_password is required`)
/// - `404 Not Found`
pub async fn reset_password(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let input: ResetPassword = parse_body(&body)?;
    UserService::reset_password(app_state.db(), &id, input).await?;
    Ok(respond(StatusCode::OK, (), "Password reset successfully"))
}
