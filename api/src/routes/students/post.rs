use axum::{body::Bytes, extract::State, http::StatusCode, response::Response};
use services::user_service::{CreateStudent, UserService};
use util::state::AppState;

use crate::response::{ApiError, respond};
use crate::routes::common::parse_body;

/// POST /api/students
///
/// ### Request Body
/// ```json
/// {
///   "name": "Sam Student",
///   "student_id": "u21000001",
///   "email": "sam@example.com",
///   "password": "secret123"
/// }
/// ```
///
/// ### Responses
/// - `201 Created` with the new student (no password hash)
/// - `400 Bad Request` (missing fields, invalid email)
/// - `409 Conflict` (`Email already exists`)
pub async fn create_student(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let input: CreateStudent = parse_body(&body)?;
    let student = UserService::create_student(app_state.db(), input).await?;
    Ok(respond(StatusCode::CREATED, student, "Student created successfully"))
}
