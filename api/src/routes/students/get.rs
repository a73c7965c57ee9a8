use axum::{
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::Response,
};
use services::{ListParams, user_service::UserService};
use util::state::AppState;

use crate::response::{ApiError, respond};
use crate::routes::common::parse_query;

/// GET /api/students
///
/// Lists every account with the `student` role.
///
/// ### Query Parameters
/// - `search` (optional): substring of name, email or student number
/// - `sort` (optional): `name` | `email` | `created_at` (default `created_at`)
/// - `order` (optional): `asc` | `desc` (default `desc`)
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "id": 2,
///       "name": "Sam Student",
///       "student_id": "u21000001",
///       "email": "sam@example.com",
///       "role": "student",
///       "created_at": "2025-02-01T08:00:00Z",
///       "updated_at": "2025-02-01T08:00:00Z"
///     }
///   ],
///   "message": "Students retrieved successfully"
/// }
/// ```
/// - `401 Unauthorized` / `403 Forbidden` from the admin guard
pub async fn get_students(
    State(app_state): State<AppState>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let params = parse_query(query)?;
    let students = UserService::list_students(app_state.db(), &params).await?;
    Ok(respond(StatusCode::OK, students, "Students retrieved successfully"))
}

/// GET /api/students/{id}
///
/// ### Responses
/// - `200 OK` with the student
/// - `400 Bad Request` (`Invalid student ID`)
/// - `404 Not Found` (`Student not found`)
pub async fn get_student(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let student = UserService::get_student(app_state.db(), &id).await?;
    Ok(respond(StatusCode::OK, student, "Student retrieved successfully"))
}
