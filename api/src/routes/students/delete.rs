use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use services::user_service::UserService;
use util::state::AppState;

use crate::response::{ApiError, respond};

/// DELETE /api/students/{id}
///
/// Admin accounts are not reachable through this route and report `404`.
pub async fn delete_student(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    UserService::delete_student(app_state.db(), &id).await?;
    Ok(respond(StatusCode::OK, (), "Student deleted successfully"))
}
