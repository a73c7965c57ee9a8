use axum::{Extension, extract::State, http::StatusCode, response::Response};
use services::user_service::UserService;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::{ApiError, respond};

/// GET /api/auth/me
///
/// Returns the caller's own account. The password hash is never serialized.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 1,
///     "name": "Admin User",
///     "student_id": null,
///     "email": "admin@example.com",
///     "role": "admin",
///     "created_at": "2025-05-23T18:00:00Z",
///     "updated_at": "2025-05-23T18:00:00Z"
///   },
///   "message": "User data retrieved successfully"
/// }
/// ```
/// - `401 Unauthorized`
/// - `404 Not Found` (the account was deleted after the token was issued)
pub async fn get_me(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Result<Response, ApiError> {
    let user = UserService::find_user(app_state.db(), claims.sub).await?;
    Ok(respond(StatusCode::OK, user, "User data retrieved successfully"))
}
