use axum::{Extension, body::Bytes, extract::State, http::StatusCode, response::Response};
use services::user_service::{ChangePassword, UserService};
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::{ApiError, respond};
use crate::routes::common::parse_body;

/// PUT /api/auth/password
///
/// ### Request Body
/// ```json
/// { "current_password": "old", "new_password": "new", "confirm_password": "new" }
/// ```
///
/// ### Responses
/// - `200 OK`
/// - `400 Bad Request` (`Missing required fields`, `Passwords do not match`)
/// - `401 Unauthorized` (`Current password is incorrect`, or no valid token)
pub async fn change_password(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let input: ChangePassword = parse_body(&body)?;
    UserService::change_password(app_state.db(), claims.sub, input).await?;
    Ok(respond(StatusCode::OK, (), "Password changed successfully"))
}
