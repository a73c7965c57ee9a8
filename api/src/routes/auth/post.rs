use axum::{body::Bytes, extract::State, http::StatusCode, response::Response};
use db::models::user::Role;
use serde::Serialize;
use services::user_service::{LoginRequest, UserService};
use util::state::AppState;

use crate::auth::generate_jwt;
use crate::response::{ApiError, respond};
use crate::routes::common::parse_body;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub token: String,
    pub expires_at: String,
}

/// POST /api/auth/login
///
/// ### Request Body
/// ```json
/// { "email": "admin@example.com", "password": "admin123" }
/// ```
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 1,
///     "name": "Admin User",
///     "email": "admin@example.com",
///     "role": "admin",
///     "token": "eyJhbGciOi...",
///     "expires_at": "2025-05-23T19:00:00Z"
///   },
///   "message": "Login successful"
/// }
/// ```
/// - `400 Bad Request` (`Missing email or password`, `Invalid email`)
/// - `401 Unauthorized` (`Invalid credentials`)
pub async fn login(State(app_state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let input: LoginRequest = parse_body(&body)?;
    let user = UserService::login(app_state.db(), input).await?;

    let (token, expires_at) = generate_jwt(user.id, user.is_admin())?;
    tracing::info!(user_id = user.id, "User logged in");

    let response = LoginResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        role: user.role,
        token,
        expires_at,
    };
    Ok(respond(StatusCode::OK, response, "Login successful"))
}
