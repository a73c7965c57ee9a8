use axum::{Json, Router, response::IntoResponse, routing::get};
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::common::{method_not_allowed, options_ok};

/// Builds the `/health` route group.
pub fn health_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(health_check)
            .options(options_ok)
            .fallback(method_not_allowed),
    )
}

/// GET /api/health
///
/// Returns a simple success response to indicate the API is running.
///
/// ### Response
/// - `200 OK`
///
/// ```json
/// {
///   "success": true,
///   "data": "OK",
///   "message": "Health check passed"
/// }
/// ```
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::success("OK", "Health check passed"))
}
