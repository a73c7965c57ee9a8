//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → health check (public)
//! - `/auth` → login (public), own profile and password change (authenticated)
//! - `/resources` → course resources and their comments (public)
//! - `/weeks` → weekly content and its comments (public)
//! - `/students` → student administration (admin only)

use axum::{
    Router,
    http::{HeaderName, Method, header},
    middleware::from_fn,
};
use tower_http::cors::{Any, CorsLayer};
use util::state::AppState;

use crate::auth::{guards::allow_admin, middleware::log_request};
use crate::routes::{
    auth::auth_routes, common::route_not_found, health::health_routes,
    resources::resources_routes, students::students_routes, weeks::weeks_routes,
};

pub mod auth;
pub mod common;
pub mod health;
pub mod resources;
pub mod students;
pub mod weeks;

/// Builds the `/api` router. The returned router has its state applied.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes())
        .nest("/resources", resources_routes())
        .nest("/weeks", weeks_routes())
        .nest("/students", students_routes().route_layer(from_fn(allow_admin)))
        .fallback(route_not_found)
        .with_state(app_state)
}

/// Permissive CORS: any origin, the five verbs the API uses, and the two request
/// headers clients send.
pub fn cors_layer() -> CorsLayer {
    let allowed_headers: [HeaderName; 2] = [header::CONTENT_TYPE, header::AUTHORIZATION];
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(allowed_headers)
}

/// The complete application: `/api` routes, request logging and CORS.
pub fn app(app_state: AppState) -> Router {
    Router::new()
        .nest("/api", routes(app_state))
        .fallback(route_not_found)
        .layer(from_fn(log_request))
        .layer(cors_layer())
}
