//! # auth Routes Module
//!
//! - `POST /auth/login` (public) → bearer token
//! - `PUT /auth/password` (authenticated) → change own password
//! - `GET /auth/me` (authenticated) → own profile

pub mod get;
pub mod post;
pub mod put;

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post, put},
};
use util::state::AppState;

use crate::auth::guards::allow_authenticated;
use crate::routes::common::{method_not_allowed, options_ok};
use get::get_me;
use post::login;
use put::change_password;

pub fn auth_routes() -> Router<AppState> {
    let protected = Router::new()
        .route(
            "/password",
            put(change_password)
                .options(options_ok)
                .fallback(method_not_allowed),
        )
        .route(
            "/me",
            get(get_me).options(options_ok).fallback(method_not_allowed),
        )
        .route_layer(from_fn(allow_authenticated));

    Router::new()
        .route(
            "/login",
            post(login).options(options_ok).fallback(method_not_allowed),
        )
        .merge(protected)
}
