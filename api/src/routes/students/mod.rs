//! # students Routes Module
//!
//! Student administration under `/api/students`. The whole router sits behind the
//! `allow_admin` guard (see [`crate::routes::routes`]).
//!
//! - `GET /students` list, `POST /students` create
//! - `GET | PUT | DELETE /students/{id}`
//! - `PUT /students/{id}/password` admin password reset

pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use axum::{
    Router,
    routing::{get, put},
};
use util::state::AppState;

use crate::routes::common::{method_not_allowed, options_ok};
use delete::delete_student;
use get::{get_student, get_students};
use post::create_student;
use put::{reset_password, update_student};

pub fn students_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_students)
                .post(create_student)
                .options(options_ok)
                .fallback(method_not_allowed),
        )
        .route(
            "/{id}",
            get(get_student)
                .put(update_student)
                .delete(delete_student)
                .options(options_ok)
                .fallback(method_not_allowed),
        )
        .route(
            "/{id}/password",
            put(reset_password)
                .options(options_ok)
                .fallback(method_not_allowed),
        )
}
