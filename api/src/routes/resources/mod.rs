//! # resources Routes Module
//!
//! All resource operations live on a single path, `/api/resources`; the `action`
//! query parameter selects the comment sub-resource:
//!
//! - `GET` → list, `?id=` one, `?action=comments&resource_id=` comments
//! - `POST` → create, `?action=comment` create comment
//! - `PUT` → sparse update (body `id`)
//! - `DELETE` → `?id=` (or body `id`), `?action=delete_comment&comment_id=`
//! - `OPTIONS` → empty `200`; any other method → `405`

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use axum::{Router, routing::get};
use util::state::AppState;

use crate::routes::common::{method_not_allowed, options_ok};
use delete::delete_resources;
use get::get_resources;
use post::post_resources;
use put::put_resource;

pub fn resources_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(get_resources)
            .post(post_resources)
            .put(put_resource)
            .delete(delete_resources)
            .options(options_ok)
            .fallback(method_not_allowed),
    )
}
