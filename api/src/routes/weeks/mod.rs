//! # weeks Routes Module
//!
//! Weekly course content on `/api/weeks`. The `resource` query parameter switches
//! between the weeks themselves (`weeks`, the default) and their `comments`.
//!
//! - `GET` → list, `?week_id=` one, `?resource=comments&week_id=` comments
//! - `POST` → create week, `?resource=comments` create comment
//! - `PUT` → sparse update keyed by body `week_id` (comments cannot be edited: `405`)
//! - `DELETE` → `?week_id=` week with its comments, `?resource=comments&id=` one comment

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use axum::{Router, routing::get};
use util::state::AppState;

use crate::routes::common::{method_not_allowed, options_ok};
use delete::delete_weeks;
use get::get_weeks;
use post::post_weeks;
use put::put_week;

pub fn weeks_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(get_weeks)
            .post(post_weeks)
            .put(put_week)
            .delete(delete_weeks)
            .options(options_ok)
            .fallback(method_not_allowed),
    )
}
