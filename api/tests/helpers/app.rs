#![allow(dead_code)]

use api::{auth::generate_jwt, routes::app};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use db::{models::user::Model as UserModel, test_utils::setup_test_db};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use services::user_service::{CreateStudent, UserService};
use tower::ServiceExt;
use util::state::AppState;

/// The full application over a fresh in-memory database.
pub async fn make_test_app() -> (Router, DatabaseConnection) {
    let db = setup_test_db().await;
    (app(AppState::new(db.clone())), db)
}

/// Builds a request with an optional JSON body and bearer token.
pub fn request(method: &str, uri: &str, body: Option<Value>, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn get_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Sends `req` through a clone of `app` and decodes the envelope.
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    (status, get_json_body(response).await)
}

pub fn token_for(user: &UserModel) -> String {
    generate_jwt(user.id, user.is_admin()).unwrap().0
}

/// Seeds one admin and one student account.
pub async fn seed_users(db: &DatabaseConnection) -> (UserModel, UserModel) {
    let admin = UserService::ensure_admin(db, "Admin User", "admin@test.com", "adminpass")
        .await
        .unwrap()
        .unwrap();
    let student = UserService::create_student(
        db,
        CreateStudent {
            name: Some("Sam Student".into()),
            student_id: Some("u21000001".into()),
            email: Some("sam@test.com".into()),
            password: Some("studentpass".into()),
        },
    )
    .await
    .unwrap();
    (admin, student)
}
