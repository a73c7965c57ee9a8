#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, request, seed_users, send, token_for};
    use axum::http::StatusCode;
    use serde_json::json;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn login_returns_a_usable_token() {
        let (app, db) = make_test_app().await;
        seed_users(&db).await;

        let body = json!({ "email": "admin@test.com", "password": "adminpass" });
        let (status, json) = send(&app, request("POST", "/api/auth/login", Some(body), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["role"], "admin");
        assert_eq!(json["data"]["name"], "Admin User");
        assert!(json["data"]["expires_at"].is_string());

        let token = json["data"]["token"].as_str().unwrap();
        let (status, _) = send(&app, request("GET", "/api/students", None, Some(token))).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    #[serial]
    async fn login_failures() {
        let (app, db) = make_test_app().await;
        seed_users(&db).await;

        let cases = [
            (json!({ "email": "admin@test.com" }), StatusCode::BAD_REQUEST, "Missing email or password"),
            (json!({ "email": "admin", "password": "x" }), StatusCode::BAD_REQUEST, "Invalid email"),
            (json!({ "email": "admin@test.com", "password": "wrong" }), StatusCode::UNAUTHORIZED, "Invalid credentials"),
            (json!({ "email": "ghost@test.com", "password": "adminpass" }), StatusCode::UNAUTHORIZED, "Invalid credentials"),
        ];
        for (body, expected, message) in cases {
            let (status, json) = send(&app, request("POST", "/api/auth/login", Some(body), None)).await;
            assert_eq!(status, expected);
            assert_eq!(json["message"], message);
        }
    }

    #[tokio::test]
    #[serial]
    async fn me_returns_own_profile() {
        let (app, db) = make_test_app().await;
        let (_, student) = seed_users(&db).await;

        let (status, _) = send(&app, request("GET", "/api/auth/me", None, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let token = token_for(&student);
        let (status, json) = send(&app, request("GET", "/api/auth/me", None, Some(&token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["id"], student.id);
        assert_eq!(json["data"]["email"], "sam@test.com");
        assert!(json["data"].get("password_hash").is_none());
    }

    #[tokio::test]
    #[serial]
    async fn change_password_flow() {
        let (app, db) = make_test_app().await;
        let (_, student) = seed_users(&db).await;
        let token = token_for(&student);

        let body = json!({ "current_password": "studentpass", "new_password": "a", "confirm_password": "b" });
        let (status, json) = send(&app, request("PUT", "/api/auth/password", Some(body), Some(&token))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Passwords do not match");

        let body = json!({ "current_password": "wrong", "new_password": "n3w", "confirm_password": "n3w" });
        let (status, _) = send(&app, request("PUT", "/api/auth/password", Some(body), Some(&token))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let body = json!({ "current_password": "studentpass", "new_password": "n3w", "confirm_password": "n3w" });
        let (status, json) = send(&app, request("PUT", "/api/auth/password", Some(body), Some(&token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Password changed successfully");

        let login = json!({ "email": "sam@test.com", "password": "n3w" });
        let (status, _) = send(&app, request("POST", "/api/auth/login", Some(login), None)).await;
        assert_eq!(status, StatusCode::OK);
    }
}
