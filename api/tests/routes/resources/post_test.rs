#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, request, send};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn create_echoes_trimmed_input() {
        let (app, _db) = make_test_app().await;

        let body = json!({ "title": "  A  ", "description": "  notes ", "link": "http://x.com" });
        let (status, json) = send(&app, request("POST", "/api/resources", Some(body), None)).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Resource created successfully");
        assert_eq!(json["data"]["title"], "A");
        assert_eq!(json["data"]["description"], "notes");
        assert_eq!(json["data"]["link"], "http://x.com");
        assert!(json["data"]["id"].as_i64().unwrap() > 0);
        assert!(json["data"]["created_at"].is_string());
    }

    #[tokio::test]
    async fn identical_payload_twice_creates_two_records() {
        let (app, _db) = make_test_app().await;

        let body = json!({ "title": "A", "link": "http://x.com" });
        let (first, a) = send(&app, request("POST", "/api/resources", Some(body.clone()), None)).await;
        let (second, b) = send(&app, request("POST", "/api/resources", Some(body), None)).await;

        assert_eq!(first, StatusCode::CREATED);
        assert_eq!(second, StatusCode::CREATED);
        assert_ne!(a["data"]["id"], b["data"]["id"]);
        assert_eq!(a["data"]["description"], "");
    }

    #[tokio::test]
    async fn missing_title_or_link_is_400() {
        let (app, _db) = make_test_app().await;

        for body in [
            json!({ "link": "http://x.com" }),
            json!({ "title": "   ", "link": "http://x.com" }),
            json!({ "title": "A" }),
        ] {
            let (status, json) = send(&app, request("POST", "/api/resources", Some(body), None)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(json["success"], false);
            assert!(json["data"].is_null());
            assert_eq!(json["message"], "Title and link are required");
        }
    }

    #[tokio::test]
    async fn bad_url_is_400() {
        let (app, _db) = make_test_app().await;

        let body = json!({ "title": "A", "link": "x.com" });
        let (status, json) = send(&app, request("POST", "/api/resources", Some(body), None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Invalid URL format");
    }

    #[tokio::test]
    async fn malformed_json_is_400_envelope() {
        let (app, _db) = make_test_app().await;

        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/api/resources")
            .header("Content-Type", "application/json")
            .body(axum::body::Body::from("{not json"))
            .unwrap();
        let (status, json) = send(&app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Invalid JSON body");
    }

    #[tokio::test]
    async fn unknown_action_is_400() {
        let (app, _db) = make_test_app().await;

        let body = json!({ "title": "A", "link": "http://x.com" });
        let (status, json) =
            send(&app, request("POST", "/api/resources?action=frobnicate", Some(body), None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn unsupported_method_is_405_envelope() {
        let (app, _db) = make_test_app().await;

        let (status, json) = send(&app, request("PATCH", "/api/resources", None, None)).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(json["success"], false);
        assert!(json["data"].is_null());
    }
}
