#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, request, send};
    use axum::{Router, http::StatusCode};
    use serde_json::{Value, json};

    async fn create(app: &Router, title: &str, description: &str) -> Value {
        let body = json!({ "title": title, "description": description, "link": "https://example.com" });
        let (status, json) = send(app, request("POST", "/api/resources", Some(body), None)).await;
        assert_eq!(status, StatusCode::CREATED);
        json["data"].clone()
    }

    fn titles(json: &Value) -> Vec<String> {
        json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["title"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn list_is_empty_initially() {
        let (app, _db) = make_test_app().await;

        let (status, json) = send(&app, request("GET", "/api/resources", None, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], json!([]));
    }

    #[tokio::test]
    async fn get_by_id() {
        let (app, _db) = make_test_app().await;
        let created = create(&app, "Rust Book", "").await;

        let uri = format!("/api/resources?id={}", created["id"]);
        let (status, json) = send(&app, request("GET", &uri, None, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"], created);
    }

    #[tokio::test]
    async fn non_numeric_id_is_400_and_unknown_is_404() {
        let (app, _db) = make_test_app().await;

        let (status, json) = send(&app, request("GET", "/api/resources?id=abc", None, None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Invalid resource ID");

        let (status, json) = send(&app, request("GET", "/api/resources?id=99999", None, None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Resource not found");
    }

    #[tokio::test]
    async fn sort_by_title_ascending() {
        let (app, _db) = make_test_app().await;
        for title in ["Charlie", "alpha", "Bravo"] {
            create(&app, title, "").await;
        }

        let (_, json) =
            send(&app, request("GET", "/api/resources?sort=title&order=ASC", None, None)).await;
        assert_eq!(titles(&json), vec!["Bravo", "Charlie", "alpha"]);

        let (_, json) =
            send(&app, request("GET", "/api/resources?sort=title&order=desc", None, None)).await;
        assert_eq!(titles(&json), vec!["alpha", "Charlie", "Bravo"]);
    }

    #[tokio::test]
    async fn invalid_sort_and_order_fall_back_to_defaults() {
        let (app, _db) = make_test_app().await;
        for title in ["one", "two"] {
            create(&app, title, "").await;
        }

        let uri = "/api/resources?sort=title;DROP%20TABLE%20resources&order=sideways";
        let (status, json) = send(&app, request("GET", uri, None, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"].as_array().unwrap().len(), 2);

        // The table is still there.
        let (status, _) = send(&app, request("GET", "/api/resources", None, None)).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn search_matches_title_or_description_case_insensitively() {
        let (app, _db) = make_test_app().await;
        create(&app, "Rust Book", "").await;
        create(&app, "Cargo guide", "covers RUST tooling").await;
        create(&app, "Python notes", "").await;

        let (_, json) = send(&app, request("GET", "/api/resources?search=rust&sort=title&order=asc", None, None)).await;
        assert_eq!(titles(&json), vec!["Cargo guide", "Rust Book"]);
    }

    #[tokio::test]
    async fn search_wildcards_are_literal() {
        let (app, _db) = make_test_app().await;
        create(&app, "100% coverage", "").await;
        create(&app, "Plain", "").await;

        let (_, json) = send(&app, request("GET", "/api/resources?search=%25", None, None)).await;
        assert_eq!(titles(&json), vec!["100% coverage"]);
    }
}
