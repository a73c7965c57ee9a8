#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, request, send};
    use axum::{Router, http::StatusCode};
    use serde_json::{Value, json};

    async fn setup(app: &Router) {
        let body = json!({
            "week_id": "week-1", "title": "Ownership",
            "start_date": "2025-02-03", "description": "Moves"
        });
        let (status, _) = send(app, request("POST", "/api/weeks", Some(body), None)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    async fn comment(app: &Router, week_id: &str, text: &str) -> (StatusCode, Value) {
        let body = json!({ "week_id": week_id, "author": "Sam", "text": text });
        send(app, request("POST", "/api/weeks?resource=comments", Some(body), None)).await
    }

    #[tokio::test]
    async fn create_and_list_comments() {
        let (app, _db) = make_test_app().await;
        setup(&app).await;

        let (status, json) = comment(&app, "week-1", "first").await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["week_id"], "week-1");
        comment(&app, "week-1", "second").await;

        let (status, json) = send(
            &app,
            request("GET", "/api/weeks?resource=comments&week_id=week-1", None, None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"][0]["text"], "first");
        assert_eq!(json["data"][1]["text"], "second");
    }

    #[tokio::test]
    async fn comment_validation() {
        let (app, _db) = make_test_app().await;
        setup(&app).await;

        let (status, json) = comment(&app, "week-1", "   ").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Missing required fields");

        let (status, json) = comment(&app, "week-404", "hello").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Week not found");

        let (status, json) =
            send(&app, request("GET", "/api/weeks?resource=comments", None, None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "week_id is required");
    }

    #[tokio::test]
    async fn week_delete_cascades_to_comments() {
        let (app, _db) = make_test_app().await;
        setup(&app).await;
        comment(&app, "week-1", "one").await;

        let (status, _) = send(&app, request("DELETE", "/api/weeks?week_id=week-1", None, None)).await;
        assert_eq!(status, StatusCode::OK);

        let (status, json) = send(
            &app,
            request("GET", "/api/weeks?resource=comments&week_id=week-1", None, None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"], json!([]));
    }

    #[tokio::test]
    async fn delete_single_comment_by_query_or_body() {
        let (app, _db) = make_test_app().await;
        setup(&app).await;
        let (_, first) = comment(&app, "week-1", "one").await;
        let (_, second) = comment(&app, "week-1", "two").await;

        let uri = format!("/api/weeks?resource=comments&id={}", first["data"]["id"]);
        let (status, json) = send(&app, request("DELETE", &uri, None, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Comment deleted successfully");

        let body = json!({ "id": second["data"]["id"] });
        let (status, _) =
            send(&app, request("DELETE", "/api/weeks?resource=comments", Some(body), None)).await;
        assert_eq!(status, StatusCode::OK);

        let (status, json) =
            send(&app, request("DELETE", "/api/weeks?resource=comments", None, None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "commentId is required");

        let (status, _) = send(&app, request("DELETE", &uri, None, None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
