#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, request, send};
    use axum::{Router, http::StatusCode};
    use sea_orm::ConnectionTrait;
    use serde_json::{Value, json};

    fn week(week_id: &str, start_date: &str) -> Value {
        json!({
            "week_id": week_id,
            "title": format!("Title {week_id}"),
            "start_date": start_date,
            "description": "Readings",
            "links": ["https://example.com/slides"]
        })
    }

    async fn create(app: &Router, week_id: &str, start_date: &str) -> Value {
        let (status, json) =
            send(app, request("POST", "/api/weeks", Some(week(week_id, start_date)), None)).await;
        assert_eq!(status, StatusCode::CREATED, "{json}");
        json["data"].clone()
    }

    #[tokio::test]
    async fn create_and_get_week() {
        let (app, _db) = make_test_app().await;
        let created = create(&app, "week-1", "2025-02-03").await;

        assert_eq!(created["week_id"], "week-1");
        assert_eq!(created["start_date"], "2025-02-03");
        assert_eq!(created["links"], json!(["https://example.com/slides"]));

        let (status, json) = send(&app, request("GET", "/api/weeks?week_id=week-1", None, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["title"], "Title week-1");
    }

    #[tokio::test]
    async fn duplicate_week_id_is_409_without_second_row() {
        let (app, _db) = make_test_app().await;
        create(&app, "week-1", "2025-02-03").await;

        let (status, json) =
            send(&app, request("POST", "/api/weeks", Some(week("week-1", "2025-03-03")), None)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["message"], "week_id already exists");

        let (_, json) = send(&app, request("GET", "/api/weeks", None, None)).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
        assert_eq!(json["data"][0]["start_date"], "2025-02-03");
    }

    #[tokio::test]
    async fn invalid_dates_are_rejected() {
        let (app, _db) = make_test_app().await;

        for date in ["2025-02-30", "03/02/2025", "2025-2-3"] {
            let (status, json) =
                send(&app, request("POST", "/api/weeks", Some(week("w", date)), None)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{date}");
            assert_eq!(json["message"], "Invalid start_date format");
        }
    }

    #[tokio::test]
    async fn missing_fields_and_non_array_links() {
        let (app, _db) = make_test_app().await;

        let body = json!({ "week_id": "w", "title": "T", "start_date": "2025-02-03" });
        let (status, json) = send(&app, request("POST", "/api/weeks", Some(body), None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Missing required fields");

        let body = json!({
            "week_id": "w", "title": "T", "start_date": "2025-02-03",
            "description": "D", "links": "not-an-array"
        });
        let (status, json) = send(&app, request("POST", "/api/weeks", Some(body), None)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["links"], json!([]));
    }

    #[tokio::test]
    async fn list_defaults_to_start_date_ascending() {
        let (app, _db) = make_test_app().await;
        create(&app, "b", "2025-03-01").await;
        create(&app, "a", "2025-01-01").await;
        create(&app, "c", "2025-02-01").await;

        let (_, json) = send(&app, request("GET", "/api/weeks?resource=weeks", None, None)).await;
        let ids: Vec<_> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|w| w["week_id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["a", "c", "b"]);

        let (_, json) =
            send(&app, request("GET", "/api/weeks?order=desc&sort=bogus", None, None)).await;
        assert_eq!(json["data"][0]["week_id"], "b");
    }

    #[tokio::test]
    async fn sparse_update() {
        let (app, _db) = make_test_app().await;
        create(&app, "week-1", "2025-02-03").await;

        let body = json!({ "week_id": "week-1", "links": [] , "start_date": "2025-02-10" });
        let (status, json) = send(&app, request("PUT", "/api/weeks", Some(body), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Week updated successfully");
        assert_eq!(json["data"]["links"], json!([]));
        assert_eq!(json["data"]["start_date"], "2025-02-10");
        assert_eq!(json["data"]["title"], "Title week-1");

        let body = json!({ "week_id": "week-1" });
        let (status, json) = send(&app, request("PUT", "/api/weeks", Some(body), None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "No fields to update");

        let body = json!({ "week_id": "week-1", "links": {"a": 1} });
        let (status, json) = send(&app, request("PUT", "/api/weeks", Some(body), None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "links must be an array");

        let body = json!({ "week_id": "nope", "title": "X" });
        let (status, _) = send(&app, request("PUT", "/api/weeks", Some(body), None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_resource_is_400() {
        let (app, _db) = make_test_app().await;

        let (status, json) = send(&app, request("GET", "/api/weeks?resource=users", None, None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Invalid resource. Use 'weeks' or 'comments'");
    }

    #[tokio::test]
    async fn put_on_comments_is_405() {
        let (app, _db) = make_test_app().await;

        let body = json!({ "id": 1, "text": "edited" });
        let (status, json) =
            send(&app, request("PUT", "/api/weeks?resource=comments", Some(body), None)).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn delete_week() {
        let (app, _db) = make_test_app().await;
        create(&app, "week-1", "2025-02-03").await;

        let body = json!({ "week_id": "week-1" });
        let (status, json) = send(&app, request("DELETE", "/api/weeks", Some(body), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Week and associated comments deleted successfully");

        let (status, _) = send(&app, request("DELETE", "/api/weeks?week_id=week-1", None, None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, json) = send(&app, request("DELETE", "/api/weeks", None, None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "week_id is required");
    }

    #[tokio::test]
    async fn blank_week_id_is_400_not_a_list() {
        let (app, _db) = make_test_app().await;
        create(&app, "week-1", "2025-02-03").await;

        for uri in ["/api/weeks?week_id=", "/api/weeks?week_id=%20%20"] {
            let (status, json) = send(&app, request("GET", uri, None, None)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(json["message"], "week_id is required");
        }
    }

    #[tokio::test]
    async fn failed_delete_keeps_week_and_comments() {
        let (app, db) = make_test_app().await;
        create(&app, "week-1", "2025-02-03").await;
        let body = json!({ "week_id": "week-1", "author": "Sam", "text": "kept" });
        let (status, _) =
            send(&app, request("POST", "/api/weeks?resource=comments", Some(body), None)).await;
        assert_eq!(status, StatusCode::CREATED);

        db.execute_unprepared(
            "CREATE TRIGGER block_week_delete BEFORE DELETE ON weeks \
             BEGIN SELECT RAISE(ABORT, 'blocked'); END",
        )
        .await
        .unwrap();

        let (status, json) =
            send(&app, request("DELETE", "/api/weeks?week_id=week-1", None, None)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Database error occurred");

        let (status, _) = send(&app, request("GET", "/api/weeks?week_id=week-1", None, None)).await;
        assert_eq!(status, StatusCode::OK);
        let (_, json) = send(
            &app,
            request("GET", "/api/weeks?resource=comments&week_id=week-1", None, None),
        )
        .await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
        assert_eq!(json["data"][0]["text"], "kept");
    }
}
