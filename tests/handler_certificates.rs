mod common;

use chrono::{Duration, Utc};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

// ─── POST (create) ───────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_certificate(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .post("/api/v1/certificates")
        .json(&json!({
            "name": "X",
            "institution": "I",
            "imageUrl": "img",
            "credentialUrl": "url",
            "type": "CER"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    let id = body["id"].as_str().unwrap();
    assert!(!id.is_empty());
    assert_eq!(body["name"], "X");
    assert_eq!(body["institution"], "I");
    assert_eq!(body["image"], "img");
    assert_eq!(body["url"], "url");
    assert_eq!(body["type"], "CER");

    let location = response.header("location");
    assert_eq!(
        location.to_str().unwrap(),
        format!("/api/v1/certificates/{id}")
    );
}

#[sqlx::test]
async fn test_create_certificate_generates_unique_ids(pool: PgPool) {
    let server = common::make_server(pool);
    let mut ids = std::collections::HashSet::new();

    for i in 0..3 {
        let response = server
            .post("/api/v1/certificates")
            .json(&json!({ "name": format!("Cert {i}") }))
            .await;

        response.assert_status(axum::http::StatusCode::CREATED);
        let body = response.json::<serde_json::Value>();
        assert!(ids.insert(body["id"].as_str().unwrap().to_string()));
    }
}

#[sqlx::test]
async fn test_create_certificate_sets_equal_timestamps(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let response = server
        .post("/api/v1/certificates")
        .json(&json!({ "name": "Timestamped" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let body = response.json::<serde_json::Value>();
    let id = Uuid::parse_str(body["id"].as_str().unwrap()).unwrap();

    let (created_at, updated_at) = common::fetch_timestamps(&pool, id).await;
    assert_eq!(created_at, updated_at);
}

#[sqlx::test]
async fn test_create_certificate_missing_name(pool: PgPool) {
    let server = common::make_server(pool);

    // Name absent entirely.
    let response = server
        .post("/api/v1/certificates")
        .json(&json!({ "institution": "I" }))
        .await;
    response.assert_status_bad_request();

    // Name present but blank.
    let response = server
        .post("/api/v1/certificates")
        .json(&json!({ "name": "   " }))
        .await;
    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["message"], "Name is required");
}

#[sqlx::test]
async fn test_create_certificate_name_too_long(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .post("/api/v1/certificates")
        .json(&json!({ "name": "a".repeat(201) }))
        .await;

    response.assert_status_bad_request();
}

// ─── GET ─────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_get_certificate_round_trip(pool: PgPool) {
    let server = common::make_server(pool);

    let created = server
        .post("/api/v1/certificates")
        .json(&json!({
            "name": "X",
            "institution": "I",
            "imageUrl": "img",
            "credentialUrl": "url",
            "type": "CER"
        }))
        .await
        .json::<serde_json::Value>();
    let id = created["id"].as_str().unwrap();

    let response = server.get(&format!("/api/v1/certificates/{id}")).await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), created);
}

#[sqlx::test]
async fn test_get_certificate_not_found(pool: PgPool) {
    let server = common::make_server(pool);
    let id = Uuid::new_v4();

    let response = server.get(&format!("/api/v1/certificates/{id}")).await;

    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    assert_eq!(
        body["message"],
        format!("Certificate with ID {id} not found")
    );
}

#[sqlx::test]
async fn test_get_certificate_invalid_id(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/api/v1/certificates/not-a-uuid").await;

    response.assert_status_bad_request();
}

// ─── GET (list) ──────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_list_certificates_empty(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/api/v1/certificates").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!([]));
}

#[sqlx::test]
async fn test_list_certificates_newest_first(pool: PgPool) {
    let now = Utc::now();
    common::insert_certificate(&pool, "oldest", now - Duration::hours(2)).await;
    common::insert_certificate(&pool, "middle", now - Duration::hours(1)).await;
    common::insert_certificate(&pool, "newest", now).await;

    let server = common::make_server(pool);
    let response = server.get("/api/v1/certificates").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["newest", "middle", "oldest"]);
}

// ─── PUT (update) ────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_certificate_partial(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let created = server
        .post("/api/v1/certificates")
        .json(&json!({
            "name": "X",
            "institution": "I",
            "imageUrl": "img",
            "credentialUrl": "url",
            "type": "CER"
        }))
        .await
        .json::<serde_json::Value>();
    let id = Uuid::parse_str(created["id"].as_str().unwrap()).unwrap();
    let (_, updated_before) = common::fetch_timestamps(&pool, id).await;

    // Only the name is sent; every other field must survive untouched.
    let response = server
        .put(&format!("/api/v1/certificates/{id}"))
        .json(&json!({ "name": "Y" }))
        .await;
    response.assert_status(axum::http::StatusCode::NO_CONTENT);

    let body = server
        .get(&format!("/api/v1/certificates/{id}"))
        .await
        .json::<serde_json::Value>();
    assert_eq!(body["name"], "Y");
    assert_eq!(body["institution"], "I");
    assert_eq!(body["image"], "img");
    assert_eq!(body["url"], "url");
    assert_eq!(body["type"], "CER");

    let (created_at, updated_after) = common::fetch_timestamps(&pool, id).await;
    assert!(updated_after >= updated_before);
    assert!(created_at <= updated_after);
}

#[sqlx::test]
async fn test_update_certificate_not_found(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .put(&format!("/api/v1/certificates/{}", Uuid::new_v4()))
        .json(&json!({ "name": "Y" }))
        .await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_update_certificate_invalid_id(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .put("/api/v1/certificates/not-a-uuid")
        .json(&json!({ "name": "Y" }))
        .await;

    response.assert_status_bad_request();
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_certificate(pool: PgPool) {
    let id = common::insert_certificate(&pool, "doomed", Utc::now()).await;
    let server = common::make_server(pool);

    server
        .delete(&format!("/api/v1/certificates/{id}"))
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);

    server
        .get(&format!("/api/v1/certificates/{id}"))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_certificate_twice(pool: PgPool) {
    let id = common::insert_certificate(&pool, "doomed", Utc::now()).await;
    let server = common::make_server(pool);

    server
        .delete(&format!("/api/v1/certificates/{id}"))
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);

    // Second delete misses — 404, not an error.
    server
        .delete(&format!("/api/v1/certificates/{id}"))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_certificate_not_found(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .delete(&format!("/api/v1/certificates/{}", Uuid::new_v4()))
        .await;

    response.assert_status_not_found();
}

// ─── Full lifecycle ──────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_certificate_lifecycle(pool: PgPool) {
    let server = common::make_server(pool);

    let created = server
        .post("/api/v1/certificates")
        .json(&json!({
            "name": "X",
            "institution": "I",
            "imageUrl": "img",
            "credentialUrl": "url",
            "type": "CER"
        }))
        .await;
    created.assert_status(axum::http::StatusCode::CREATED);
    let id = created.json::<serde_json::Value>()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let fetched = server.get(&format!("/api/v1/certificates/{id}")).await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<serde_json::Value>()["name"], "X");

    server
        .put(&format!("/api/v1/certificates/{id}"))
        .json(&json!({ "name": "Y" }))
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);

    let fetched = server.get(&format!("/api/v1/certificates/{id}")).await;
    assert_eq!(fetched.json::<serde_json::Value>()["name"], "Y");

    server
        .delete(&format!("/api/v1/certificates/{id}"))
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);

    server
        .get(&format!("/api/v1/certificates/{id}"))
        .await
        .assert_status_not_found();
}
