#![allow(dead_code)]

use certificates_api::api::routes::certificate_routes;
use certificates_api::infrastructure::persistence::PgCertificateRepository;
use certificates_api::state::AppState;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState {
        certificates: Arc::new(PgCertificateRepository::new(Arc::new(pool))),
    }
}

/// Build a test server with the full certificate route group mounted at its
/// production prefix.
pub fn make_server(pool: PgPool) -> axum_test::TestServer {
    let state = create_test_state(pool);
    let app = axum::Router::new()
        .nest("/api/v1/certificates", certificate_routes())
        .with_state(state);
    axum_test::TestServer::new(app).unwrap()
}

/// Inserts a certificate row directly, with an explicit `created_at` so
/// ordering tests can control the timeline.
pub async fn insert_certificate(pool: &PgPool, name: &str, created_at: DateTime<Utc>) -> Uuid {
    let id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO certificates (id, name, institution, image_url, credential_url, "type", created_at, updated_at)
        VALUES ($1, $2, 'Test Institute', 'assets/img/test.jpg', 'https://example.com/proof', 'CER', $3, $3)
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(created_at)
    .execute(pool)
    .await
    .unwrap();

    id
}

/// Reads the lifecycle timestamps of a row.
pub async fn fetch_timestamps(pool: &PgPool, id: Uuid) -> (DateTime<Utc>, DateTime<Utc>) {
    sqlx::query_as("SELECT created_at, updated_at FROM certificates WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}
