//! PostgreSQL implementation of the certificate repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::Certificate;
use crate::domain::repositories::CertificateRepository;
use crate::error::AppError;

/// PostgreSQL repository for certificate storage and retrieval.
///
/// Uses runtime-bound prepared statements; each mutating method is a single
/// statement (or a single transaction for the batch insert), so a commit is
/// durable before the call returns.
pub struct PgCertificateRepository {
    pool: Arc<PgPool>,
}

impl PgCertificateRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CertificateRepository for PgCertificateRepository {
    async fn list_all(&self) -> Result<Vec<Certificate>, AppError> {
        let rows = sqlx::query_as::<_, Certificate>(
            r#"
            SELECT id, name, institution, image_url, credential_url, "type", created_at, updated_at
            FROM certificates
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Certificate>, AppError> {
        let row = sqlx::query_as::<_, Certificate>(
            r#"
            SELECT id, name, institution, image_url, credential_url, "type", created_at, updated_at
            FROM certificates
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn insert(&self, certificate: Certificate) -> Result<Certificate, AppError> {
        let row = sqlx::query_as::<_, Certificate>(
            r#"
            INSERT INTO certificates (id, name, institution, image_url, credential_url, "type", created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, institution, image_url, credential_url, "type", created_at, updated_at
            "#,
        )
        .bind(certificate.id)
        .bind(&certificate.name)
        .bind(&certificate.institution)
        .bind(&certificate.image_url)
        .bind(&certificate.credential_url)
        .bind(&certificate.certificate_type)
        .bind(certificate.created_at)
        .bind(certificate.updated_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn update(&self, certificate: Certificate) -> Result<(), AppError> {
        // `updated_at` is refreshed here, explicitly, inside the same commit.
        // The category code is immutable and therefore not part of the SET list.
        let updated_at = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE certificates
            SET name = $2, institution = $3, image_url = $4, credential_url = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(certificate.id)
        .bind(&certificate.name)
        .bind(&certificate.institution)
        .bind(&certificate.image_url)
        .bind(&certificate.credential_url)
        .bind(updated_at)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Certificate with ID {} not found",
                certificate.id
            )));
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM certificates WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM certificates")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn insert_many(&self, certificates: Vec<Certificate>) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for certificate in &certificates {
            let result = sqlx::query(
                r#"
                INSERT INTO certificates (id, name, institution, image_url, credential_url, "type", created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(certificate.id)
            .bind(&certificate.name)
            .bind(&certificate.institution)
            .bind(&certificate.image_url)
            .bind(&certificate.credential_url)
            .bind(&certificate.certificate_type)
            .bind(certificate.created_at)
            .bind(certificate.updated_at)
            .execute(&mut *tx)
            .await?;

            inserted += result.rows_affected();
        }

        tx.commit().await?;

        Ok(inserted)
    }
}
