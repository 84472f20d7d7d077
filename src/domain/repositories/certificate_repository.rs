//! Repository trait for certificate data access.

use crate::domain::entities::Certificate;
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for certificate storage.
///
/// The sole component permitted to perform storage operations on
/// certificates. Every mutating operation performs exactly one durable
/// commit before returning, so no partial state is visible to subsequent
/// reads.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCertificateRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CertificateRepository: Send + Sync {
    /// Lists all certificates, newest first (`created_at` descending).
    ///
    /// Returns an empty vector when none exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn list_all(&self) -> Result<Vec<Certificate>, AppError>;

    /// Finds a certificate by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Certificate))` if found
    /// - `Ok(None)` if not found — absence is not an error
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Certificate>, AppError>;

    /// Persists a new certificate and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn insert(&self, certificate: Certificate) -> Result<Certificate, AppError>;

    /// Updates an existing certificate.
    ///
    /// Refreshes `updated_at` to the current time as part of the same
    /// commit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no row matches the id.
    /// Returns [`AppError::Storage`] on database errors.
    async fn update(&self, certificate: Certificate) -> Result<(), AppError>;

    /// Deletes a certificate by id.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if the id does
    /// not exist — a miss is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;

    /// Counts stored certificates.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Inserts a batch of certificates in a single transaction.
    ///
    /// Returns the number of rows inserted. Used by the seed endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors; nothing is
    /// committed if any insert fails.
    async fn insert_many(&self, certificates: Vec<Certificate>) -> Result<u64, AppError>;
}
