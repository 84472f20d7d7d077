//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgCertificateRepository`] - Certificate storage and retrieval

pub mod pg_certificate_repository;

pub use pg_certificate_repository::PgCertificateRepository;
