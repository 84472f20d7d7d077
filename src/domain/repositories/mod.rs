//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.

pub mod certificate_repository;

pub use certificate_repository::CertificateRepository;

#[cfg(test)]
pub use certificate_repository::MockCertificateRepository;
