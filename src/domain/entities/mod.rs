//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Certificate`] - A certificate or course credential
//! - [`CertificatePatch`] - Partial update for an existing certificate

pub mod certificate;

pub use certificate::{Certificate, CertificatePatch};
