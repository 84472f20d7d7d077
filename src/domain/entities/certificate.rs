//! Certificate entity representing an issued credential.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Maximum length of `name` and `institution`, mirrored by the schema.
pub const MAX_NAME_LEN: u64 = 200;
/// Maximum length of the category code, mirrored by the schema.
pub const MAX_TYPE_LEN: u64 = 50;

/// A certificate or course credential shown on the portfolio.
///
/// Identity and lifecycle timestamps are system-assigned: construction
/// generates a fresh UUID and sets both timestamps to the current instant.
/// `certificate_type` is immutable after creation; `updated_at` is refreshed
/// by the repository on every successful update commit.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Certificate {
    pub id: Uuid,
    pub name: String,
    pub institution: String,
    pub image_url: String,
    pub credential_url: String,
    #[sqlx(rename = "type")]
    pub certificate_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Certificate {
    /// Creates a new certificate with a fresh id and both timestamps set to now.
    pub fn new(
        name: String,
        institution: String,
        image_url: String,
        credential_url: String,
        certificate_type: String,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            name,
            institution,
            image_url,
            credential_url,
            certificate_type,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a partial update. `None` fields keep their previous value.
    ///
    /// `updated_at` is not touched here — the repository refreshes it as
    /// part of the update commit.
    pub fn apply_patch(&mut self, patch: CertificatePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(institution) = patch.institution {
            self.institution = institution;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(credential_url) = patch.credential_url {
            self.credential_url = credential_url;
        }
    }
}

/// Partial update for an existing certificate.
///
/// `None` fields are left unchanged. The category code is deliberately
/// absent: it cannot be changed after creation.
#[derive(Debug, Clone, Default)]
pub struct CertificatePatch {
    pub name: Option<String>,
    pub institution: Option<String>,
    pub image_url: Option<String>,
    pub credential_url: Option<String>,
}
