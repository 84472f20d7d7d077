//! DTOs for the certificate endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Certificate;
use crate::domain::entities::certificate::{MAX_NAME_LEN, MAX_TYPE_LEN};

/// Request body for `POST /api/v1/certificates`.
///
/// No field is required at the contract level — missing fields deserialize
/// to empty strings. The handler rejects an empty `name`; everything else
/// is unconstrained apart from the schema lengths.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCertificateRequest {
    #[serde(default)]
    #[validate(length(max = MAX_NAME_LEN, message = "Name must be at most 200 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(
        max = MAX_NAME_LEN,
        message = "Institution must be at most 200 characters"
    ))]
    pub institution: String,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub credential_url: String,

    /// Short category code, e.g. `CER` for a certificate or `CUR` for a course.
    #[serde(default, rename = "type")]
    #[validate(length(max = MAX_TYPE_LEN, message = "Type must be at most 50 characters"))]
    pub certificate_type: String,
}

/// Request body for `PUT /api/v1/certificates/{id}`.
///
/// All fields are optional — absent or `null` fields keep their previous
/// value. The category code cannot be changed after creation, so it is not
/// part of this contract.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCertificateRequest {
    #[validate(length(max = MAX_NAME_LEN, message = "Name must be at most 200 characters"))]
    pub name: Option<String>,

    #[validate(length(
        max = MAX_NAME_LEN,
        message = "Institution must be at most 200 characters"
    ))]
    pub institution: Option<String>,

    pub image_url: Option<String>,

    pub credential_url: Option<String>,
}

/// Outward projection of a certificate.
///
/// Renames `image_url` → `image` and `credential_url` → `url`, and omits
/// the lifecycle timestamps.
#[derive(Debug, Serialize)]
pub struct CertificateResponse {
    pub id: String,
    pub name: String,
    pub institution: String,
    pub image: String,
    pub url: String,
    #[serde(rename = "type")]
    pub certificate_type: String,
}

impl From<Certificate> for CertificateResponse {
    fn from(certificate: Certificate) -> Self {
        Self {
            id: certificate.id.to_string(),
            name: certificate.name,
            institution: certificate.institution,
            image: certificate.image_url,
            url: certificate.credential_url,
            certificate_type: certificate.certificate_type,
        }
    }
}

/// Response body for `POST /api/v1/certificates/seed`.
#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub message: String,
    pub count: u64,
}
