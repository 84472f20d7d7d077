//! Handlers for certificate CRUD and seed endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::certificate::{
    CertificateResponse, CreateCertificateRequest, SeedResponse, UpdateCertificateRequest,
};
use crate::domain::entities::{Certificate, CertificatePatch};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all certificates, newest first.
///
/// # Endpoint
///
/// `GET /api/v1/certificates`
pub async fn list_certificates_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CertificateResponse>>, AppError> {
    let certificates = state
        .certificates
        .list_all()
        .await
        .inspect_err(|e| tracing::error!(error = ?e, "Failed to list certificates"))?;

    Ok(Json(
        certificates
            .into_iter()
            .map(CertificateResponse::from)
            .collect(),
    ))
}

/// Returns a single certificate by id.
///
/// # Endpoint
///
/// `GET /api/v1/certificates/{id}`
///
/// # Errors
///
/// Returns 400 when `{id}` is not a valid UUID.
/// Returns 404 when no certificate matches.
pub async fn get_certificate_handler(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<CertificateResponse>, AppError> {
    let certificate = state
        .certificates
        .find_by_id(id)
        .await
        .inspect_err(|e| tracing::error!(error = ?e, %id, "Failed to load certificate"))?
        .ok_or_else(|| AppError::not_found(format!("Certificate with ID {id} not found")))?;

    Ok(Json(certificate.into()))
}

/// Creates a new certificate.
///
/// # Endpoint
///
/// `POST /api/v1/certificates`
///
/// The response carries a `Location` header pointing at the new resource.
///
/// # Errors
///
/// Returns 400 when `name` is missing or blank, or a field exceeds its
/// length limit.
pub async fn create_certificate_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateCertificateRequest>,
) -> Result<Response, AppError> {
    payload.validate()?;

    if payload.name.trim().is_empty() {
        return Err(AppError::bad_request("Name is required"));
    }

    let certificate = Certificate::new(
        payload.name,
        payload.institution,
        payload.image_url,
        payload.credential_url,
        payload.certificate_type,
    );

    let stored = state
        .certificates
        .insert(certificate)
        .await
        .inspect_err(|e| tracing::error!(error = ?e, "Failed to create certificate"))?;

    let location = format!("/api/v1/certificates/{}", stored.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CertificateResponse::from(stored)),
    )
        .into_response())
}

/// Updates an existing certificate.
///
/// # Endpoint
///
/// `PUT /api/v1/certificates/{id}`
///
/// Absent or `null` fields keep their previous value; the category code is
/// immutable. A successful update returns 204 with no body.
///
/// # Errors
///
/// Returns 400 when `{id}` is not a valid UUID or a field exceeds its
/// length limit.
/// Returns 404 when no certificate matches.
pub async fn update_certificate_handler(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateCertificateRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;

    let mut certificate = state
        .certificates
        .find_by_id(id)
        .await
        .inspect_err(|e| tracing::error!(error = ?e, %id, "Failed to load certificate for update"))?
        .ok_or_else(|| AppError::not_found(format!("Certificate with ID {id} not found")))?;

    certificate.apply_patch(CertificatePatch {
        name: payload.name,
        institution: payload.institution,
        image_url: payload.image_url,
        credential_url: payload.credential_url,
    });

    state
        .certificates
        .update(certificate)
        .await
        .inspect_err(|e| tracing::error!(error = ?e, %id, "Failed to update certificate"))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a certificate.
///
/// # Endpoint
///
/// `DELETE /api/v1/certificates/{id}`
///
/// # Errors
///
/// Returns 400 when `{id}` is not a valid UUID.
/// Returns 404 when no certificate matches — deleting twice is safe, the
/// second call simply misses.
pub async fn delete_certificate_handler(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let deleted = state
        .certificates
        .delete(id)
        .await
        .inspect_err(|e| tracing::error!(error = ?e, %id, "Failed to delete certificate"))?;

    if !deleted {
        return Err(AppError::not_found(format!(
            "Certificate with ID {id} not found"
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Seeds the table with the sample certificate set.
///
/// # Endpoint
///
/// `POST /api/v1/certificates/seed`
///
/// # Errors
///
/// Returns 409 when the table already contains certificates.
pub async fn seed_certificates_handler(
    State(state): State<AppState>,
) -> Result<Json<SeedResponse>, AppError> {
    let existing = state
        .certificates
        .count()
        .await
        .inspect_err(|e| tracing::error!(error = ?e, "Failed to count certificates before seeding"))?;

    if existing > 0 {
        return Err(AppError::conflict("Database already contains certificates"));
    }

    let count = state
        .certificates
        .insert_many(sample_certificates())
        .await
        .inspect_err(|e| tracing::error!(error = ?e, "Failed to seed certificates"))?;

    Ok(Json(SeedResponse {
        message: "Certificates seeded successfully".to_string(),
        count,
    }))
}

/// Sample data inserted by the seed endpoint.
fn sample_certificates() -> Vec<Certificate> {
    vec![Certificate::new(
        "Java Standard Edition - 2015".to_string(),
        "CENTEC".to_string(),
        "assets/img/certificates/centec.jpg".to_string(),
        "https://drive.google.com/file/d/12TrSTfCw8E9uE5gEfoSfw8aUQQhpdewk/view?usp=sharing"
            .to_string(),
        "CER".to_string(),
    )]
}
