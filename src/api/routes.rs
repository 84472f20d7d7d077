//! API route configuration.

use crate::api::handlers::{
    create_certificate_handler, delete_certificate_handler, get_certificate_handler,
    list_certificates_handler, seed_certificates_handler, update_certificate_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// The certificate route group, mounted under `/api/v1/certificates`.
///
/// # Endpoints
///
/// - `GET    /`     - List all certificates, newest first
/// - `POST   /`     - Create a certificate
/// - `GET    /{id}` - Get a certificate by id
/// - `PUT    /{id}` - Update a certificate (partial, category code immutable)
/// - `DELETE /{id}` - Delete a certificate
/// - `POST   /seed` - Seed sample data into an empty table
pub fn certificate_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_certificates_handler).post(create_certificate_handler),
        )
        .route(
            "/{id}",
            get(get_certificate_handler)
                .put(update_certificate_handler)
                .delete(delete_certificate_handler),
        )
        .route("/seed", post(seed_certificates_handler))
}
