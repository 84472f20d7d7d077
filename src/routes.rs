//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`            - Health check: database connectivity (public)
//! - `/api/v1/certificates/*` - Certificate REST API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Configured origin allowlist
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `allowed_origins` - exact-match CORS origin allowlist; empty allows any
///   origin
pub fn app_router(state: AppState, allowed_origins: &[String]) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api/v1/certificates", api::routes::certificate_routes())
        .with_state(state)
        .layer(cors::layer(allowed_origins))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
