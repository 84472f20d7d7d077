use std::sync::Arc;

use crate::domain::repositories::CertificateRepository;

/// Shared application state injected into all handlers.
///
/// The repository lives behind a trait object so tests can swap in mocks.
#[derive(Clone)]
pub struct AppState {
    pub certificates: Arc<dyn CertificateRepository>,
}
