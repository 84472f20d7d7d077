//! HTTP request handlers for API endpoints.

pub mod certificates;
pub mod health;

pub use certificates::{
    create_certificate_handler, delete_certificate_handler, get_certificate_handler,
    list_certificates_handler, seed_certificates_handler, update_certificate_handler,
};
pub use health::health_handler;
