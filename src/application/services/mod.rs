//! Business logic services for the application layer.

pub mod health_service;
pub mod url_service;

pub use health_service::HealthService;
pub use url_service::UrlService;
