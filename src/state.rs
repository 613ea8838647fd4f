//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{HealthService, UrlService};

/// Services constructed once at startup and shared by all requests.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
    pub health_service: Arc<HealthService>,
}

impl AppState {
    pub fn new(url_service: Arc<UrlService>, health_service: Arc<HealthService>) -> Self {
        Self {
            url_service,
            health_service,
        }
    }
}
