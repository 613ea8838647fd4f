//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /api/shorten/` - Create or look up a short code
//! - `GET  /api/health/`  - Health report of the service and its database
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .nest("/api", api::routes::routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::health_service::APPLICATION_NAME;
    use crate::application::services::{HealthService, UrlService};
    use crate::domain::entities::DatabaseInfo;
    use crate::domain::repositories::{MockHealthRepository, MockUrlRepository};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app() -> NormalizePath<Router> {
        let mut url_repo = MockUrlRepository::new();
        url_repo
            .expect_find_short_code_by_hash()
            .returning(|_| Ok(Some("abcdefg151026".to_string())));

        let mut health_repo = MockHealthRepository::new();
        health_repo
            .expect_get_database_info()
            .returning(|| Ok(DatabaseInfo::from_version_string("PostgreSQL 16.2 on x86_64")));

        app_router(AppState::new(
            Arc::new(UrlService::with_defaults(Arc::new(url_repo))),
            Arc::new(HealthService::new(Arc::new(health_repo), APPLICATION_NAME, "0.1.0")),
        ))
    }

    #[tokio::test]
    async fn test_trailing_slash_is_trimmed() {
        for uri in ["/api/health", "/api/health/"] {
            let response = test_app()
                .oneshot(Request::get(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
        }

        let response = test_app()
            .oneshot(
                Request::post("/api/shorten/")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"long-url": "https://example.com"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = test_app()
            .oneshot(Request::get("/api/unknown").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
