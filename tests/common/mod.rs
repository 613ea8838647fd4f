#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use url_shortener_api::application::services::{HealthService, UrlService};
use url_shortener_api::application::services::health_service::APPLICATION_NAME;
use url_shortener_api::infrastructure::persistence::{
    PgHealthRepository, PgUrlRepository, QueryStore,
};
use url_shortener_api::api::routes::routes;
use url_shortener_api::state::AppState;

pub const TEST_VERSION: &str = "0.1.0-test";

/// Query store pointing at the crate's SQL files regardless of the test's
/// working directory.
pub fn query_store() -> QueryStore {
    QueryStore::new(concat!(env!("CARGO_MANIFEST_DIR"), "/sql/postgresql"))
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);
    let queries = query_store();

    let url_repo = Arc::new(PgUrlRepository::new(pool.clone(), queries.clone()));
    let health_repo = Arc::new(PgHealthRepository::new(pool, queries));

    AppState::new(
        Arc::new(UrlService::with_defaults(url_repo)),
        Arc::new(HealthService::new(health_repo, APPLICATION_NAME, TEST_VERSION)),
    )
}

pub fn create_test_server(pool: PgPool) -> TestServer {
    let app = Router::new()
        .nest("/api", routes())
        .with_state(create_test_state(pool));

    TestServer::new(app).unwrap()
}

pub async fn create_test_record(pool: &PgPool, code: &str, url: &str, hash: &str) {
    sqlx::query(
        "INSERT INTO url_data (short_code, long_url, long_url_hash) VALUES ($1, $2, $3)",
    )
    .bind(code)
    .bind(url)
    .bind(hash)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn count_records(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url_data")
        .fetch_one(pool)
        .await
        .unwrap()
}
