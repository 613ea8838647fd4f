mod common;

use sqlx::PgPool;
use url_shortener_api::application::services::health_service::APPLICATION_NAME;

#[sqlx::test]
async fn test_health_endpoint_success(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server.get("/api/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let data = &json["response-data"];
    assert_eq!(data["application-name"], APPLICATION_NAME);
    assert_eq!(data["application-version"], common::TEST_VERSION);
    assert_eq!(data["application-status"], "UP");

    let database = &data["connected-services-health"][0];
    assert_eq!(database["application-name"], "PostgreSQL");
    assert_eq!(database["application-status"], "UP");
    assert!(!database["application-version"].as_str().unwrap().is_empty());
}

#[sqlx::test]
async fn test_health_endpoint_structure(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server.get("/api/health").await;

    let json = response.json::<serde_json::Value>();
    assert!(json.get("response-timestamp").is_some());

    let data = &json["response-data"];
    assert!(data.get("health-check-timestamp").is_some());
    assert!(data.get("application-name").is_some());
    assert!(data.get("application-version").is_some());
    assert!(data.get("application-status").is_some());

    let children = data["connected-services-health"].as_array().unwrap();
    assert_eq!(children.len(), 1);
    assert!(children[0]["connected-services-health"].as_array().unwrap().is_empty());
}

#[sqlx::test]
async fn test_health_database_down_when_pool_closed(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    pool.close().await;

    let report = state.health_service.get_health().await;

    assert!(report.is_up());
    assert_eq!(report.children[0].component_name, "DATABASE");
    assert_eq!(report.children[0].component_version, "");
    assert!(!report.children[0].is_up());
}
