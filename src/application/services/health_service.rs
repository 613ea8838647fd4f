//! Application and dependency health reporting.

use std::sync::Arc;

use crate::domain::entities::{ComponentStatus, DatabaseInfo, HealthReport};
use crate::domain::repositories::HealthRepository;

/// Default application name reported at the root of the health tree.
pub const APPLICATION_NAME: &str = "URL-SHORTENER-REST-API";

/// Builds nested health reports for the application and its database.
pub struct HealthService {
    health_repository: Arc<dyn HealthRepository>,
    application_name: String,
    application_version: String,
}

impl HealthService {
    pub fn new(
        health_repository: Arc<dyn HealthRepository>,
        application_name: impl Into<String>,
        application_version: impl Into<String>,
    ) -> Self {
        Self {
            health_repository,
            application_name: application_name.into(),
            application_version: application_version.into(),
        }
    }

    /// Reports the application as UP with the database report as its only
    /// child.
    ///
    /// A serving process is considered alive; only the database is probed.
    pub async fn get_health(&self) -> HealthReport {
        let database = self.get_database_health().await;

        let report = HealthReport::new(
            self.application_name.as_str(),
            self.application_version.as_str(),
            ComponentStatus::Up,
        )
        .with_child(database);

        tracing::info!(
            status = %report.status,
            database = %report.children[0].status,
            "Generated health report"
        );
        report
    }

    /// Reports the database health.
    ///
    /// Never fails: any repository error yields a DOWN report named
    /// `DATABASE` with an empty version.
    pub async fn get_database_health(&self) -> HealthReport {
        match self.health_repository.get_database_info().await {
            Ok(info) => HealthReport::from(info),
            Err(e) => {
                tracing::error!(error = %e, "Unable to retrieve database information");
                HealthReport::from(DatabaseInfo::unavailable())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::health::UNKNOWN_DATABASE_NAME;
    use crate::domain::repositories::MockHealthRepository;
    use crate::error::RepositoryError;

    fn postgres_info() -> DatabaseInfo {
        DatabaseInfo {
            name: "PostgreSQL".to_string(),
            version: "16.2".to_string(),
            connectivity: ComponentStatus::Up,
        }
    }

    fn service(repo: MockHealthRepository) -> HealthService {
        HealthService::new(Arc::new(repo), APPLICATION_NAME, "1.2.3")
    }

    #[tokio::test]
    async fn test_database_health_up() {
        let mut mock_repo = MockHealthRepository::new();
        mock_repo
            .expect_get_database_info()
            .times(1)
            .returning(|| Ok(postgres_info()));

        let report = service(mock_repo).get_database_health().await;

        assert_eq!(report.status, ComponentStatus::Up);
        assert_eq!(report.component_name, "PostgreSQL");
        assert_eq!(report.component_version, "16.2");
        assert!(report.children.is_empty());
    }

    #[tokio::test]
    async fn test_database_health_down_on_database_error() {
        let mut mock_repo = MockHealthRepository::new();
        mock_repo
            .expect_get_database_info()
            .times(1)
            .returning(|| Err(RepositoryError::Database(sqlx::Error::PoolTimedOut)));

        let report = service(mock_repo).get_database_health().await;

        assert_eq!(report.status, ComponentStatus::Down);
        assert_eq!(report.component_name, UNKNOWN_DATABASE_NAME);
        assert_eq!(report.component_version, "");
    }

    #[tokio::test]
    async fn test_database_health_down_on_missing_query_file() {
        let mut mock_repo = MockHealthRepository::new();
        mock_repo.expect_get_database_info().times(1).returning(|| {
            Err(RepositoryError::QueryFileNotFound {
                path: "sql/postgresql/get_database_information.sql".to_string(),
            })
        });

        let report = service(mock_repo).get_database_health().await;

        assert_eq!(report.status, ComponentStatus::Down);
        assert_eq!(report.component_name, UNKNOWN_DATABASE_NAME);
    }

    #[tokio::test]
    async fn test_database_reported_down_by_repository() {
        let mut mock_repo = MockHealthRepository::new();
        mock_repo
            .expect_get_database_info()
            .times(1)
            .returning(|| Ok(DatabaseInfo::unavailable()));

        let report = service(mock_repo).get_database_health().await;
        assert_eq!(report.status, ComponentStatus::Down);
    }

    #[tokio::test]
    async fn test_health_nests_database_report() {
        let mut mock_repo = MockHealthRepository::new();
        mock_repo
            .expect_get_database_info()
            .times(1)
            .returning(|| Ok(postgres_info()));

        let report = service(mock_repo).get_health().await;

        assert_eq!(report.status, ComponentStatus::Up);
        assert_eq!(report.component_name, APPLICATION_NAME);
        assert_eq!(report.component_version, "1.2.3");
        assert_eq!(report.children.len(), 1);
        assert_eq!(report.children[0].component_name, "PostgreSQL");
        assert_eq!(report.children[0].status, ComponentStatus::Up);
    }

    #[tokio::test]
    async fn test_application_up_when_database_down() {
        let mut mock_repo = MockHealthRepository::new();
        mock_repo
            .expect_get_database_info()
            .times(1)
            .returning(|| Err(RepositoryError::Database(sqlx::Error::PoolClosed)));

        let report = service(mock_repo).get_health().await;

        assert!(report.is_up());
        assert_eq!(report.children[0].status, ComponentStatus::Down);
    }
}
