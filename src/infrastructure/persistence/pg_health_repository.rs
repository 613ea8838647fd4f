//! PostgreSQL implementation of the health repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::query_store::{QueryStore, SqlQuery};
use crate::domain::entities::DatabaseInfo;
use crate::domain::repositories::HealthRepository;
use crate::error::RepositoryError;

pub struct PgHealthRepository {
    pool: Arc<PgPool>,
    queries: QueryStore,
}

impl PgHealthRepository {
    pub fn new(pool: Arc<PgPool>, queries: QueryStore) -> Self {
        Self { pool, queries }
    }
}

#[async_trait]
impl HealthRepository for PgHealthRepository {
    async fn get_database_info(&self) -> Result<DatabaseInfo, RepositoryError> {
        let sql = self.queries.load(SqlQuery::GetDatabaseInformation).await?;

        let banner = sqlx::query_scalar::<_, String>(&sql)
            .fetch_optional(self.pool.as_ref())
            .await?;

        let info = match banner {
            Some(banner) => DatabaseInfo::from_version_string(&banner),
            None => {
                tracing::warn!("Database returned no version information");
                DatabaseInfo::unavailable()
            }
        };

        tracing::debug!(name = %info.name, version = %info.version, "Retrieved database information");
        Ok(info)
    }
}
