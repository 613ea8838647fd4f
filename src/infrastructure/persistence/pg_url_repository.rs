//! PostgreSQL implementation of the url repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::query_store::{QueryStore, SqlQuery};
use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::RepositoryError;
use crate::utils::db_error::is_unique_violation_on_code;

/// PostgreSQL repository for short code mappings.
///
/// Query text comes from the [`QueryStore`]; all values are bound as
/// parameters.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
    queries: QueryStore,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>, queries: QueryStore) -> Self {
        Self { pool, queries }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn find_short_code_by_hash(
        &self,
        long_url_hash: &str,
    ) -> Result<Option<String>, RepositoryError> {
        let sql = self.queries.load(SqlQuery::FindShortCodeByLongUrlHash).await?;

        let code = sqlx::query_scalar::<_, String>(&sql)
            .bind(long_url_hash)
            .fetch_optional(self.pool.as_ref())
            .await?;

        tracing::debug!(long_url_hash, found = code.is_some(), "Looked up short code");
        Ok(code)
    }

    async fn insert(&self, record: UrlRecord) -> Result<(), RepositoryError> {
        let sql = self.queries.load(SqlQuery::InsertUrlRecord).await?;

        sqlx::query(&sql)
            .bind(&record.short_code)
            .bind(&record.long_url)
            .bind(&record.long_url_hash)
            .bind(record.created_at)
            .bind(record.last_used_at)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_unique_violation_on_code(&e) {
                    RepositoryError::ShortCodeConflict {
                        code: record.short_code.clone(),
                    }
                } else {
                    RepositoryError::Database(e)
                }
            })?;

        tracing::info!(
            short_code = %record.short_code,
            long_url = %record.long_url,
            "Inserted url record"
        );
        Ok(())
    }
}
