//! Repository trait for database health information.

use crate::domain::entities::DatabaseInfo;
use crate::error::RepositoryError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthRepository: Send + Sync {
    /// Queries the database for its name and version.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if the query file is missing or the
    /// database cannot be reached.
    async fn get_database_info(&self) -> Result<DatabaseInfo, RepositoryError>;
}
