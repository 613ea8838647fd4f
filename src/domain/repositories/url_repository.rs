//! Repository trait for short code mappings.

use crate::domain::entities::UrlRecord;
use crate::error::RepositoryError;
use async_trait::async_trait;

/// Persistence boundary for [`UrlRecord`]s.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Finds the short code stored for a long URL hash.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::QueryFileNotFound`] if the query cannot be
    /// loaded and [`RepositoryError::Database`] on database errors.
    async fn find_short_code_by_hash(
        &self,
        long_url_hash: &str,
    ) -> Result<Option<String>, RepositoryError>;

    /// Inserts a new record.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::ShortCodeConflict`] if the short code is
    /// already taken, [`RepositoryError::QueryFileNotFound`] if the query
    /// cannot be loaded and [`RepositoryError::Database`] on any other
    /// database error.
    async fn insert(&self, record: UrlRecord) -> Result<(), RepositoryError>;
}
