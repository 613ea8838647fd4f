//! Loading of parameterized SQL queries from text files.

use std::path::PathBuf;

use crate::error::RepositoryError;

/// Default directory holding the PostgreSQL query files.
pub const DEFAULT_QUERY_DIR: &str = "sql/postgresql";

/// Queries used by the repositories, one file each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlQuery {
    FindShortCodeByLongUrlHash,
    InsertUrlRecord,
    GetDatabaseInformation,
}

impl SqlQuery {
    pub fn file_name(self) -> &'static str {
        match self {
            SqlQuery::FindShortCodeByLongUrlHash => "find_short_code_by_long_url_hash.sql",
            SqlQuery::InsertUrlRecord => "insert_url_record.sql",
            SqlQuery::GetDatabaseInformation => "get_database_information.sql",
        }
    }
}

/// Reads query text from a directory on every call.
///
/// Queries are not cached, so editing a file takes effect on the next
/// request and a missing file fails only the requests that need it.
#[derive(Debug, Clone)]
pub struct QueryStore {
    dir: PathBuf,
}

impl QueryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Loads the text of `query`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::QueryFileNotFound`] if the file cannot be read.
    pub async fn load(&self, query: SqlQuery) -> Result<String, RepositoryError> {
        let path = self.dir.join(query.file_name());
        tracing::debug!(path = %path.display(), "Loading SQL query");

        tokio::fs::read_to_string(&path).await.map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "SQL query file not readable");
            RepositoryError::QueryFileNotFound {
                path: path.display().to_string(),
            }
        })
    }
}

impl Default for QueryStore {
    fn default() -> Self {
        Self::new(DEFAULT_QUERY_DIR)
    }
}
