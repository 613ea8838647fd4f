//! Short code creation service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::{AppError, RepositoryError};
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code};
use crate::utils::hasher::HashAlgorithm;

/// Total insert attempts when generated short codes collide.
const MAX_INSERT_ATTEMPTS: usize = 3;

/// Service creating or looking up short codes for long URLs.
///
/// Repeat requests for the same long URL are idempotent: the long URL hash is
/// looked up first, and only unseen URLs get a freshly generated code.
pub struct UrlService {
    url_repository: Arc<dyn UrlRepository>,
    hash_algorithm: HashAlgorithm,
    code_length: usize,
}

impl UrlService {
    /// Creates a new url service.
    pub fn new(
        url_repository: Arc<dyn UrlRepository>,
        hash_algorithm: HashAlgorithm,
        code_length: usize,
    ) -> Self {
        Self {
            url_repository,
            hash_algorithm,
            code_length,
        }
    }

    /// Creates a service with sha256 hashing and the default code length.
    pub fn with_defaults(url_repository: Arc<dyn UrlRepository>) -> Self {
        Self::new(url_repository, HashAlgorithm::default(), DEFAULT_CODE_LENGTH)
    }

    /// Returns the short code for `long_url`, creating one if needed.
    ///
    /// # Deduplication
    ///
    /// If a record with the same long URL hash exists, its code is returned
    /// and nothing is written.
    ///
    /// # Code Generation
    ///
    /// New codes are `code_length` random characters plus a `DDMMYY` date
    /// suffix. If the insert hits an existing short code, a new code is
    /// generated, up to 3 attempts in total.
    ///
    /// The lookup and the insert are separate statements, so two concurrent
    /// first-time requests for one long URL can both insert.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on any repository failure or when every
    /// insert attempt collides.
    pub async fn create_short_url(&self, long_url: &str) -> Result<String, AppError> {
        let long_url_hash = self.hash_algorithm.digest_hex(long_url);

        if let Some(existing) = self
            .url_repository
            .find_short_code_by_hash(&long_url_hash)
            .await?
        {
            tracing::info!(short_code = %existing, "Found existing short code");
            return Ok(existing);
        }

        let mut record = UrlRecord::new(
            generate_code(self.code_length),
            long_url.to_string(),
            long_url_hash,
        );

        for attempt in 1..=MAX_INSERT_ATTEMPTS {
            let short_code = record.short_code.clone();

            match self.url_repository.insert(record.clone()).await {
                Ok(()) => {
                    tracing::info!(%short_code, "Created short code");
                    return Ok(short_code);
                }
                Err(RepositoryError::ShortCodeConflict { code }) => {
                    tracing::warn!(%code, attempt, "Short code collision, regenerating");
                    record = record.with_short_code(generate_code(self.code_length));
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique short code",
            json!({ "reason": "Too many collisions", "attempts": MAX_INSERT_ATTEMPTS }),
        ))
    }
}
