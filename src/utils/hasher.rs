//! Deterministic digests of long URLs.
//!
//! The digest is the deduplication key for shortened URLs: the same long URL
//! always produces the same hex string for a given algorithm.

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha224,
    #[default]
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// Looks up an algorithm by name (`md5`, `sha1`, `sha224`, `sha256`,
    /// `sha384`, `sha512`), ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "md5" => Some(Self::Md5),
            "sha1" => Some(Self::Sha1),
            "sha224" => Some(Self::Sha224),
            "sha256" => Some(Self::Sha256),
            "sha384" => Some(Self::Sha384),
            "sha512" => Some(Self::Sha512),
            _ => None,
        }
    }

    /// Resolves an algorithm name, falling back to [`HashAlgorithm::Sha256`]
    /// when the name is not supported.
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }

    /// Returns the lowercase hex digest of `input`.
    pub fn digest_hex(self, input: &str) -> String {
        match self {
            Self::Md5 => hex_digest::<Md5>(input),
            Self::Sha1 => hex_digest::<Sha1>(input),
            Self::Sha224 => hex_digest::<Sha224>(input),
            Self::Sha256 => hex_digest::<Sha256>(input),
            Self::Sha384 => hex_digest::<Sha384>(input),
            Self::Sha512 => hex_digest::<Sha512>(input),
        }
    }
}

fn hex_digest<D: Digest>(input: &str) -> String {
    hex::encode(D::digest(input.as_bytes()))
}

/// Hashes `input` with the named algorithm.
///
/// Unsupported algorithm names silently fall back to sha256 so that a bad
/// configuration value never takes the shortening endpoint down.
///
/// # Examples
///
/// ```
/// use url_shortener_api::utils::hasher::hash_string;
///
/// assert_eq!(
///     hash_string("abc", "not-a-real-algorithm"),
///     hash_string("abc", "sha256"),
/// );
/// ```
pub fn hash_string(input: &str, algorithm: &str) -> String {
    HashAlgorithm::resolve(algorithm).digest_hex(input)
}
