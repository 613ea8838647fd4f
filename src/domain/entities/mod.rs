//! Core domain entities.
//!
//! - [`UrlRecord`] - A persisted short code mapping
//! - [`DatabaseInfo`] - Transient database name/version/connectivity
//! - [`HealthReport`] - Nested health status tree

pub mod health;
pub mod url_record;

pub use health::{ComponentStatus, DatabaseInfo, HealthReport};
pub use url_record::UrlRecord;
