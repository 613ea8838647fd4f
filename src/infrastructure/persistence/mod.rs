//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! query text loaded from files by [`QueryStore`].
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - Short code lookup and insertion
//! - [`PgHealthRepository`] - Database name and version

pub mod pg_health_repository;
pub mod pg_url_repository;
pub mod query_store;

pub use pg_health_repository::PgHealthRepository;
pub use pg_url_repository::PgUrlRepository;
pub use query_store::{QueryStore, SqlQuery};
