//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization; every response body is wrapped
//! in [`envelope::ApplicationResponse`].

pub mod envelope;
pub mod health;
pub mod shorten;
