//! Domain layer containing business entities and repository contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; repository traits are implemented by the infrastructure layer and
//! consumed by [`crate::application::services`].

pub mod entities;
pub mod repositories;
