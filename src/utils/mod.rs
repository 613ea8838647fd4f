//! Utility functions for hashing, code generation, and request validation.
//!
//! - [`hasher`] - Long URL digests used as the deduplication key
//! - [`code_generator`] - Random short code generation with a date suffix
//! - [`url_validator`] - Long URL syntax validation
//! - [`timestamp`] - Response timestamp formatting
//! - [`db_error`] - Classification of database errors

pub mod code_generator;
pub mod db_error;
pub mod hasher;
pub mod timestamp;
pub mod url_validator;
