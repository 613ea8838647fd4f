//! Short code generation.
//!
//! Codes are built from a random UUIDv4 and suffixed with the current date,
//! so they are independent of the long URL hash. Uniqueness is enforced by
//! the database primary key, not by construction.

use chrono::{Local, NaiveDate};
use rand::seq::IndexedRandom;
use uuid::Uuid;

/// Default number of random characters in a short code.
pub const DEFAULT_CODE_LENGTH: usize = 7;

/// Maximum random segment length (hex digits in a UUID without separators).
pub const MAX_CODE_LENGTH: usize = 32;

/// Length of the `DDMMYY` date suffix.
pub const DATE_SUFFIX_LENGTH: usize = 6;

/// Generates a short code of `length` random characters followed by today's
/// date as `DDMMYY`.
///
/// Characters are sampled without replacement from the 32 hex digits of a
/// fresh UUIDv4, so `length` is capped at [`MAX_CODE_LENGTH`].
///
/// # Examples
///
/// ```
/// use url_shortener_api::utils::code_generator::generate_code;
///
/// let code = generate_code(7);
/// assert_eq!(code.len(), 13);
/// ```
pub fn generate_code(length: usize) -> String {
    generate_code_for_date(length, Local::now().date_naive())
}

fn generate_code_for_date(length: usize, date: NaiveDate) -> String {
    let source: Vec<char> = Uuid::new_v4().simple().to_string().chars().collect();

    let mut code: String = source
        .choose_multiple(&mut rand::rng(), length.min(MAX_CODE_LENGTH))
        .collect();

    code.push_str(&date.format("%d%m%y").to_string());
    code
}
