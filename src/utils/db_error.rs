//! Classification of database errors.

/// Primary key constraint on `url_data.short_code`.
pub const SHORT_CODE_CONSTRAINT: &str = "url_data_pkey";

/// Returns true when `e` is a unique violation on the short code column.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SHORT_CODE_CONSTRAINT))
}
