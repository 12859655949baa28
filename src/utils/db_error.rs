//! SQLx error inspection helpers.

/// Name PostgreSQL gives the primary key constraint of the `links` table.
const LINKS_PRIMARY_KEY: &str = "links_pkey";

/// Returns true if `e` is a unique violation on the `links` primary key.
pub fn is_primary_key_violation(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(LINKS_PRIMARY_KEY) | None)
}
