//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError`
//! from `vernissage_core::storage`. Specific errors are mapped to semantic
//! variants (e.g., UNIQUE constraint to AlreadyExists).

use vernissage_core::storage::RepositoryError;

/// Maps a rusqlite error with a known ID to a RepositoryError.
///
/// # Error Mapping
///
/// - `SQLITE_CONSTRAINT_UNIQUE` / `_PRIMARYKEY` -> `AlreadyExists`
/// - `SQLITE_CONSTRAINT_FOREIGNKEY` / `_TRIGGER` -> `InvalidData`
/// - Cannot-open errors -> `ConnectionFailed`
/// - `QueryReturnedNoRows` -> `NotFound`
/// - All other errors -> `QueryFailed`
fn map_rusqlite_error_with_id(
    err: &rusqlite::Error,
    entity_type: &'static str,
    id: &str,
) -> RepositoryError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                || sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY =>
        {
            RepositoryError::AlreadyExists {
                entity_type,
                id: id.to_string(),
            }
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY
                || sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_TRIGGER =>
        {
            RepositoryError::InvalidData(format!(
                "Foreign key constraint violation for {entity_type}"
            ))
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
            entity_type,
            id: id.to_string(),
        },

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error with a known ID to a RepositoryError.
pub fn map_tokio_rusqlite_error_with_id(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
    id: String,
) -> RepositoryError {
    match err {
        tokio_rusqlite::Error::Rusqlite(e) => map_rusqlite_error_with_id(&e, entity_type, &id),
        tokio_rusqlite::Error::ConnectionClosed => {
            RepositoryError::ConnectionFailed("Connection closed".to_string())
        }
        other => RepositoryError::QueryFailed(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_rows_maps_to_not_found() {
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::QueryReturnedNoRows);
        let mapped = map_tokio_rusqlite_error_with_id(err, "Painting", "abc".to_string());
        assert_eq!(
            mapped,
            RepositoryError::NotFound {
                entity_type: "Painting",
                id: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_unique_violation_maps_to_already_exists() {
        let sqlite_err = rusqlite::ffi::Error {
            code: rusqlite::ErrorCode::ConstraintViolation,
            extended_code: rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE,
        };
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, None));
        let mapped = map_tokio_rusqlite_error_with_id(err, "AdminUser", "curator".to_string());
        assert_eq!(
            mapped,
            RepositoryError::AlreadyExists {
                entity_type: "AdminUser",
                id: "curator".to_string()
            }
        );
    }

    #[test]
    fn test_foreign_key_violation_maps_to_invalid_data() {
        let sqlite_err = rusqlite::ffi::Error {
            code: rusqlite::ErrorCode::ConstraintViolation,
            extended_code: rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY,
        };
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, None));
        let mapped = map_tokio_rusqlite_error_with_id(err, "Artist", "abc".to_string());
        assert!(matches!(mapped, RepositoryError::InvalidData(_)));
    }

    #[test]
    fn test_connection_closed_maps_to_connection_failed() {
        let mapped = map_tokio_rusqlite_error_with_id(
            tokio_rusqlite::Error::ConnectionClosed,
            "Order",
            "abc".to_string(),
        );
        assert!(matches!(mapped, RepositoryError::ConnectionFailed(_)));
    }
}
