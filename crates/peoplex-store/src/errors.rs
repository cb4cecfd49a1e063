//! Error handling for peoplex-store
//!
//! Wraps peoplex-core ExError with store-specific helpers

use peoplex_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::ConstraintViolation)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a database error from rusqlite::Error
///
/// SQLite constraint failures (foreign key, NOT NULL, UNIQUE) become
/// `ConstraintViolation`; everything else is `Persistence`.
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    let kind = match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            ExErrorKind::ConstraintViolation
        }
        _ => ExErrorKind::Persistence,
    };

    ExError::new(kind)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_error_maps_to_persistence() {
        let err = from_rusqlite(rusqlite::Error::QueryReturnedNoRows);
        assert_eq!(err.kind(), ExErrorKind::Persistence);
        assert_eq!(err.op(), Some("sqlite"));
    }

    #[test]
    fn test_checksum_mismatch_names_migration() {
        let err = checksum_mismatch("001_initial_schema", "aa", "bb");
        assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
        assert!(err.message().contains("001_initial_schema"));
    }
}
