//! Database error categorisation
//!
//! Maps a `sea_orm::DbErr` onto the small set of outcomes the API reports to
//! clients.

use sea_orm::{DbErr, SqlErr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbErrorKind {
    /// Record not found (query returned no results)
    NotFound,

    /// Unique constraint violation, the resource already exists
    UniqueViolation,

    /// Foreign key constraint violation, a referenced row is missing
    ForeignKeyViolation,

    /// The database could not be reached or no pooled connection was free
    ConnectionError,

    Unknown,
}

impl DbErrorKind {
    /// Categorize a sea_orm database error
    ///
    /// Driver errors are classified through `DbErr::sql_err`; errors that only
    /// carry a message fall back to inspecting its text.
    ///
    /// ```
    /// use thebox::errors::DbErrorKind;
    /// use sea_orm::DbErr;
    ///
    /// let err = DbErr::RecordNotFound("users".to_string());
    /// assert_eq!(DbErrorKind::from_db_err(&err), DbErrorKind::NotFound);
    /// ```
    pub fn from_db_err(err: &DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => return Self::UniqueViolation,
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => return Self::ForeignKeyViolation,
            _ => {}
        }

        match err {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => Self::NotFound,
            DbErr::Conn(_) => Self::ConnectionError,
            DbErr::Exec(_) | DbErr::Query(_) => Self::from_message(&err.to_string()),
            other => {
                let msg = other.to_string().to_lowercase();
                if msg.contains("acquire") || msg.contains("connection") {
                    Self::ConnectionError
                } else {
                    Self::Unknown
                }
            }
        }
    }

    fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();
        if msg_lower.contains("unique") || msg_lower.contains("duplicate") {
            Self::UniqueViolation
        } else if msg_lower.contains("foreign key") || msg_lower.contains("fk_") {
            Self::ForeignKeyViolation
        } else if msg_lower.contains("database is locked") || msg_lower.contains("busy") {
            // SQLite gave up waiting for the write lock; the request can be retried.
            Self::ConnectionError
        } else {
            Self::Unknown
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::UniqueViolation => "CONFLICT",
            Self::ForeignKeyViolation => "INVALID_REFERENCE",
            Self::ConnectionError => "UNAVAILABLE",
            Self::Unknown => "DATABASE_ERROR",
        }
    }

    /// Get appropriate HTTP status code for this error kind
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::UniqueViolation => 409,
            Self::ForeignKeyViolation => 400,
            Self::ConnectionError => 503,
            Self::Unknown => 500,
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound | Self::UniqueViolation | Self::ForeignKeyViolation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::RuntimeErr;

    fn query_err(msg: &str) -> DbErr {
        DbErr::Query(RuntimeErr::Internal(msg.to_string()))
    }

    #[test]
    fn test_categorize_record_not_found() {
        let kind = DbErrorKind::from_db_err(&DbErr::RecordNotFound("teams".to_string()));
        assert_eq!(kind, DbErrorKind::NotFound);
        assert_eq!(kind.http_status_code(), 404);
        assert_eq!(kind.error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_categorize_unique_violation() {
        let kind = DbErrorKind::from_db_err(&query_err("UNIQUE constraint failed: users.email"));
        assert_eq!(kind, DbErrorKind::UniqueViolation);
        assert_eq!(kind.error_code(), "CONFLICT");
    }

    #[test]
    fn test_categorize_foreign_key_violation() {
        let err = DbErr::Exec(RuntimeErr::Internal(
            "FOREIGN KEY constraint failed".to_string(),
        ));
        let kind = DbErrorKind::from_db_err(&err);
        assert_eq!(kind, DbErrorKind::ForeignKeyViolation);
        assert_eq!(kind.error_code(), "INVALID_REFERENCE");
        assert!(kind.is_client_error());
    }

    #[test]
    fn test_categorize_connection_error() {
        let err = DbErr::Conn(RuntimeErr::Internal("Connection refused".to_string()));
        let kind = DbErrorKind::from_db_err(&err);
        assert_eq!(kind, DbErrorKind::ConnectionError);
        assert_eq!(kind.http_status_code(), 503);
        assert!(!kind.is_client_error());
    }

    #[test]
    fn test_categorize_locked_database() {
        let kind = DbErrorKind::from_db_err(&query_err(
            "error returned from database: (code: 5) database is locked",
        ));
        assert_eq!(kind, DbErrorKind::ConnectionError);
        assert_eq!(kind.error_code(), "UNAVAILABLE");
    }

    #[test]
    fn test_unknown_errors_are_server_errors() {
        let kind = DbErrorKind::from_db_err(&query_err("disk I/O error"));
        assert_eq!(kind, DbErrorKind::Unknown);
        assert_eq!(kind.error_code(), "DATABASE_ERROR");
        assert_eq!(kind.http_status_code(), 500);
    }
}
