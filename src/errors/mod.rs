//! Error types shared by the services and the GraphQL layer.
//!
//! Services return [`ApiError`]; resolvers convert it into a GraphQL error
//! carrying an `extensions.code` through [`ToGraphQLError`] / [`ResultExt`].
//!
//! ```rust
//! use thebox::errors::ApiError;
//!
//! let err = ApiError::not_found("Team", "a1b2");
//! assert_eq!(err.error_code(), "NOT_FOUND");
//! assert!(err.is_not_found());
//! ```

pub mod common;
pub mod db_errors;

pub use common::{ResultExt, ToGraphQLError};
pub use db_errors::DbErrorKind;

use sea_orm::DbErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// No record matched the lookup key
    #[error("{entity} '{key}' not found")]
    NotFound { entity: &'static str, key: String },

    /// Failure reported by the database or the ORM
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    /// The record exists but is missing data the operation depends on
    #[error("Precondition failed: {0}")]
    Precondition(String),

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

impl ApiError {
    pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        ApiError::NotFound {
            entity,
            key: key.into(),
        }
    }

    pub fn precondition(message: impl Into<String>) -> Self {
        ApiError::Precondition(message.into())
    }

    /// Machine readable code placed in the GraphQL error extensions
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Database(err) => DbErrorKind::from_db_err(err).error_code(),
            ApiError::Precondition(_) => "PRECONDITION_FAILED",
            ApiError::NotImplemented(_) => "NOT_IMPLEMENTED",
        }
    }

    pub fn is_not_found(&self) -> bool {
        match self {
            ApiError::NotFound { .. } => true,
            ApiError::Database(err) => DbErrorKind::from_db_err(err) == DbErrorKind::NotFound,
            _ => false,
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            ApiError::Database(err) if DbErrorKind::from_db_err(err) == DbErrorKind::UniqueViolation
        )
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
