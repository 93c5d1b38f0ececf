//! GraphQL conversion for [`ApiError`]

use async_graphql::{Error as GraphQLError, ErrorExtensions};

use super::{ApiError, DbErrorKind};

/// Convert domain errors to GraphQL errors with error codes
pub trait ToGraphQLError {
    fn to_graphql_error(&self) -> GraphQLError;
}

impl ToGraphQLError for ApiError {
    fn to_graphql_error(&self) -> GraphQLError {
        let code = self.error_code();
        let message = self.to_string();

        GraphQLError::new(message).extend_with(|_, e| {
            e.set("code", code);

            match self {
                ApiError::NotFound { entity, key } => {
                    e.set("entity", *entity);
                    e.set("key", key.as_str());
                }
                ApiError::Database(err) => {
                    e.set("statusCode", DbErrorKind::from_db_err(err).http_status_code());
                }
                ApiError::NotImplemented(feature) => {
                    e.set("feature", *feature);
                }
                ApiError::Precondition(_) => {}
            }
        })
    }
}

/// Lifts a service result into a resolver result
pub trait ResultExt<T> {
    fn to_graphql_result(self) -> async_graphql::Result<T>;
}

impl<T> ResultExt<T> for Result<T, ApiError> {
    fn to_graphql_result(self) -> async_graphql::Result<T> {
        self.map_err(|e| e.to_graphql_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::Value;

    fn code_of(err: &GraphQLError) -> Option<Value> {
        err.extensions.as_ref().and_then(|ext| ext.get("code").cloned())
    }

    #[test]
    fn test_not_found_extensions() {
        let err = ApiError::not_found("Team", "t-1").to_graphql_error();
        assert_eq!(err.message, "Team 't-1' not found");
        assert_eq!(code_of(&err), Some(Value::from("NOT_FOUND")));
        let entity = err.extensions.as_ref().and_then(|ext| ext.get("entity").cloned());
        assert_eq!(entity, Some(Value::from("Team")));
    }

    #[test]
    fn test_result_ext_keeps_ok_values() {
        let ok: Result<u64, ApiError> = Ok(4);
        assert_eq!(ok.to_graphql_result().ok(), Some(4));

        let err: Result<u64, ApiError> = Err(ApiError::NotImplemented("battlegroundRound"));
        let gql = err.to_graphql_result().unwrap_err();
        assert_eq!(code_of(&gql), Some(Value::from("NOT_IMPLEMENTED")));
    }
}
