use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::server::app::AppState;

pub async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    let request = req.into_inner();
    tracing::debug!(operation = ?request.operation_name, "GraphQL request received");
    let response = state.schema.execute(request).await;
    if response.is_err() {
        tracing::debug!(errors = response.errors.len(), "GraphQL request completed with errors");
    }
    response.into()
}

pub async fn graphql_playground(State(state): State<AppState>) -> Response {
    if !state.playground {
        return StatusCode::NOT_FOUND.into_response();
    }

    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql"))).into_response()
}
