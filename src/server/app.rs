use anyhow::{anyhow, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{graphql, health};
use crate::config::ServerConfig;
use crate::graphql::{build_schema, GraphQLSchema};

#[derive(Clone)]
pub struct AppState {
    pub schema: GraphQLSchema,
    pub playground: bool,
}

pub async fn create_app(db: DatabaseConnection, config: &ServerConfig) -> Result<Router> {
    let state = AppState {
        schema: build_schema(db, config.page_policy()),
        playground: config.playground,
    };

    let cors = match config.cors_origin.as_deref() {
        Some(origin) => CorsLayer::new().allow_origin(
            origin
                .parse::<HeaderValue>()
                .map_err(|e| anyhow!("Invalid CORS origin: {}", e))?,
        ),
        None => CorsLayer::new().allow_origin(Any),
    }
    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
    .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/graphql",
            get(graphql::graphql_playground).post(graphql::graphql_handler),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state);

    Ok(app)
}
