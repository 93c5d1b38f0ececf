pub mod app;
pub mod handlers;

use anyhow::Result;
use clap::Subcommand;
use sea_orm::DatabaseConnection;
use sea_orm_migration::prelude::*;
use tracing::info;

use crate::config::ServerConfig;
use crate::database::{connection::*, migrations::Migrator};

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum MigrateDirection {
    /// Apply pending migrations
    Up,
    /// Roll back every migration
    Down,
    /// Drop everything and migrate from scratch
    Fresh,
}

pub async fn connect(database: &str) -> Result<DatabaseConnection> {
    let database_url = get_database_url(Some(database));
    info!("Connecting to {}", redact_url(&database_url));
    Ok(establish_connection(&database_url).await?)
}

pub async fn start_server(config: &ServerConfig) -> Result<()> {
    let db = connect(&config.database).await?;

    Migrator::up(&db, None).await?;
    info!("Database migrations completed");

    let app = app::create_app(db, config).await?;

    log_routes(config);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    info!("Server running on http://0.0.0.0:{}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}

fn log_routes(config: &ServerConfig) {
    info!("API Endpoints:");
    info!("  GET  /health                - Health check");
    info!("  POST /graphql               - GraphQL API");
    if config.playground {
        info!("  GET  /graphql               - GraphQL Playground");
    }
    info!(
        "Pagination limit capped at {}",
        config.pagination.max_limit
    );
}

pub async fn init_database(database: &str) -> Result<()> {
    let db = connect(database).await?;
    Migrator::up(&db, None).await?;
    info!("Database initialised");
    Ok(())
}

pub async fn migrate_database(database: &str, direction: MigrateDirection) -> Result<()> {
    let db = connect(database).await?;

    match direction {
        MigrateDirection::Up => {
            info!("Running migrations up");
            Migrator::up(&db, None).await?;
        }
        MigrateDirection::Down => {
            info!("Running migrations down");
            Migrator::down(&db, None).await?;
        }
        MigrateDirection::Fresh => {
            info!("Running fresh migrations (down then up)");
            Migrator::down(&db, None).await?;
            Migrator::up(&db, None).await?;
        }
    }

    info!("Database migration completed");
    Ok(())
}

/// Hide credentials embedded in a database URL before logging it.
fn redact_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***{}", &url[..scheme_end], &url[at..])
        }
        _ => url.to_string(),
    }
}
