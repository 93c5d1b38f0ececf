use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use thebox::config::ServerConfig;
use thebox::{graphql, server};
use tracing::info;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    /// YAML server configuration
    #[clap(short, long, global = true)]
    config: Option<PathBuf>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the GraphQL API server
    Serve {
        #[clap(short, long)]
        port: Option<u16>,
        #[clap(short, long)]
        database: Option<String>,
        #[clap(long)]
        cors_origin: Option<String>,
    },
    Db {
        #[clap(subcommand)]
        command: DbCommands,
    },
    /// Print the GraphQL schema in SDL form
    Schema,
}

#[derive(Subcommand, Debug)]
enum DbCommands {
    Init {
        #[clap(short, long)]
        database: Option<String>,
    },
    Migrate {
        #[clap(subcommand)]
        direction: server::MigrateDirection,
        #[clap(short, long)]
        database: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logging(&args.log_level);

    let mut config = ServerConfig::load_or_default(args.config.as_deref())?;

    match args.command {
        Commands::Serve {
            port,
            database,
            cors_origin,
        } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(database) = database {
                config.database = database;
            }
            if cors_origin.is_some() {
                config.cors_origin = cors_origin;
            }

            info!("Starting server on port {}", config.port);
            server::start_server(&config).await?;
        }
        Commands::Db { command } => match command {
            DbCommands::Init { database } => {
                let database = database.unwrap_or(config.database);
                server::init_database(&database).await?;
            }
            DbCommands::Migrate {
                direction,
                database,
            } => {
                let database = database.unwrap_or(config.database);
                server::migrate_database(&database, direction).await?;
            }
        },
        Commands::Schema => {
            println!("{}", graphql::schema::schema_sdl());
        }
    }

    Ok(())
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_deref()
        .unwrap_or("info")
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sqlx=warn,{}", log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .init();
}
