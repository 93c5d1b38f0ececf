use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::services::PagePolicy;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Server settings, read from an optional YAML file. Every key may be omitted.
///
/// ```yaml
/// port: 8080
/// database: /var/lib/thebox/thebox.db
/// cors_origin: https://thebox.example.com
/// playground: false
/// pagination:
///   max_limit: 200
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    /// SQLite file path, `:memory:`, or a full database URL
    pub database: String,
    pub cors_origin: Option<String>,
    /// Serve the GraphQL playground on `GET /graphql`
    pub playground: bool,
    pub pagination: PaginationConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct PaginationConfig {
    pub max_limit: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            database: "thebox.db".to_string(),
            cors_origin: None,
            playground: true,
            pagination: PaginationConfig::default(),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            max_limit: PagePolicy::DEFAULT_MAX_LIMIT,
        }
    }
}

impl ServerConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn page_policy(&self) -> PagePolicy {
        PagePolicy::new(self.pagination.max_limit)
    }
}
