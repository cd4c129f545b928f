use std::env;

use anyhow::{Context, Result};
use tracing::Level;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub database_url: String,
    pub db_max_connections: u32,

    /// Empty means any origin (`CORS_ALLOWED_ORIGINS=*`).
    pub cors_allowed_origins: Vec<String>,

    // Logging
    pub log_dir: String,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let db_max_connections = var("DB_MAX_CONNECTIONS", "5")
            .parse::<u32>()
            .context("DB_MAX_CONNECTIONS must be a positive integer")?;
        anyhow::ensure!(db_max_connections > 0, "DB_MAX_CONNECTIONS must be a positive integer");

        let log_level = var("LOG_LEVEL", "debug")
            .parse::<Level>()
            .context("LOG_LEVEL must be one of trace, debug, info, warn, error")?;

        let cors_allowed_origins = var("CORS_ALLOWED_ORIGINS", "*")
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>();
        let cors_allowed_origins = if cors_allowed_origins.iter().any(|o| o == "*") {
            Vec::new()
        } else {
            cors_allowed_origins
        };

        Ok(Self {
            server_addr: var("SERVER_ADDR", "127.0.0.1:8000"),
            database_url: var("DATABASE_URL", "sqlite://hrms.db"),
            db_max_connections,
            cors_allowed_origins,
            log_dir: var("LOG_DIR", "logs"),
            log_level,
        })
    }
}
