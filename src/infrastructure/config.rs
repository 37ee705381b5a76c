//! Application configuration

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite URL for save slots; saves stay in memory when unset
    pub database_url: Option<String>,

    /// Directory holding characters.json, events.json and items.json
    pub catalog_dir: PathBuf,

    /// HTTP server port
    pub server_port: u16,

    /// Seed for event selection; random when unset
    pub rng_seed: Option<u64>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),

            catalog_dir: env::var("CATALOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,

            rng_seed: env::var("RNG_SEED")
                .ok()
                .map(|seed| seed.parse())
                .transpose()
                .context("RNG_SEED must be an unsigned integer")?,
        })
    }
}
