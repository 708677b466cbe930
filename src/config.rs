use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// SQLite database path, sqlx URL form (e.g. `sqlite://recipes.db`).
    pub database_url: String,
    /// Source file consumed by the ingest binary.
    pub recipes_path: String,
    /// Page size used when the listing request omits `limit`.
    pub default_limit: u32,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("RECIPES_PORT", "8000"),
            database_url: try_load("RECIPES_DATABASE_URL", "sqlite://recipes.db"),
            recipes_path: try_load("RECIPES_SOURCE", "recipes.json"),
            default_limit: try_load("RECIPES_DEFAULT_LIMIT", "10"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
