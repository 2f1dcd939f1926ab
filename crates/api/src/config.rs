use std::env;
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use league_core::{DEFAULT_INTERVAL_DAYS, MAX_INTERVAL_DAYS};

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub skip_migrations: bool,
    pub allowed_origins: Vec<String>,
    pub introspection_enabled: bool,
    pub request_timeout: Duration,
    /// Days between rounds when a fixture request does not say.
    pub default_interval_days: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            database_url: "sqlite://league.db".to_string(),
            database_max_connections: 5,
            skip_migrations: false,
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:3001".to_string(),
            ],
            introspection_enabled: false,
            request_timeout: Duration::from_secs(30),
            default_interval_days: DEFAULT_INTERVAL_DAYS,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(port) => port.parse().context("PORT must be a valid port number")?,
            Err(_) => defaults.port,
        };

        let database_url = env::var("DATABASE_URL").unwrap_or(defaults.database_url);

        let database_max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a positive number")?,
            Err(_) => defaults.database_max_connections,
        };

        let skip_migrations = env::var("SKIP_MIGRATIONS")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(defaults.skip_migrations);

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or(defaults.allowed_origins);

        let introspection_enabled = env::var("GQL_INTROSPECTION")
            .map(|v| v == "true")
            .unwrap_or(defaults.introspection_enabled);

        let request_timeout = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);

        let default_interval_days = match env::var("DEFAULT_INTERVAL_DAYS") {
            Ok(raw) => parse_interval_days(&raw)?,
            Err(_) => defaults.default_interval_days,
        };

        Ok(Self {
            port,
            database_url,
            database_max_connections,
            skip_migrations,
            allowed_origins,
            introspection_enabled,
            request_timeout,
            default_interval_days,
        })
    }
}

fn parse_interval_days(raw: &str) -> Result<u32> {
    let days: u32 = raw
        .trim()
        .parse()
        .with_context(|| format!("DEFAULT_INTERVAL_DAYS must be a whole number, got {raw:?}"))?;
    ensure!(
        (1..=MAX_INTERVAL_DAYS).contains(&days),
        "DEFAULT_INTERVAL_DAYS must be between 1 and {MAX_INTERVAL_DAYS}, got {days}"
    );
    Ok(days)
}
