use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use axum::http::HeaderValue;

/// Which [`ItemStore`](stockroom_db::ItemStore) implementation to run with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            _ => Err(()),
        }
    }
}

/// A configuration variable that could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("{var} must be {expected}, got {value:?}")]
pub struct ConfigError {
    pub var: &'static str,
    pub expected: &'static str,
    pub value: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Store implementation (default: `postgres`).
    pub store_backend: StoreBackend,
    /// Maximum pooled database connections (default: `20`).
    pub db_max_connections: u32,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                               |
    /// |------------------------|---------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                             |
    /// | `PORT`                 | `3000`                                |
    /// | `DATABASE_URL`         | `postgres://localhost:5432/stockroom` |
    /// | `STORE_BACKEND`        | `postgres`                            |
    /// | `DB_MAX_CONNECTIONS`   | `20`                                  |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`               |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str, default: &str| {
            lookup(name).unwrap_or_else(|| default.to_string())
        };

        let host = parse(&var("HOST", "0.0.0.0"), "HOST", "an IP address")?;
        let port = parse(&var("PORT", "3000"), "PORT", "a valid u16")?;
        let database_url = var("DATABASE_URL", "postgres://localhost:5432/stockroom");
        let store_backend = parse(
            &var("STORE_BACKEND", "postgres"),
            "STORE_BACKEND",
            "`postgres` or `memory`",
        )?;
        let db_max_connections = parse(
            &var("DB_MAX_CONNECTIONS", "20"),
            "DB_MAX_CONNECTIONS",
            "a valid u32",
        )?;
        let request_timeout_secs = parse(
            &var("REQUEST_TIMEOUT_SECS", "30"),
            "REQUEST_TIMEOUT_SECS",
            "a valid u64",
        )?;

        let cors_origins = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| parse(origin, "CORS_ORIGINS", "a list of valid origins"))
            .collect::<Result<Vec<HeaderValue>, _>>()?;

        Ok(Self {
            host,
            port,
            database_url,
            store_backend,
            db_max_connections,
            cors_origins,
            request_timeout_secs,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse<T: FromStr>(
    raw: &str,
    var: &'static str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    raw.parse().map_err(|_| ConfigError {
        var,
        expected,
        value: raw.to_string(),
    })
}
