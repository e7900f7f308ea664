/// Configuration management for the portfolio API
///
/// Handles server binding and store selection. Values come from environment
/// variables so the same binary runs locally and in containers.

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Store configuration
    pub store: StoreConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (e.g., "0.0.0.0")
    pub host: String,
    /// Server port number
    pub port: u16,
}

/// Which engine backs the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// SQLite database file at `StoreConfig::database_path`
    Sqlite,
    /// Process memory; contents are lost on restart
    Memory,
}

impl StoreBackend {
    /// Parse a backend name, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Some(Self::Sqlite),
            "memory" => Some(Self::Memory),
            _ => None,
        }
    }
}

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// SQLite file location (default: "data/portfolio.db")
    pub database_path: String,
    /// Insert the sample catalog at startup when no projects exist
    pub seed_samples: bool,
}

impl Default for Config {
    /// Default configuration with ENV_VAR support for container deployment
    fn default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

impl Config {
    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Missing, blank or unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            server: ServerConfig {
                host: value("PORTFOLIO_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: value("PORTFOLIO_PORT")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(5000),
            },
            store: StoreConfig {
                backend: value("PORTFOLIO_STORE")
                    .and_then(|b| StoreBackend::parse(&b))
                    .unwrap_or(StoreBackend::Sqlite),
                database_path: value("PORTFOLIO_DATABASE_PATH")
                    .unwrap_or_else(|| "data/portfolio.db".to_string()),
                seed_samples: value("PORTFOLIO_SEED_SAMPLES")
                    .and_then(|v| parse_flag(&v))
                    .unwrap_or(false),
            },
        }
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
