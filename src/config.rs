//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local runs.

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the storage slots
    pub data_dir: PathBuf,
    /// Address to bind; loopback by default since the data is personal
    pub bind_addr: IpAddr,
    /// Server port
    pub port: u16,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
}

impl Config {
    /// Config for tests: never touches the environment.
    pub fn test_default() -> Self {
        Self {
            data_dir: PathBuf::from("test-data"),
            bind_addr: IpAddr::from([127, 0, 0, 1]),
            port: 8080,
            frontend_url: "http://localhost:5173".to_string(),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            bind_addr: parse_var("BIND_ADDR", "127.0.0.1")?,
            port: parse_var("PORT", "8080")?,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: &str) -> Result<T, ConfigError> {
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        name,
        value: raw.clone(),
    })
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {name}: {value}")]
    Invalid { name: &'static str, value: String },
}
