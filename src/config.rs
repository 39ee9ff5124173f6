//! Service configuration
//! 
//! Read from the process environment (and a `.env` file when present).

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// When set, activities are persisted to this JSON file
    pub store_path: Option<PathBuf>,
    /// OTLP collector endpoint for span export
    pub otlp_endpoint: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            store_path: None,
            otlp_endpoint: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match get("DIRECTORY_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("DIRECTORY_PORT must be a port number, got '{}'", raw))?,
            None => defaults.port,
        };

        Ok(Self {
            host: get("DIRECTORY_HOST").unwrap_or(defaults.host),
            port,
            static_dir: get("DIRECTORY_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            store_path: get("DIRECTORY_STORE_PATH").map(PathBuf::from),
            otlp_endpoint: get("OTEL_EXPORTER_OTLP_ENDPOINT"),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}
