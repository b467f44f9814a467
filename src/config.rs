//! Environment-driven runtime configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

use crate::error::Result;

/// Origins allowed by default when `SEARCH_ALLOWED_ORIGINS` is unset.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "https://www.dollarsandlife.com",
    "https://dollarsandlife.com",
    "http://localhost:3000",
    "http://127.0.0.1:3000",
];

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5001";
const DEFAULT_DATA_DIR: &str = "./data";

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server listens on (`SEARCH_BIND_ADDR`).
    pub bind_addr: SocketAddr,
    /// Directory of per-collection JSON seed files (`SEARCH_DATA_DIR`).
    pub data_dir: PathBuf,
    /// CORS origin allow-list (`SEARCH_ALLOWED_ORIGINS`, comma-separated).
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let bind_addr = std::env::var("SEARCH_BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .with_context(|| format!("invalid SEARCH_BIND_ADDR '{bind_addr}'"))?;

        let data_dir = std::env::var("SEARCH_DATA_DIR")
            .map_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);

        let allowed_origins = match std::env::var("SEARCH_ALLOWED_ORIGINS") {
            Ok(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            Err(_) => DEFAULT_ALLOWED_ORIGINS.iter().map(|s| (*s).to_string()).collect(),
        };

        Ok(Self {
            bind_addr,
            data_dir,
            allowed_origins,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_origins_cover_production_and_local_dev() {
        assert_eq!(DEFAULT_ALLOWED_ORIGINS.len(), 4);
        assert!(DEFAULT_ALLOWED_ORIGINS.iter().any(|o| o.contains("localhost")));
    }
}
