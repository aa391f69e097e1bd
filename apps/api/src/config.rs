use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_HEALTH_MESSAGE: &str = "서버가 정상 작동 중입니다";

/// Application configuration loaded from environment variables.
/// Every variable is optional; missing or empty values fall back to defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub health_message: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match non_empty(lookup("PORT")) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{raw}'"))?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            port,
            health_message: non_empty(lookup("HEALTH_MESSAGE"))
                .unwrap_or_else(|| DEFAULT_HEALTH_MESSAGE.to_string()),
            rust_log: non_empty(lookup("RUST_LOG")).unwrap_or_else(|| "info".to_string()),
        })
    }
}

/// Loads `.env` into the process environment if present.
/// Returns the path that was loaded, or `None` when there is no file.
pub fn load_env_file() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
