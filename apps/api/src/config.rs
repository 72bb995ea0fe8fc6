use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON fixture replacing the built-in reference candidates.
    pub candidates_path: Option<PathBuf>,
    /// Simulated "typing" pause before the assistant answers.
    pub chat_reply_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any variable source; `from_env` passes the
    /// process environment.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        // Unset and blank are treated the same.
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            port: optional("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            candidates_path: optional("CANDIDATES_PATH").map(PathBuf::from),
            chat_reply_delay_ms: optional("CHAT_REPLY_DELAY_MS")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("CHAT_REPLY_DELAY_MS must be a whole number of milliseconds")?
                .unwrap_or(0),
        })
    }
}
