use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a default — the binary runs with no env at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Per-part upload cap for image imports, in bytes.
    pub max_upload_bytes: usize,
    /// Seconds a rewarded view must run before its ticket can be redeemed.
    pub gate_countdown_secs: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| (10 * 1024 * 1024).to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            gate_countdown_secs: std::env::var("GATE_COUNTDOWN_SECS")
                .unwrap_or_else(|_| "5".to_string())
                .parse::<i64>()
                .context("GATE_COUNTDOWN_SECS must be a number of seconds")?,
        })
    }
}
