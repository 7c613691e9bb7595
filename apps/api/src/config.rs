use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    /// Directory of portfolio templates, bound read-only at startup.
    pub templates_dir: PathBuf,
    /// Directory generated portfolio HTML is written to and served from.
    pub output_dir: PathBuf,
    /// Base URL prefixed to artifact locators in responses.
    pub public_base_url: String,
    /// Token verification endpoint. None = allow-all dev verifier.
    pub auth_verify_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            templates_dir: std::env::var("TEMPLATES_DIR")
                .unwrap_or_else(|_| "portfolios".to_string())
                .into(),
            output_dir: std::env::var("OUTPUT_DIR")
                .unwrap_or_else(|_| "generated_portfolios".to_string())
                .into(),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| format!("http://localhost:{port}")),
            auth_verify_url: std::env::var("AUTH_VERIFY_URL").ok(),
            port,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
