use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_ALLOWED_HOSTS: &str = "localhost,127.0.0.1,.vercel.app,.now.sh";
const DEFAULT_CORS_ORIGINS: &str =
    "https://*.vercel.app,https://*.now.sh,http://localhost:8080,http://127.0.0.1:8080";

/// Application configuration loaded from environment variables once at startup.
///
/// The model credential is optional: the service still starts without it and the
/// optimize endpoint reports the missing key per request.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub debug: bool,
    /// Host header allow-list. Empty disables the check.
    pub allowed_hosts: Vec<String>,
    /// Trusted CORS origins. Empty means permissive.
    pub cors_origins: Vec<String>,
    pub static_dir: PathBuf,
    pub scratch_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            groq_api_key: lookup("GROQ_API_KEY").filter(|k| !k.trim().is_empty()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            debug: lookup("DEBUG").is_some_and(|v| v.eq_ignore_ascii_case("true")),
            allowed_hosts: split_list(
                &lookup("ALLOWED_HOSTS").unwrap_or_else(|| DEFAULT_ALLOWED_HOSTS.to_string()),
            ),
            cors_origins: split_list(
                &lookup("CORS_ORIGINS").unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string()),
            ),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("static")),
            scratch_dir: lookup("SCRATCH_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(std::env::temp_dir),
        })
    }
}

/// Splits a comma-separated setting, dropping blank entries.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
