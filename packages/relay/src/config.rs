use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_STATE_FILE: &str = "data.json";
const DEFAULT_FACEIT_BASE_URL: &str = "https://open.faceit.com";
const DEFAULT_DEMOSTF_BASE_URL: &str = "https://api.demos.tf";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
const DEFAULT_TRANSFER_TIMEOUT_SECS: u64 = 300;

/// When the watermark file gets written during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersistMode {
    /// One whole-file write after every hub has been processed.
    #[default]
    EndOfRun,
    /// Also write after each hub whose watermark moved.
    EachHub,
}

/// Relay configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub demostf_api_key: String,
    pub faceit_api_key: String,
    pub state_file: PathBuf,
    pub faceit_base_url: String,
    pub demostf_base_url: String,
    /// Timeout for FACEIT API calls
    pub http_timeout: Duration,
    /// Timeout for demo downloads and uploads
    pub transfer_timeout: Duration,
    pub persist_mode: PersistMode,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            demostf_api_key: lookup("DEMOSTF_API_KEY").context("DEMOSTF_API_KEY must be set")?,
            faceit_api_key: lookup("FACEIT_API_KEY").context("FACEIT_API_KEY must be set")?,
            state_file: lookup("RELAY_STATE_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILE)),
            faceit_base_url: lookup("FACEIT_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_FACEIT_BASE_URL.to_string()),
            demostf_base_url: lookup("DEMOSTF_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_DEMOSTF_BASE_URL.to_string()),
            http_timeout: Duration::from_secs(
                lookup("RELAY_HTTP_TIMEOUT_SECS")
                    .unwrap_or_else(|| DEFAULT_HTTP_TIMEOUT_SECS.to_string())
                    .parse()
                    .context("RELAY_HTTP_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            transfer_timeout: Duration::from_secs(
                lookup("RELAY_TRANSFER_TIMEOUT_SECS")
                    .unwrap_or_else(|| DEFAULT_TRANSFER_TIMEOUT_SECS.to_string())
                    .parse()
                    .context("RELAY_TRANSFER_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            persist_mode: if lookup("RELAY_PERSIST_EACH_HUB")
                .map(|value| parse_flag(&value))
                .transpose()
                .context("RELAY_PERSIST_EACH_HUB must be true or false")?
                .unwrap_or(false)
            {
                PersistMode::EachHub
            } else {
                PersistMode::EndOfRun
            },
        })
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("unrecognised flag value {:?}", other),
    }
}
