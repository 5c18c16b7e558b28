//! Command-line interface parsing for dictcache
//!
//! This module handles parsing of CLI arguments using clap and turns them into
//! a validated [`Config`] for the lookup loop.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use reqwest::Url;
use thiserror::Error;

use crate::cache::Buffer;
use crate::data::dictionary::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Buffer directory used when no platform cache directory is available
const FALLBACK_BUFFER_DIR: &str = "buffer";

/// Error types for CLI argument validation
#[derive(Debug, Error)]
pub enum CliError {
    /// The API URL cannot be parsed or cannot take path segments
    #[error("Invalid API URL: '{0}'")]
    InvalidApiUrl(String),
}

/// dictcache - look up English words, caching definitions on disk
#[derive(Parser, Debug)]
#[command(name = "dictcache")]
#[command(about = "Dictionary lookups with a local on-disk cache")]
#[command(version)]
pub struct Cli {
    /// Directory holding cached entries (one <word>.json per word)
    #[arg(long, value_name = "DIR", conflicts_with = "no_cache")]
    pub buffer_dir: Option<PathBuf>,

    /// Always fetch from the network and never write cache files
    #[arg(long)]
    pub no_cache: bool,

    /// Print the raw JSON payload instead of the formatted entry
    #[arg(long)]
    pub raw: bool,

    /// Base URL of the dictionary API; the word is appended as a path segment
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Request timeout in seconds (0 disables the timeout)
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Log filter used when RUST_LOG is not set (e.g. "info", "dictcache=debug")
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    pub log_level: String,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Buffer directory, or `None` to run without a cache
    pub buffer_dir: Option<PathBuf>,
    /// Whether entries are printed as raw JSON
    pub raw_output: bool,
    /// Base URL of the dictionary API
    pub api_url: String,
    /// Request timeout, if any
    pub timeout: Option<Duration>,
    /// Default log filter
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            buffer_dir: Some(default_buffer_dir()),
            raw_output: false,
            api_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            log_level: "warn".to_string(),
        }
    }
}

/// Returns the platform cache directory, or `./buffer` if there is none
pub fn default_buffer_dir() -> PathBuf {
    Buffer::default_dir().unwrap_or_else(|| PathBuf::from(FALLBACK_BUFFER_DIR))
}

/// Checks that a URL can have a word appended as a path segment
pub fn validate_api_url(s: &str) -> Result<(), CliError> {
    match Url::parse(s) {
        Ok(url) if !url.cannot_be_a_base() => Ok(()),
        _ => Err(CliError::InvalidApiUrl(s.to_string())),
    }
}

impl Config {
    /// Creates a Config from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(Config)` with appropriate settings
    /// * `Err(CliError)` if the API URL is invalid
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        validate_api_url(&cli.api_url)?;

        let buffer_dir = if cli.no_cache {
            None
        } else {
            Some(cli.buffer_dir.clone().unwrap_or_else(default_buffer_dir))
        };

        let timeout = match cli.timeout {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        Ok(Config {
            buffer_dir,
            raw_output: cli.raw,
            api_url: cli.api_url.clone(),
            timeout,
            log_level: cli.log_level.clone(),
        })
    }
}
