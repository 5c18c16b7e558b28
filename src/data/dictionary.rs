//! Dictionary API client for dictionaryapi.dev
//!
//! Fetches the raw JSON payload for a single word. Interpreting the payload is
//! left to [`Entry`](super::Entry); this client only distinguishes between a
//! successful response and everything else.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Base URL of the free dictionary API; the word is appended as a path segment
pub const DEFAULT_BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors that can occur when fetching a word from the dictionary API
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API answered with a non-200 status
    #[error("Word not found (HTTP {status})")]
    NotFound { status: StatusCode },

    /// HTTP request failed or the body could not be decoded
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL cannot be used to build a request
    #[error("Invalid API URL '{0}'")]
    InvalidUrl(String),
}

/// Source of raw dictionary payloads
///
/// Implemented by [`DictionaryClient`] for the real service and by test doubles.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    /// Fetches the raw payload for `word`
    async fn fetch(&self, word: &str) -> Result<Value, FetchError>;
}

/// Client for fetching definitions from the dictionary API
#[derive(Debug, Clone)]
pub struct DictionaryClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Base URL for the API (allows override for testing)
    base_url: String,
}

impl DictionaryClient {
    /// Creates a new DictionaryClient with default configuration
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Creates a new DictionaryClient with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: Client::new(),
            base_url,
        }
    }

    /// Creates a client with a custom base URL and an optional request timeout
    ///
    /// Fails with `FetchError::Http` if the HTTP client cannot be built (e.g.
    /// the TLS backend cannot be initialised).
    pub fn with_options(base_url: String, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the request URL for a word, percent-encoding it as one path segment
    pub fn word_url(&self, word: &str) -> Result<Url, FetchError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|_| FetchError::InvalidUrl(self.base_url.clone()))?;

        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push(word);

        Ok(url)
    }

    /// Fetches the raw JSON payload for a word
    ///
    /// # Returns
    /// * `Ok(Value)` - The response body when the API answers 200
    /// * `Err(FetchError::NotFound)` - Any other status code
    /// * `Err(FetchError::Http)` - Transport or decode failure
    pub async fn fetch_word(&self, word: &str) -> Result<Value, FetchError> {
        let url = self.word_url(word)?;
        debug!(%url, "fetching definition");

        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::NotFound { status });
        }

        Ok(response.json::<Value>().await?)
    }
}

impl Default for DictionaryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for DictionaryClient {
    async fn fetch(&self, word: &str) -> Result<Value, FetchError> {
        self.fetch_word(word).await
    }
}
