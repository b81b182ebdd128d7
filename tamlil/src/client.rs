//! Gemini API client implementation.
//!
//! Provides a client for the Gemini generative language API, covering the
//! two calls this crate needs: media upload through the Files API and
//! one-shot content generation.

use crate::error::{Result, TranscribeError};
use crate::transcribe::TranscriptionModel;
use std::sync::Arc;

/// Default Gemini API base URL.
pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Gemini API client.
///
/// Holds the HTTP transport and credential shared by the Files API and
/// `generateContent` calls.
///
/// # Example
///
/// ```rust,ignore
/// use tamlil::client::GeminiClient;
///
/// // From environment variable GOOGLE_API_KEY
/// let client = GeminiClient::from_env();
///
/// // With explicit API key
/// let client = GeminiClient::new("AIza...");
///
/// // With custom base URL (for proxies or a local test server)
/// let client = GeminiClient::builder()
///     .api_key("AIza...")
///     .base_url("http://localhost:8080")
///     .build();
/// ```
#[derive(Clone)]
pub struct GeminiClient {
    http_client: reqwest::Client,
    api_key: Option<Arc<str>>,
    base_url: Arc<str>,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a new client with the given API key.
    ///
    /// Uses the default Gemini API base URL.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder().api_key(api_key).build()
    }

    /// Create a client from the `GOOGLE_API_KEY` environment variable.
    ///
    /// A missing variable is not an immediate error; the first request will
    /// fail with [`TranscribeError::MissingApiKey`].
    #[must_use]
    pub fn from_env() -> Self {
        let mut builder = Self::builder();

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            builder = builder.api_key(key);
        }

        builder.build()
    }

    /// Create a new client builder.
    #[must_use]
    pub fn builder() -> GeminiClientBuilder {
        GeminiClientBuilder::default()
    }

    /// Check if a credential is configured.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    /// Returns the base URL of this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a transcription model bound to the given model id.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let client = GeminiClient::from_env();
    /// let model = client.transcription_model("models/gemini-3-flash-preview");
    /// ```
    #[must_use]
    pub fn transcription_model(&self, model_id: impl Into<String>) -> TranscriptionModel {
        TranscriptionModel::new(self.clone(), model_id)
    }

    pub(crate) fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Get the configured API key, or fail the request.
    pub(crate) fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or(TranscribeError::MissingApiKey)
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Builder for [`GeminiClient`].
#[derive(Debug, Default)]
pub struct GeminiClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

impl GeminiClientBuilder {
    /// Set the API key.
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set a custom base URL.
    ///
    /// Useful for proxies or pointing at a local test server.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout in seconds.
    ///
    /// Default is reqwest's default (no overall timeout).
    #[must_use]
    pub const fn timeout_secs(mut self, timeout: u64) -> Self {
        self.timeout_secs = Some(timeout);
        self
    }

    /// Build the client.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client fails to build.
    #[must_use]
    pub fn build(self) -> GeminiClient {
        let base_url = self
            .base_url
            .unwrap_or_else(|| GEMINI_API_BASE_URL.to_string());
        let http_client = Self::build_http_client(self.timeout_secs);

        GeminiClient {
            http_client,
            api_key: self.api_key.map(Into::into),
            base_url: base_url.into(),
        }
    }

    fn build_http_client(timeout_secs: Option<u64>) -> reqwest::Client {
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(timeout));
        }

        builder.build().expect("Failed to build HTTP client")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = GeminiClient::builder()
            .api_key("test-key")
            .base_url("http://localhost:8080")
            .timeout_secs(30)
            .build();

        assert_eq!(client.base_url(), "http://localhost:8080");
        assert!(client.is_available());
    }

    #[test]
    fn test_default_base_url() {
        let client = GeminiClient::new("test-key");
        assert_eq!(client.base_url(), GEMINI_API_BASE_URL);
    }

    #[test]
    fn test_missing_key_is_deferred() {
        let client = GeminiClient::builder().build();
        assert!(!client.is_available());
        assert!(matches!(
            client.api_key(),
            Err(TranscribeError::MissingApiKey)
        ));
    }

    #[test]
    fn test_debug_redacts_key() {
        let client = GeminiClient::new("very-secret");
        let debug = format!("{client:?}");
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
