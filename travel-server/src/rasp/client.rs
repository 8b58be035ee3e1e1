//! Yandex.Rasp HTTP client.
//!
//! Issues one GET per (from, to, date) query against the schedule search
//! endpoint and decodes the response into an opaque JSON object. Every
//! call is a fresh one-shot round trip: no caching, no retries.

use crate::compose::ScheduleSource;
use crate::stations::StationCode;

use super::error::RaspError;

/// Default base URL for the schedule search endpoint.
const DEFAULT_BASE_URL: &str = "https://api.rasp.yandex.net/v3.0/search/";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Response format requested from the provider.
const RESPONSE_FORMAT: &str = "json";

/// Locale requested from the provider.
const RESPONSE_LANG: &str = "ru_RU";

/// An opaque provider response: an arbitrary JSON object passed through
/// to callers verbatim. The only key this system ever inspects is
/// `"threads"`.
pub type ScheduleResult = serde_json::Map<String, serde_json::Value>;

/// Configuration for the Rasp client.
#[derive(Debug, Clone)]
pub struct RaspConfig {
    /// API key, sent as the `apikey` query parameter
    pub api_key: String,
    /// Base URL for the search endpoint
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RaspConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Schedule provider API client.
#[derive(Debug, Clone)]
pub struct RaspClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl RaspClient {
    /// Create a new Rasp client with the given configuration.
    pub fn new(config: RaspConfig) -> Result<Self, RaspError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key,
            base_url: config.base_url,
        })
    }
}

impl ScheduleSource for RaspClient {
    /// Fetch the provider schedule for one (from, to, date) leg.
    ///
    /// The date string is passed through verbatim; the provider validates
    /// it. Non-success statuses are surfaced undifferentiated, with the
    /// response body as the message.
    async fn fetch_schedule(
        &self,
        from: &StationCode,
        to: &StationCode,
        date: &str,
    ) -> Result<ScheduleResult, RaspError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("format", RESPONSE_FORMAT),
                ("from", from.as_str()),
                ("to", to.as_str()),
                ("lang", RESPONSE_LANG),
                ("date", date),
                ("transfers", "true"),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RaspError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| RaspError::Json {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = RaspConfig::new("test-key");

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_builder() {
        let config = RaspConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_timeout(5);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn client_creation() {
        let config = RaspConfig::new("test-key");
        let client = RaspClient::new(config);
        assert!(client.is_ok());
    }

    // Requests against the live endpoint need a real API key; the
    // composition logic is exercised against an in-process
    // ScheduleSource in compose.rs instead.
}
