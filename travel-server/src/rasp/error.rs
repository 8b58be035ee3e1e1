//! Rasp client error types.

/// Errors from the schedule provider client.
#[derive(Debug, thiserror::Error)]
pub enum RaspError {
    /// HTTP request failed (connection error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not a JSON object
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
