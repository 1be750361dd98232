//! API error taxonomy.
//!
//! Authorization failures (401/403) are recovered locally by the HTTP
//! wrapper (logout + forced redirect) and reach callers only as
//! `Unauthorized`. Everything else propagates untouched: transport
//! failures as `Transport`/`Timeout`, other non-2xx statuses as `Api`
//! carrying the backend's error message when one was decodable.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Request never produced a server response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The fixed 10-second request timeout elapsed.
    #[error("request timed out")]
    Timeout,

    /// 401/403: session invalid or insufficient privilege. The wrapper has
    /// already cleared the session and issued the login redirect.
    #[error("session invalid or insufficient privilege")]
    Unauthorized,

    /// Any other non-2xx response, with the server's message if present.
    #[error("server error {status}: {message}")]
    Api { status: u16, message: String },

    /// 2xx response whose body did not decode as the expected type.
    #[error("could not decode response: {0}")]
    Decode(String),
}

/// Error envelope produced by the backend's global exception handler.
#[derive(Debug, serde::Deserialize)]
pub struct ErrorEnvelope {
    pub status: Option<u16>,
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ApiError {
    /// Map a non-2xx status and raw body to the taxonomy.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .and_then(|e| e.message.or(e.error))
            .unwrap_or_else(|| body.trim().to_owned());
        ApiError::Api { status, message }
    }
}
