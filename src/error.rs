use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// A session restore was attempted with a missing or empty token or
    /// email. Recoverable - callers treat this as "not logged in".
    #[error("Invalid session - token or email missing")]
    InvalidSession,

    /// The server answered the token request with a non-2xx status.
    /// Carries the server-provided payload verbatim: parsed JSON when the
    /// body was parseable, otherwise the raw text as a JSON string.
    #[error("Authentication failed ({status})")]
    AuthenticationFailed {
        status: StatusCode,
        body: serde_json::Value,
    },

    /// Transport-level failure before a response was received.
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// The server answered 2xx with a body that is not valid JSON.
    #[error("Invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}
