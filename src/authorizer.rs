//! Attaches the session token to outbound requests.

use reqwest::header::{self, HeaderValue};
use reqwest::Request;
use tracing::warn;

use crate::session::SessionState;
use crate::transport::INSECURE_TRANSPORT_WARNING;

/// Authorizes outbound requests by sending the session's token and email
/// in the `Authorization` header:
///
/// ```text
/// Authorization: Token token="<token>", user_email="<email>"
/// ```
///
/// Values are inserted without escaping; a token or email containing `"`
/// produces a malformed header. Callers must not supply such values.
#[derive(Debug, Clone, Copy, Default)]
pub struct Authorizer;

impl Authorizer {
    pub fn new() -> Self {
        Self
    }

    /// Set the `Authorization` header on `request` when the session is
    /// authenticated with a non-empty token and email. Otherwise the
    /// request is left unmodified.
    pub fn authorize(&self, state: &SessionState, request: &mut Request) {
        let SessionState::Authenticated(properties) = state else {
            return;
        };
        if !properties.is_complete() {
            return;
        }

        if request.url().scheme() != "https" {
            warn!("{}", INSECURE_TRANSPORT_WARNING);
        }

        let value = format!(
            "Token token=\"{}\", user_email=\"{}\"",
            properties.token, properties.email
        );
        match HeaderValue::from_str(&value) {
            Ok(value) => {
                request.headers_mut().insert(header::AUTHORIZATION, value);
            }
            // Header values reject control characters; the request goes
            // out unauthorized rather than panicking.
            Err(_) => warn!("authorization header skipped - token or email contains invalid characters"),
        }
    }
}
