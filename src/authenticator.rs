//! Exchanges credentials for session properties against the token endpoint.

use reqwest::{header, Client};
use tracing::debug;

use crate::config::Config;
use crate::error::AuthError;
use crate::models::{Credentials, SessionProperties};
use crate::transport::warn_if_insecure;

/// Acquires an auth token and email from the configured endpoint and
/// validates persisted session properties.
///
/// Clone is cheap - `reqwest::Client` uses `Arc` internally for
/// connection pooling.
#[derive(Debug, Clone)]
pub struct Authenticator {
    config: Config,
    client: Client,
}

impl Authenticator {
    /// Create an authenticator with its own HTTP client.
    pub fn new(config: Config) -> Result<Self, AuthError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(config, client))
    }

    /// Create an authenticator sharing an existing client's connection pool.
    pub fn with_client(config: Config, client: Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Restore a session from persisted properties.
    ///
    /// Succeeds iff both the token and the email are non-empty, returning
    /// the properties unchanged. Performs no I/O - a restored session is
    /// trusted until the server rejects one of its requests.
    pub fn restore(&self, properties: SessionProperties) -> Result<SessionProperties, AuthError> {
        if properties.is_complete() {
            Ok(properties)
        } else {
            Err(AuthError::InvalidSession)
        }
    }

    /// Authenticate against the server and return the session properties.
    ///
    /// The credentials are `POST`ed to the configured endpoint, nested
    /// under the configured resource name. A 2xx response body is passed
    /// through as-is without checking that the token fields are present;
    /// a non-2xx response fails with the server's error payload.
    pub async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<SessionProperties, AuthError> {
        warn_if_insecure(&self.config.server_token_endpoint);

        let mut body = serde_json::Map::new();
        body.insert(
            self.config.resource_name.clone(),
            serde_json::json!({
                "email": credentials.identification,
                "password": credentials.password,
            }),
        );

        debug!(endpoint = %self.config.server_token_endpoint, "requesting session token");

        let response = self
            .client
            .post(&self.config.server_token_endpoint)
            .header(header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            debug!(%status, "session token acquired");
            Ok(serde_json::from_str(&text)?)
        } else {
            debug!(%status, "authentication rejected");
            // The server's payload is surfaced verbatim, parsed when possible.
            let payload =
                serde_json::from_str(&text).unwrap_or_else(|_| serde_json::Value::String(text));
            Err(AuthError::AuthenticationFailed {
                status,
                body: payload,
            })
        }
    }

    /// Invalidate a session. Always succeeds immediately - server-side
    /// session teardown is not implemented.
    pub fn invalidate(&self, _properties: &SessionProperties) -> Result<(), AuthError> {
        Ok(())
    }
}
