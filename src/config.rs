//! Authenticator configuration.
//!
//! Captured once when the authenticator is constructed and immutable
//! afterwards. The `Deserialize` defaults match the upstream conventions,
//! so a partial config document fills in the rest.

use serde::{Deserialize, Serialize};

/// Default endpoint the auth token and email are acquired from.
const DEFAULT_TOKEN_ENDPOINT: &str = "/users/sign_in";

/// Default server-side resource name credentials are nested under.
const DEFAULT_RESOURCE_NAME: &str = "user";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Endpoint the token request is `POST`ed to. The default is a bare
    /// path; deployments talking to a separate auth server set a full URL.
    pub server_token_endpoint: String,

    /// Key the credentials are nested under in the request body, matching
    /// the server-side model being authenticated against.
    pub resource_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_token_endpoint: DEFAULT_TOKEN_ENDPOINT.to_string(),
            resource_name: DEFAULT_RESOURCE_NAME.to_string(),
        }
    }
}
