//! Data types exchanged with the caller and with the server.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Login credentials supplied by the caller.
///
/// Ephemeral - only ever nested into the token request body, never
/// persisted by this crate.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub identification: String,
    pub password: String,
}

impl Credentials {
    pub fn new(identification: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identification: identification.into(),
            password: password.into(),
        }
    }
}

// Keep the password out of logs and error chains.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identification", &self.identification)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The persisted values that represent an authenticated session.
///
/// The server's success response is passed through as-is: `user_token`
/// and `user_email` map onto the two known fields, and anything else the
/// server returned is kept in `extra`, so a round trip through JSON
/// reproduces the original body. Absent or `null` wire fields become
/// empty strings; [`Authenticator::restore`] rejects those.
///
/// [`Authenticator::restore`]: crate::Authenticator::restore
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionProperties {
    #[serde(rename = "user_token", default, deserialize_with = "null_as_empty")]
    pub token: String,

    #[serde(rename = "user_email", default, deserialize_with = "null_as_empty")]
    pub email: String,

    /// Additional response fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SessionProperties {
    pub fn new(token: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            email: email.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Whether the properties are sufficient to consider a session active.
    pub fn is_complete(&self) -> bool {
        !self.token.is_empty() && !self.email.is_empty()
    }
}

/// Treat an explicit `null` like an absent field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
