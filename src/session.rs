//! Session state and the session manager that drives it.

use reqwest::Request;

use crate::authenticator::Authenticator;
use crate::authorizer::Authorizer;
use crate::config::Config;
use crate::error::AuthError;
use crate::models::{Credentials, SessionProperties};

/// The two states a session can be in.
///
/// There is no in-flight state - a pending `authenticate` call settles
/// before the state changes, and the caller is responsible for not
/// starting another one before it does.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated(SessionProperties),
}

/// Owns one authenticator and one authorizer and sequences the session
/// lifecycle: unauthenticated to authenticated on a successful
/// `authenticate` or `restore`, back to unauthenticated on `invalidate`.
#[derive(Debug, Clone)]
pub struct Session {
    authenticator: Authenticator,
    authorizer: Authorizer,
    state: SessionState,
}

impl Session {
    pub fn new(config: Config) -> Result<Self, AuthError> {
        Ok(Self::with_parts(Authenticator::new(config)?, Authorizer::new()))
    }

    /// Assemble a session from explicitly constructed parts.
    pub fn with_parts(authenticator: Authenticator, authorizer: Authorizer) -> Self {
        Self {
            authenticator,
            authorizer,
            state: SessionState::Unauthenticated,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    /// The stored session properties, if authenticated.
    pub fn properties(&self) -> Option<&SessionProperties> {
        match &self.state {
            SessionState::Authenticated(properties) => Some(properties),
            SessionState::Unauthenticated => None,
        }
    }

    /// Exchange credentials for session properties and store them.
    /// On failure the previous state is left untouched.
    pub async fn authenticate(&mut self, credentials: &Credentials) -> Result<(), AuthError> {
        let properties = self.authenticator.authenticate(credentials).await?;
        self.state = SessionState::Authenticated(properties);
        Ok(())
    }

    /// Restore a previously persisted session without a server call.
    /// On failure the previous state is left untouched.
    pub fn restore(&mut self, properties: SessionProperties) -> Result<(), AuthError> {
        let properties = self.authenticator.restore(properties)?;
        self.state = SessionState::Authenticated(properties);
        Ok(())
    }

    /// Drop the session. Always succeeds, from either state.
    pub fn invalidate(&mut self) -> Result<(), AuthError> {
        if let SessionState::Authenticated(properties) = &self.state {
            self.authenticator.invalidate(properties)?;
        }
        self.state = SessionState::Unauthenticated;
        Ok(())
    }

    /// Attach the session's token to an outbound request. Requests from an
    /// unauthenticated session are left unmodified.
    pub fn authorize(&self, request: &mut Request) {
        self.authorizer.authorize(&self.state, request);
    }
}
