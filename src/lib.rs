//! Token-based session authentication for HTTP clients.
//!
//! This crate implements the client side of a token login flow:
//!
//! - `Authenticator`: exchanges credentials for session properties by
//!   `POST`ing them to a token endpoint, and validates previously
//!   persisted properties when restoring a session
//! - `Authorizer`: attaches the session's token and email to outbound
//!   requests as an `Authorization` header
//! - `Session`: owns one of each and tracks the
//!   unauthenticated/authenticated state
//!
//! Persistence of the session properties between runs is the caller's
//! responsibility; the crate only decides whether persisted values are
//! still sufficient to consider a session active.
//!
//! ```no_run
//! use tokengate::{Config, Credentials, Session};
//!
//! # async fn example() -> Result<(), tokengate::AuthError> {
//! let config = Config {
//!     server_token_endpoint: "https://example.com/users/sign_in".into(),
//!     ..Config::default()
//! };
//! let mut session = Session::new(config)?;
//! session
//!     .authenticate(&Credentials::new("user@example.com", "secret"))
//!     .await?;
//!
//! let mut request = reqwest::Request::new(
//!     reqwest::Method::GET,
//!     "https://example.com/profile".parse().unwrap(),
//! );
//! session.authorize(&mut request);
//! # Ok(())
//! # }
//! ```

pub mod authenticator;
pub mod authorizer;
pub mod config;
pub mod error;
pub mod models;
pub mod session;

mod transport;

pub use authenticator::Authenticator;
pub use authorizer::Authorizer;
pub use config::Config;
pub use error::AuthError;
pub use models::{Credentials, SessionProperties};
pub use session::{Session, SessionState};
