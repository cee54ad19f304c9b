//! Request authentication for the networked transports.
//!
//! Two checks run in order on every inbound request:
//!
//! - **Access gate**: an optional shared secret guarding the server itself.
//! - **Credential extraction**: the caller's Todoist token, which becomes the
//!   [`Session`] for that request.
//!
//! Both read from an [`axum::http::HeaderMap`], so header names are matched
//! case-insensitively and a repeated header resolves to its first value.
//!
//! The stdio transport never goes through this module: its credential is
//! supplied once at startup.

mod error;
mod gate;
mod middleware;
mod session;

#[cfg(test)]
mod gate_test;

pub use error::AuthError;
pub use gate::{AccessSecret, AuthConfig, DEFAULT_ACCESS_HEADER, DEFAULT_CREDENTIAL_HEADER};
pub use middleware::require_session;
pub use session::Session;
