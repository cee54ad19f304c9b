//! Access gate and credential extraction.

use std::fmt;

use axum::http::{HeaderMap, HeaderName};
use subtle::ConstantTimeEq;

use super::error::AuthError;
use super::session::Session;

/// Header carrying the shared server-access secret.
pub const DEFAULT_ACCESS_HEADER: &str = "x-mcp-token";

/// Header carrying the caller's Todoist token.
pub const DEFAULT_CREDENTIAL_HEADER: &str = "authorization";

const BEARER_SCHEME: &str = "bearer";

/// Shared secret guarding access to the server.
#[derive(Clone)]
pub struct AccessSecret(String);

impl AccessSecret {
    /// Returns `None` for an empty secret, which disables the gate.
    pub fn new(secret: impl Into<String>) -> Option<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            None
        } else {
            Some(Self(secret))
        }
    }

    /// Constant-time comparison against a presented value.
    pub fn matches(&self, candidate: &str) -> bool {
        candidate.as_bytes().ct_eq(self.0.as_bytes()).into()
    }
}

impl fmt::Debug for AccessSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessSecret(<redacted>)")
    }
}

/// Authentication settings shared by every request of a networked server.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    access_secret: Option<AccessSecret>,
    access_header: HeaderName,
    credential_header: HeaderName,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_secret: None,
            access_header: HeaderName::from_static(DEFAULT_ACCESS_HEADER),
            credential_header: HeaderName::from_static(DEFAULT_CREDENTIAL_HEADER),
        }
    }
}

impl AuthConfig {
    /// Default header names with the given (optional) access secret.
    pub fn new(access_secret: Option<AccessSecret>) -> Self {
        Self {
            access_secret,
            ..Self::default()
        }
    }

    /// Override the header carrying the access secret.
    pub fn with_access_header(mut self, name: HeaderName) -> Self {
        self.access_header = name;
        self
    }

    /// Override the header carrying the Todoist token.
    pub fn with_credential_header(mut self, name: HeaderName) -> Self {
        self.credential_header = name;
        self
    }

    pub fn access_secret(&self) -> Option<&AccessSecret> {
        self.access_secret.as_ref()
    }

    pub fn access_header(&self) -> &HeaderName {
        &self.access_header
    }

    pub fn credential_header(&self) -> &HeaderName {
        &self.credential_header
    }

    /// Run the access gate, then extract the session.
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<Session, AuthError> {
        self.check_access(headers)?;
        self.extract_session(headers)
    }

    /// Validate the presented access secret.
    ///
    /// Passes unconditionally when no secret is configured. Otherwise the
    /// first value of the access header must match exactly; a missing or
    /// non-UTF-8 value counts as a mismatch.
    pub fn check_access(&self, headers: &HeaderMap) -> Result<(), AuthError> {
        let Some(secret) = &self.access_secret else {
            return Ok(());
        };

        match first_value(headers, &self.access_header) {
            Some(candidate) if secret.matches(candidate) => Ok(()),
            _ => Err(AuthError::InvalidAccessSecret),
        }
    }

    /// Extract the Todoist token from the credential header.
    ///
    /// A leading `Bearer` scheme is stripped (any case, any surrounding
    /// whitespace). A header without a scheme is taken as the raw token.
    pub fn extract_session(&self, headers: &HeaderMap) -> Result<Session, AuthError> {
        first_value(headers, &self.credential_header)
            .map(strip_bearer)
            .and_then(Session::new)
            .ok_or(AuthError::MissingCredential)
    }
}

/// First value of a header, if present and valid UTF-8.
fn first_value<'a>(headers: &'a HeaderMap, name: &HeaderName) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

fn strip_bearer(value: &str) -> &str {
    let value = value.trim();

    match value.split_once(char::is_whitespace) {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case(BEARER_SCHEME) => token.trim(),
        None if value.eq_ignore_ascii_case(BEARER_SCHEME) => "",
        _ => value,
    }
}
