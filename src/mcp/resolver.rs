//! Per-call resolution of a Todoist client.
//!
//! Every tool call asks the resolver for a client. The resolver finds the
//! caller's session (fixed at startup for stdio, carried by the HTTP request
//! otherwise) and builds a fresh [`TodoistClient`] bound to its token.
//! Nothing is cached between calls.

use axum::http::request::Parts;
use rmcp::{RoleServer, service::RequestContext};
use thiserror::Error;
use tracing::debug;

use crate::auth::Session;
use crate::todoist::{DEFAULT_BASE_URL, TodoistClient};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("No todoist api token provided")]
    MissingToken,

    #[error("{0}")]
    Client(String),
}

/// Where the Todoist token for a tool call comes from.
#[derive(Debug, Clone)]
pub enum CredentialSource {
    /// Supplied once at startup (stdio).
    Static(Option<Session>),
    /// Carried by each HTTP request, placed in its extensions by
    /// [`require_session`](crate::auth::require_session).
    PerRequest,
}

#[derive(Debug, Clone)]
pub struct ApiResolver {
    source: CredentialSource,
    base_url: String,
}

impl ApiResolver {
    /// Resolver for a credential supplied out-of-band.
    pub fn direct(session: Option<Session>) -> Self {
        Self {
            source: CredentialSource::Static(session),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Resolver reading the session from each HTTP request.
    pub fn per_request() -> Self {
        Self {
            source: CredentialSource::PerRequest,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point built clients at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn source(&self) -> &CredentialSource {
        &self.source
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Session for a call, given the HTTP request parts (if any).
    pub fn session_for(&self, parts: Option<&Parts>) -> Option<Session> {
        match &self.source {
            CredentialSource::Static(session) => session.clone(),
            CredentialSource::PerRequest => {
                parts.and_then(|parts| parts.extensions.get::<Session>().cloned())
            }
        }
    }

    /// Build a client for `session`.
    ///
    /// Fails with [`ResolveError::MissingToken`] before any I/O when there
    /// is no session.
    pub fn resolve(&self, session: Option<&Session>) -> Result<TodoistClient, ResolveError> {
        let session = session.ok_or(ResolveError::MissingToken)?;

        TodoistClient::new(session.api_token(), &self.base_url)
            .map_err(|e| ResolveError::Client(e.to_string()))
    }

    /// Build a client for the session attached to a tool call.
    pub fn resolve_for(
        &self,
        context: &RequestContext<RoleServer>,
    ) -> Result<TodoistClient, ResolveError> {
        let parts = context.extensions.get::<Parts>();
        let session = self.session_for(parts);
        debug!(
            has_session = session.is_some(),
            "resolving Todoist client for tool call"
        );
        self.resolve(session.as_ref())
    }
}
