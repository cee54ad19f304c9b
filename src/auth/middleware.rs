use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::{debug, warn};

use super::gate::AuthConfig;

/// Authenticate a request before it reaches the MCP service.
///
/// On success the resulting [`Session`](super::Session) is stored in the
/// request extensions, where the tool layer picks it up. On failure the
/// request is answered with 401 and never forwarded.
pub async fn require_session(
    State(auth): State<Arc<AuthConfig>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    match auth.authenticate(request.headers()) {
        Ok(session) => {
            debug!(path = %request.uri().path(), "request authenticated");
            request.extensions_mut().insert(session);
            next.run(request).await
        }
        Err(err) => {
            warn!(
                method = %request.method(),
                path = %request.uri().path(),
                reason = %err,
                "rejected MCP request"
            );
            err.into_response()
        }
    }
}
