//! API route configuration.

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::get;
use tokio_util::sync::CancellationToken;

use super::handlers;
use crate::auth::require_session;
use crate::config::NetworkConfig;
use crate::mcp::{ApiResolver, create_mcp_service};

/// Create the HTTP router for a networked transport.
///
/// `/health` is open. The MCP endpoint (`/sse` or `/mcp`) sits behind the
/// access gate and credential extraction, which attach a `Session` to every
/// request that reaches the MCP service.
pub fn create_router(
    config: &NetworkConfig,
    resolver: ApiResolver,
    cancellation_token: CancellationToken,
) -> Router {
    let auth = Arc::new(config.auth.clone());
    let mcp_service = create_mcp_service(resolver, cancellation_token);

    let mcp_routes = Router::new()
        .nest_service(config.transport.endpoint(), mcp_service)
        .route_layer(middleware::from_fn_with_state(auth, require_session));

    Router::new()
        .route("/health", get(handlers::health))
        .merge(mcp_routes)
}
