//! MCP transport wiring
//!
//! Builds the Streamable HTTP service nested into the Axum router for the
//! networked modes, and runs the server over stdin/stdout for direct mode.

use rmcp::{
    ServiceExt,
    transport::{
        stdio,
        streamable_http_server::{
            StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
        },
    },
};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::error::ServerError;

use super::resolver::ApiResolver;
use super::server::TodoistServer;

/// Create MCP Streamable HTTP service
///
/// Each MCP session gets its own [`TodoistServer`]; all of them share the
/// same resolver, which reads the caller's session from the request.
///
/// # Example
/// ```no_run
/// use axum::Router;
/// use tokio_util::sync::CancellationToken;
/// # use todoist_mcp::mcp::{ApiResolver, create_mcp_service};
///
/// let ct = CancellationToken::new();
/// let mcp_service = create_mcp_service(ApiResolver::per_request(), ct);
///
/// let app: Router = Router::new().nest_service("/mcp", mcp_service);
/// ```
pub fn create_mcp_service(
    resolver: ApiResolver,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<TodoistServer, LocalSessionManager> {
    // rmcp expects the factory to return io::Error
    let service_factory =
        move || -> Result<TodoistServer, std::io::Error> { Ok(TodoistServer::new(resolver.clone())) };

    let config = StreamableHttpServerConfig::default()
        .with_stateful_mode(true)
        .with_cancellation_token(cancellation_token);

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}

/// Serve MCP over stdin/stdout until the client disconnects.
pub async fn serve_stdio(resolver: ApiResolver) -> Result<(), ServerError> {
    info!("Starting Todoist MCP server on stdio");

    let service = TodoistServer::new(resolver)
        .serve(stdio())
        .await
        .map_err(|e| ServerError::Mcp(e.to_string()))?;

    service
        .waiting()
        .await
        .map_err(|e| ServerError::Mcp(e.to_string()))?;

    info!("stdio client disconnected");
    Ok(())
}
