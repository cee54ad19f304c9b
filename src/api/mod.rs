//! HTTP front for the networked transports (`sse`, `httpStream`).

mod handlers;
mod routes;


use std::net::SocketAddr;

use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::NetworkConfig;
use crate::error::ServerError;
use crate::mcp::ApiResolver;

pub use handlers::HealthResponse;
pub use routes::create_router;

/// Run the HTTP server until Ctrl-C.
pub async fn run(config: NetworkConfig, resolver: ApiResolver) -> Result<(), ServerError> {
    let ct = CancellationToken::new();
    let app = routes::create_router(&config, resolver, ct.clone()).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(
        "Todoist MCP server ({:?}) listening on http://{}{}",
        config.transport,
        addr,
        config.transport.endpoint()
    );
    if config.auth.access_secret().is_none() {
        warn!("No MCP access token configured; the access gate is disabled");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(ct))
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal(ct: CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        // Without a signal handler, keep serving until the token is cancelled elsewhere
        ct.cancelled().await;
        return;
    }
    info!("Shutdown signal received");
    ct.cancel();
}
