pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod mcp;
pub mod todoist;


use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, TransportMode};
use crate::error::ServerError;
use crate::mcp::ApiResolver;

/// Initialize tracing subscriber with env filter.
///
/// Logs go to stderr: stdout belongs to the stdio transport.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todoist_mcp=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Run the server in the configured transport mode.
pub async fn run(config: Config) -> Result<(), ServerError> {
    match config.mode {
        TransportMode::Direct { session } => {
            let resolver = ApiResolver::direct(Some(session)).with_base_url(config.todoist_api_url);
            mcp::serve_stdio(resolver).await
        }
        TransportMode::Gated(network) => {
            info!(transport = ?network.transport, "Starting networked MCP server");
            let resolver = ApiResolver::per_request().with_base_url(config.todoist_api_url);
            api::run(network, resolver).await
        }
    }
}
