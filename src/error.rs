use std::net::SocketAddr;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}")]
    #[diagnostic(
        code(todoist_mcp::server::bind),
        help("Is another process already listening on this port? Try --port")
    )]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP server error: {0}")]
    #[diagnostic(code(todoist_mcp::server::io))]
    Io(#[from] std::io::Error),

    #[error("MCP transport error: {0}")]
    #[diagnostic(code(todoist_mcp::server::mcp))]
    Mcp(String),
}
