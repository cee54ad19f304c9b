//! Model Context Protocol (MCP) server implementation
//!
//! - **server**: `TodoistServer`, the `ServerHandler` combining every tool router
//! - **tools**: one module per Todoist resource (tasks, projects, sections,
//!   labels, comments)
//! - **resolver**: builds the per-call Todoist client from the caller's session
//! - **service**: stdio and Streamable HTTP transports

mod resolver;
pub mod server;
mod service;
pub mod tools;


pub use resolver::{ApiResolver, CredentialSource, ResolveError};
pub use server::TodoistServer;
pub use service::{create_mcp_service, serve_stdio};
