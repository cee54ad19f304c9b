//! Startup configuration.
//!
//! Command-line flags (with environment fallbacks) are parsed once and
//! turned into a [`Config`]. The transport mode cannot change afterwards.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use axum::http::HeaderName;
use clap::Parser;
use miette::Diagnostic;
use thiserror::Error;
use tracing::warn;

use crate::auth::{
    AccessSecret, AuthConfig, DEFAULT_ACCESS_HEADER, DEFAULT_CREDENTIAL_HEADER, Session,
};
use crate::todoist::DEFAULT_BASE_URL;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Error, Diagnostic, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid mode: {mode}")]
    #[diagnostic(
        code(todoist_mcp::config::invalid_mode),
        help("Supported modes are: stdio, sse, httpStream")
    )]
    InvalidMode { mode: String },

    #[error("Token required for stdio mode")]
    #[diagnostic(
        code(todoist_mcp::config::missing_credential),
        help("Pass --todoist-token or set the TODOIST_API_TOKEN environment variable")
    )]
    MissingCredential,

    #[error("Invalid header name: {name}")]
    #[diagnostic(code(todoist_mcp::config::invalid_header_name))]
    InvalidHeaderName { name: String },
}

#[derive(Parser, Debug)]
#[command(name = "todoist-mcp")]
#[command(author, version, about = "Todoist MCP server", long_about = None)]
pub struct Cli {
    /// Transport mode: stdio, sse or httpStream. sse speaks Streamable HTTP
    /// on /sse; legacy SSE clients (GET /sse plus POST /messages) cannot connect
    #[arg(short, long, default_value = "stdio")]
    pub mode: String,

    /// stdio: Todoist API token
    #[arg(short = 't', long, env = "TODOIST_API_TOKEN", hide_env_values = true)]
    pub todoist_token: Option<String>,

    /// sse, httpStream: token for MCP server access validation
    #[arg(short = 'a', long, env = "MCP_ACCESS_TOKEN", hide_env_values = true)]
    pub mcp_access_token: Option<String>,

    /// sse, httpStream: port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// sse, httpStream: host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// sse, httpStream: header carrying the MCP access token
    #[arg(long, default_value = DEFAULT_ACCESS_HEADER)]
    pub access_header: String,

    /// sse, httpStream: header carrying the Todoist API token
    #[arg(long, default_value = DEFAULT_CREDENTIAL_HEADER)]
    pub credential_header: String,

    /// Todoist REST API root
    #[arg(long, env = "TODOIST_API_URL", default_value = DEFAULT_BASE_URL)]
    pub todoist_api_url: String,
}

/// Transport selected with `--mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Stdio,
    Sse,
    HttpStream,
}

impl FromStr for TransportKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stdio" => Ok(Self::Stdio),
            "sse" => Ok(Self::Sse),
            "httpStream" => Ok(Self::HttpStream),
            other => Err(ConfigError::InvalidMode {
                mode: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Stdio => "stdio",
            Self::Sse => "sse",
            Self::HttpStream => "httpStream",
        })
    }
}

/// HTTP-based transports, each served on its own endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkTransport {
    Sse,
    HttpStream,
}

impl NetworkTransport {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Sse => "/sse",
            Self::HttpStream => "/mcp",
        }
    }
}

/// Listener and authentication settings for the networked transports.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    pub transport: NetworkTransport,
    pub host: IpAddr,
    pub port: u16,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone)]
pub enum TransportMode {
    /// stdio: one credential supplied at startup, no per-request auth.
    Direct { session: Session },
    /// sse / httpStream: every request passes the access gate and carries
    /// its own credential.
    Gated(NetworkConfig),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub mode: TransportMode,
    pub todoist_api_url: String,
}

impl Config {
    /// Validate parsed flags and pick the transport.
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let kind: TransportKind = cli.mode.parse()?;
        let access_secret = cli.mcp_access_token.and_then(AccessSecret::new);

        let mode = match kind {
            TransportKind::Stdio => {
                if access_secret.is_some() {
                    warn!("MCP access token is not supported for stdio mode");
                }
                let session = cli
                    .todoist_token
                    .and_then(Session::new)
                    .ok_or(ConfigError::MissingCredential)?;
                TransportMode::Direct { session }
            }
            TransportKind::Sse | TransportKind::HttpStream => {
                if cli.todoist_token.is_some() {
                    warn!(
                        "sse, httpStream modes use Todoist API token from Authorization: Bearer TOKEN header"
                    );
                }
                let transport = match kind {
                    TransportKind::Sse => NetworkTransport::Sse,
                    _ => NetworkTransport::HttpStream,
                };
                let auth = AuthConfig::new(access_secret)
                    .with_access_header(parse_header_name(&cli.access_header)?)
                    .with_credential_header(parse_header_name(&cli.credential_header)?);

                TransportMode::Gated(NetworkConfig {
                    transport,
                    host: cli.host,
                    port: cli.port,
                    auth,
                })
            }
        };

        Ok(Self {
            mode,
            todoist_api_url: cli.todoist_api_url,
        })
    }
}

fn parse_header_name(name: &str) -> Result<HeaderName, ConfigError> {
    HeaderName::from_bytes(name.trim().as_bytes()).map_err(|_| ConfigError::InvalidHeaderName {
        name: name.to_string(),
    })
}
