//! Todoist MCP server binary.

use clap::Parser;
use miette::Result;
use todoist_mcp::config::{Cli, Config};

#[tokio::main]
async fn main() -> Result<()> {
    todoist_mcp::init_tracing();

    let config = Config::from_cli(Cli::parse())?;
    todoist_mcp::run(config).await?;

    Ok(())
}
