//! MCP server implementation
//!
//! `TodoistServer` owns the combined tool router and the resolver every
//! tool uses to reach Todoist on behalf of its caller.

use rmcp::{
    ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{ServerCapabilities, ServerInfo, Tool},
    tool_handler,
};

use super::resolver::ApiResolver;

/// MCP server exposing the Todoist API as tools.
///
/// Holds no per-caller state: the session for a call is read from the
/// call's request context, so one instance can serve any number of callers.
#[derive(Clone)]
pub struct TodoistServer {
    resolver: ApiResolver,
    tool_router: ToolRouter<Self>,
}

impl TodoistServer {
    pub fn new(resolver: ApiResolver) -> Self {
        Self {
            resolver,
            tool_router: Self::task_router()
                + Self::project_router()
                + Self::section_router()
                + Self::label_router()
                + Self::comment_router(),
        }
    }

    pub fn resolver(&self) -> &ApiResolver {
        &self.resolver
    }

    /// Every tool this server advertises.
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }
}

#[tool_handler]
impl ServerHandler for TodoistServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build()).with_instructions(
            "Todoist MCP Server - Manage tasks, projects, sections, labels and comments in Todoist"
                .to_string(),
        )
    }
}
