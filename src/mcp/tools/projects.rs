//! MCP tools for Todoist projects.

use rmcp::{
    ErrorData as McpError, RoleServer,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    schemars::JsonSchema,
    service::RequestContext,
    tool, tool_router,
};
use serde::Deserialize;

use crate::mcp::TodoistServer;
use crate::mcp::tools::{json_result, message_result, validate_task_scope};
use crate::todoist::{AddProjectArgs, GetTasksArgs, TodoistColor, UpdateProjectArgs, ViewStyle};

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectParams {
    #[schemars(description = "Project name (required)")]
    pub name: String,
    #[schemars(description = "Parent project ID (example: '2207306141')")]
    pub parent_id: Option<String>,
    #[schemars(description = "Project color")]
    pub color: Option<TodoistColor>,
    #[schemars(description = "Add to favorites (true/false)")]
    pub favorite: Option<bool>,
    #[schemars(description = "Project view style: 'list' or 'board'")]
    pub view_style: Option<ViewStyle>,
}

impl From<CreateProjectParams> for AddProjectArgs {
    fn from(p: CreateProjectParams) -> Self {
        Self {
            name: p.name,
            parent_id: p.parent_id,
            color: p.color,
            is_favorite: p.favorite,
            view_style: p.view_style,
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectParams {
    #[schemars(description = "Unique project identifier (example: '2207306141')")]
    pub id: String,
    #[schemars(description = "New project name")]
    pub name: Option<String>,
    #[schemars(description = "New project color")]
    pub color: Option<TodoistColor>,
    #[schemars(description = "Add/remove from favorites (true/false)")]
    pub favorite: Option<bool>,
    #[schemars(description = "New view style: 'list' or 'board'")]
    pub view_style: Option<ViewStyle>,
}

impl UpdateProjectParams {
    pub fn into_parts(self) -> (String, UpdateProjectArgs) {
        let args = UpdateProjectArgs {
            name: self.name,
            color: self.color,
            is_favorite: self.favorite,
            view_style: self.view_style,
        };
        (self.id, args)
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ProjectIdParams {
    #[schemars(description = "Unique project identifier (example: '2207306141')")]
    pub id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetProjectTasksParams {
    #[schemars(description = "Project ID (example: '2207306141')")]
    pub project_id: String,
    #[schemars(description = "Section ID for filtering (example: '7025')")]
    pub section_id: Option<String>,
    #[schemars(description = "Label name for filtering (example: 'important')")]
    pub label: Option<String>,
    #[schemars(
        description = "Filter string in Todoist format. Cannot be combined with the project scope; use getTasksByFilter instead."
    )]
    pub filter: Option<String>,
    #[schemars(
        description = "Array of task IDs to retrieve specific tasks (example: ['123', '456'])"
    )]
    pub ids: Option<Vec<String>>,
    #[schemars(description = "Parent task ID to retrieve subtasks (example: '7025')")]
    pub parent_id: Option<String>,
    #[schemars(description = "Cursor for pagination (obtained from previous request)")]
    pub cursor: Option<String>,
    #[schemars(description = "Limit on the number of tasks (default: 30, maximum: 50)")]
    pub limit: Option<u32>,
}

impl From<GetProjectTasksParams> for GetTasksArgs {
    fn from(p: GetProjectTasksParams) -> Self {
        Self {
            project_id: Some(p.project_id),
            section_id: p.section_id,
            parent_id: p.parent_id,
            label: p.label,
            ids: p.ids,
            filter: p.filter,
            cursor: p.cursor,
            limit: p.limit,
        }
    }
}

#[tool_router(router = project_router, vis = "pub(crate)")]
impl TodoistServer {
    #[tool(
        name = "getProjects",
        description = "Get a list of all projects in Todoist"
    )]
    pub async fn get_projects(
        &self,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let api = resolve_api!(self, context);
        json_result(api.get_projects().await)
    }

    #[tool(name = "createProject", description = "Create a new project in Todoist")]
    pub async fn create_project(
        &self,
        Parameters(params): Parameters<CreateProjectParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let api = resolve_api!(self, context);
        json_result(api.add_project(&params.into()).await)
    }

    #[tool(
        name = "updateProject",
        description = "Update an existing project in Todoist"
    )]
    pub async fn update_project(
        &self,
        Parameters(params): Parameters<UpdateProjectParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let api = resolve_api!(self, context);
        let (id, args) = params.into_parts();
        json_result(api.update_project(&id, &args).await)
    }

    #[tool(name = "deleteProject", description = "Delete a project from Todoist")]
    pub async fn delete_project(
        &self,
        Parameters(params): Parameters<ProjectIdParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let api = resolve_api!(self, context);
        Ok(message_result(
            api.delete_project(&params.id).await,
            "Project deleted successfully",
        ))
    }

    #[tool(
        name = "getProject",
        description = "Get information about a specific project by its ID"
    )]
    pub async fn get_project(
        &self,
        Parameters(params): Parameters<ProjectIdParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let api = resolve_api!(self, context);
        json_result(api.get_project(&params.id).await)
    }

    #[tool(
        name = "getProjectTasks",
        description = "Get a list of tasks from a specific project"
    )]
    pub async fn get_project_tasks(
        &self,
        Parameters(params): Parameters<GetProjectTasksParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let args: GetTasksArgs = params.into();
        validate_task_scope(&args)?;
        let api = resolve_api!(self, context);
        json_result(api.get_tasks(&args).await)
    }
}
