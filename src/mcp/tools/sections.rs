//! MCP tools for Todoist sections.

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
use crate::todoist::{AddSectionArgs, GetSectionsArgs, GetTasksArgs, UpdateSectionArgs};

#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetSectionsParams {
    #[schemars(description = "Project ID for filtering sections (example: '2207306141')")]
    pub project_id: Option<String>,
}

impl From<GetSectionsParams> for GetSectionsArgs {
    fn from(p: GetSectionsParams) -> Self {
        Self {
            project_id: p.project_id,
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSectionParams {
    #[schemars(description = "Section name (required)")]
    pub name: String,
    #[schemars(
        description = "Project ID the section belongs to (required, example: '2207306141')"
    )]
    pub project_id: String,
    #[schemars(description = "Section order in the project (starting from 1)")]
    pub order: Option<i64>,
}

impl From<CreateSectionParams> for AddSectionArgs {
    fn from(p: CreateSectionParams) -> Self {
        Self {
            name: p.name,
            project_id: p.project_id,
            order: p.order,
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateSectionParams {
    #[schemars(description = "Unique section identifier (example: '7025')")]
    pub id: String,
    #[schemars(description = "New section name (required)")]
    pub name: String,
    #[schemars(description = "New section order (starting from 1)")]
    pub order: Option<i64>,
}

impl UpdateSectionParams {
    pub fn into_parts(self) -> (String, UpdateSectionArgs) {
        let args = UpdateSectionArgs {
            name: self.name,
            order: self.order,
        };
        (self.id, args)
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SectionIdParams {
    #[schemars(description = "Unique section identifier (example: '7025')")]
    pub id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetSectionTasksParams {
    #[schemars(description = "Section ID (example: '7025')")]
    pub section_id: String,
    #[schemars(description = "Project ID for filtering (example: '2207306141')")]
    pub project_id: Option<String>,
    #[schemars(description = "Label name for filtering (example: 'important')")]
    pub label: Option<String>,
    #[schemars(
        description = "Filter string in Todoist format. Cannot be combined with the section scope; use getTasksByFilter instead."
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

impl From<GetSectionTasksParams> for GetTasksArgs {
    fn from(p: GetSectionTasksParams) -> Self {
        Self {
            project_id: p.project_id,
            section_id: Some(p.section_id),
            parent_id: p.parent_id,
            label: p.label,
            ids: p.ids,
            filter: p.filter,
            cursor: p.cursor,
            limit: p.limit,
        }
    }
}

#[tool_router(router = section_router, vis = "pub(crate)")]
impl TodoistServer {
    #[tool(
        name = "getSections",
        description = "Get a list of sections, optionally limited to one project"
    )]
    pub async fn get_sections(
        &self,
        Parameters(params): Parameters<GetSectionsParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let api = resolve_api!(self, context);
        json_result(api.get_sections(&params.into()).await)
    }

    #[tool(
        name = "createSection",
        description = "Create a new section in a Todoist project"
    )]
    pub async fn create_section(
        &self,
        Parameters(params): Parameters<CreateSectionParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let api = resolve_api!(self, context);
        json_result(api.add_section(&params.into()).await)
    }

    #[tool(
        name = "updateSection",
        description = "Update an existing section in Todoist"
    )]
    pub async fn update_section(
        &self,
        Parameters(params): Parameters<UpdateSectionParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let api = resolve_api!(self, context);
        let (id, args) = params.into_parts();
        json_result(api.update_section(&id, &args).await)
    }

    #[tool(name = "deleteSection", description = "Delete a section from Todoist")]
    pub async fn delete_section(
        &self,
        Parameters(params): Parameters<SectionIdParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let api = resolve_api!(self, context);
        Ok(message_result(
            api.delete_section(&params.id).await,
            "Section deleted successfully",
        ))
    }

    #[tool(
        name = "getSection",
        description = "Get information about a specific section by its ID"
    )]
    pub async fn get_section(
        &self,
        Parameters(params): Parameters<SectionIdParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let api = resolve_api!(self, context);
        json_result(api.get_section(&params.id).await)
    }

    #[tool(
        name = "getSectionTasks",
        description = "Get a list of tasks from a specific section"
    )]
    pub async fn get_section_tasks(
        &self,
        Parameters(params): Parameters<GetSectionTasksParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let args: GetTasksArgs = params.into();
        validate_task_scope(&args)?;
        let api = resolve_api!(self, context);
        json_result(api.get_tasks(&args).await)
    }
}
