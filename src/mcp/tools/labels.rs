//! MCP tools for Todoist personal labels.

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
use crate::todoist::{AddLabelArgs, GetTasksArgs, TodoistColor, UpdateLabelArgs};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateLabelParams {
    #[schemars(description = "Label name (required field)")]
    pub name: String,
    #[schemars(description = "Label color")]
    pub color: Option<TodoistColor>,
    #[schemars(description = "Order of the label in the list of labels")]
    pub order: Option<i64>,
    #[schemars(description = "Add label to favorites")]
    pub favorite: Option<bool>,
}

impl From<CreateLabelParams> for AddLabelArgs {
    fn from(p: CreateLabelParams) -> Self {
        Self {
            name: p.name,
            color: p.color,
            order: p.order,
            is_favorite: p.favorite,
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateLabelParams {
    #[schemars(description = "Unique label identifier for updating")]
    pub id: String,
    #[schemars(description = "New label name")]
    pub name: Option<String>,
    #[schemars(description = "New label color")]
    pub color: Option<TodoistColor>,
    #[schemars(description = "New order of the label in the list of labels")]
    pub order: Option<i64>,
    #[schemars(description = "Add/remove from favorites")]
    pub favorite: Option<bool>,
}

impl UpdateLabelParams {
    pub fn into_parts(self) -> (String, UpdateLabelArgs) {
        let args = UpdateLabelArgs {
            name: self.name,
            color: self.color,
            order: self.order,
            is_favorite: self.favorite,
        };
        (self.id, args)
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct LabelIdParams {
    #[schemars(description = "Unique label identifier")]
    pub id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetLabelTasksParams {
    #[schemars(description = "Label for filtering tasks")]
    pub label: String,
    #[schemars(description = "Project ID for filtering")]
    pub project_id: Option<String>,
    #[schemars(description = "Section ID for filtering")]
    pub section_id: Option<String>,
    #[schemars(
        description = "Filter string in Todoist format, combined with the label as '@label & (filter)'. Cannot be combined with projectId, sectionId, ids or parentId."
    )]
    pub filter: Option<String>,
    #[schemars(description = "Array of task IDs to retrieve specific tasks")]
    pub ids: Option<Vec<String>>,
    #[schemars(description = "Parent task ID to retrieve subtasks")]
    pub parent_id: Option<String>,
    #[schemars(description = "Cursor for pagination")]
    pub cursor: Option<String>,
    #[schemars(description = "Limit on the number of tasks")]
    pub limit: Option<u32>,
}

impl From<GetLabelTasksParams> for GetTasksArgs {
    fn from(p: GetLabelTasksParams) -> Self {
        Self {
            project_id: p.project_id,
            section_id: p.section_id,
            parent_id: p.parent_id,
            label: Some(p.label),
            ids: p.ids,
            filter: p.filter,
            cursor: p.cursor,
            limit: p.limit,
        }
        .fold_label()
    }
}

#[tool_router(router = label_router, vis = "pub(crate)")]
impl TodoistServer {
    #[tool(name = "getLabels", description = "Get a list of all labels in Todoist")]
    pub async fn get_labels(
        &self,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let api = resolve_api!(self, context);
        json_result(api.get_labels().await)
    }

    #[tool(name = "createLabel", description = "Create a new label in Todoist")]
    pub async fn create_label(
        &self,
        Parameters(params): Parameters<CreateLabelParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let api = resolve_api!(self, context);
        json_result(api.add_label(&params.into()).await)
    }

    #[tool(name = "updateLabel", description = "Update an existing label in Todoist")]
    pub async fn update_label(
        &self,
        Parameters(params): Parameters<UpdateLabelParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let api = resolve_api!(self, context);
        let (id, args) = params.into_parts();
        json_result(api.update_label(&id, &args).await)
    }

    #[tool(name = "deleteLabel", description = "Delete a label from Todoist")]
    pub async fn delete_label(
        &self,
        Parameters(params): Parameters<LabelIdParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let api = resolve_api!(self, context);
        Ok(message_result(
            api.delete_label(&params.id).await,
            "Label deleted successfully",
        ))
    }

    #[tool(
        name = "getLabel",
        description = "Get information about a specific label by its ID"
    )]
    pub async fn get_label(
        &self,
        Parameters(params): Parameters<LabelIdParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let api = resolve_api!(self, context);
        json_result(api.get_label(&params.id).await)
    }

    #[tool(
        name = "getLabelTasks",
        description = "Get a list of tasks with a specific label"
    )]
    pub async fn get_label_tasks(
        &self,
        Parameters(params): Parameters<GetLabelTasksParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let args: GetTasksArgs = params.into();
        validate_task_scope(&args)?;
        let api = resolve_api!(self, context);
        json_result(api.get_tasks(&args).await)
    }
}
