//! MCP tools for Todoist tasks.

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
use crate::mcp::tools::{
    json_result, message_result, validate_priority, validate_task_scope,
};
use crate::todoist::{AddTaskArgs, GetTasksArgs, UpdateTaskArgs};

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTasksParams {
    #[schemars(description = "Project ID for filtering (example: '2207306141')")]
    pub project_id: Option<String>,
    #[schemars(description = "Section ID for filtering (example: '7025')")]
    pub section_id: Option<String>,
    #[schemars(description = "Label name for filtering (example: 'important')")]
    pub label: Option<String>,
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

impl From<GetTasksParams> for GetTasksArgs {
    fn from(p: GetTasksParams) -> Self {
        Self {
            project_id: p.project_id,
            section_id: p.section_id,
            parent_id: p.parent_id,
            label: p.label,
            ids: p.ids,
            filter: None,
            cursor: p.cursor,
            limit: p.limit,
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTasksByFilterParams {
    #[schemars(
        description = "Filter string in Todoist format (example: 'today & #Work & /Meetings')"
    )]
    pub filter: String,
    #[schemars(
        description = "Label name combined with the filter as '@label & (filter)' (example: 'important')"
    )]
    pub label: Option<String>,
    #[schemars(description = "Cursor for pagination (obtained from previous request)")]
    pub cursor: Option<String>,
    #[schemars(description = "Limit on the number of tasks (default: 30, maximum: 50)")]
    pub limit: Option<u32>,
}

impl From<GetTasksByFilterParams> for GetTasksArgs {
    fn from(p: GetTasksByFilterParams) -> Self {
        Self {
            label: p.label,
            filter: Some(p.filter),
            cursor: p.cursor,
            limit: p.limit,
            ..Default::default()
        }
        .fold_label()
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskParams {
    #[schemars(description = "Task text (required)")]
    pub content: String,
    #[schemars(description = "Detailed text description of the task")]
    pub description: Option<String>,
    #[schemars(
        description = "Project ID (example: '2207306141'). The task goes to the Inbox when omitted."
    )]
    pub project_id: Option<String>,
    #[schemars(description = "Section ID in the project (example: '7025')")]
    pub section_id: Option<String>,
    #[schemars(description = "Parent task ID (for creating a subtask)")]
    pub parent_id: Option<String>,
    #[schemars(description = "Task order in the list (integer)")]
    pub order: Option<i64>,
    #[schemars(description = "Array of label names (example: ['work', 'urgent'])")]
    pub labels: Option<Vec<String>>,
    #[schemars(description = "Task priority: 4 (highest) - 1 (lowest)")]
    pub priority: Option<i32>,
    #[schemars(description = "Due date in natural language (example: 'tomorrow at 3pm')")]
    pub due_string: Option<String>,
    #[schemars(description = "Due date in YYYY-MM-DD format (example: '2024-03-20')")]
    pub due_date: Option<String>,
    #[schemars(
        description = "Due date and time in RFC3339 format (example: '2024-03-20T15:00:00Z')"
    )]
    pub due_datetime: Option<String>,
    #[schemars(description = "Language for processing dueString (example: 'ru', 'en')")]
    pub due_lang: Option<String>,
    #[schemars(description = "ID of the user to whom the task is assigned")]
    pub assignee_id: Option<String>,
}

impl From<CreateTaskParams> for AddTaskArgs {
    fn from(p: CreateTaskParams) -> Self {
        Self {
            content: p.content,
            description: p.description,
            project_id: p.project_id,
            section_id: p.section_id,
            parent_id: p.parent_id,
            order: p.order,
            labels: p.labels,
            priority: p.priority,
            due_string: p.due_string,
            due_date: p.due_date,
            due_datetime: p.due_datetime,
            due_lang: p.due_lang,
            assignee_id: p.assignee_id,
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskParams {
    #[schemars(description = "Unique task identifier (example: '7025')")]
    pub id: String,
    #[schemars(description = "New task text")]
    pub content: Option<String>,
    #[schemars(description = "New task description")]
    pub description: Option<String>,
    #[schemars(description = "New project ID (example: '2207306141')")]
    pub project_id: Option<String>,
    #[schemars(description = "New section ID (example: '7025')")]
    pub section_id: Option<String>,
    #[schemars(description = "New parent task ID")]
    pub parent_id: Option<String>,
    #[schemars(description = "New task order in the list (integer)")]
    pub order: Option<i64>,
    #[schemars(description = "New array of label names (example: ['work', 'urgent'])")]
    pub labels: Option<Vec<String>>,
    #[schemars(description = "New task priority: 4 (highest) - 1 (lowest)")]
    pub priority: Option<i32>,
    #[schemars(description = "New due date in text format (example: 'tomorrow at 3pm')")]
    pub due_string: Option<String>,
    #[schemars(description = "New due date in YYYY-MM-DD format (example: '2024-03-20')")]
    pub due_date: Option<String>,
    #[schemars(description = "New due date and time in RFC3339 format")]
    pub due_datetime: Option<String>,
    #[schemars(description = "Language for processing dueString")]
    pub due_lang: Option<String>,
    #[schemars(description = "New assignee ID")]
    pub assignee_id: Option<String>,
}

impl UpdateTaskParams {
    /// Split into the task id and the fields to change.
    pub fn into_parts(self) -> (String, UpdateTaskArgs) {
        let args = UpdateTaskArgs {
            content: self.content,
            description: self.description,
            project_id: self.project_id,
            section_id: self.section_id,
            parent_id: self.parent_id,
            order: self.order,
            labels: self.labels,
            priority: self.priority,
            due_string: self.due_string,
            due_date: self.due_date,
            due_datetime: self.due_datetime,
            due_lang: self.due_lang,
            assignee_id: self.assignee_id,
        };
        (self.id, args)
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct TaskIdParams {
    #[schemars(description = "Unique task identifier (example: '7025')")]
    pub id: String,
}

// =============================================================================
// Task Tools
// =============================================================================

#[tool_router(router = task_router, vis = "pub(crate)")]
impl TodoistServer {
    #[tool(
        name = "getTasks",
        description = "Get a list of tasks from Todoist with optional filters"
    )]
    pub async fn get_tasks(
        &self,
        Parameters(params): Parameters<GetTasksParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let api = resolve_api!(self, context);
        json_result(api.get_tasks(&params.into()).await)
    }

    #[tool(
        name = "getTasksByFilter",
        description = "Get tasks matching a Todoist filter query (example: 'today & @important')"
    )]
    pub async fn get_tasks_by_filter(
        &self,
        Parameters(params): Parameters<GetTasksByFilterParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let args: GetTasksArgs = params.into();
        validate_task_scope(&args)?;
        let api = resolve_api!(self, context);
        json_result(api.get_tasks(&args).await)
    }

    #[tool(name = "createTask", description = "Create a new task in Todoist")]
    pub async fn create_task(
        &self,
        Parameters(params): Parameters<CreateTaskParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        validate_priority(params.priority)?;
        let api = resolve_api!(self, context);
        json_result(api.add_task(&params.into()).await)
    }

    #[tool(name = "updateTask", description = "Update an existing task in Todoist")]
    pub async fn update_task(
        &self,
        Parameters(params): Parameters<UpdateTaskParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        validate_priority(params.priority)?;
        let api = resolve_api!(self, context);
        let (id, args) = params.into_parts();
        json_result(api.update_task(&id, &args).await)
    }

    #[tool(name = "deleteTask", description = "Delete a task from Todoist")]
    pub async fn delete_task(
        &self,
        Parameters(params): Parameters<TaskIdParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let api = resolve_api!(self, context);
        Ok(message_result(
            api.delete_task(&params.id).await,
            "Task deleted successfully",
        ))
    }

    #[tool(
        name = "getTask",
        description = "Get information about a specific task by its ID"
    )]
    pub async fn get_task(
        &self,
        Parameters(params): Parameters<TaskIdParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let api = resolve_api!(self, context);
        json_result(api.get_task(&params.id).await)
    }

    #[tool(name = "closeTask", description = "Mark a task as completed in Todoist")]
    pub async fn close_task(
        &self,
        Parameters(params): Parameters<TaskIdParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let api = resolve_api!(self, context);
        Ok(message_result(
            api.close_task(&params.id).await,
            "Task closed successfully",
        ))
    }

    #[tool(
        name = "reopenTask",
        description = "Reopen a previously completed task in Todoist"
    )]
    pub async fn reopen_task(
        &self,
        Parameters(params): Parameters<TaskIdParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let api = resolve_api!(self, context);
        Ok(message_result(
            api.reopen_task(&params.id).await,
            "Task reopened successfully",
        ))
    }
}
