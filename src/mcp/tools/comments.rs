//! MCP tools for Todoist comments.
//!
//! A comment belongs to exactly one task or one project, so listing and
//! creation come in task and project flavours.

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
use crate::mcp::tools::{json_result, message_result};
use crate::todoist::{AddCommentArgs, GetCommentsArgs, UpdateCommentArgs};

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskCommentsParams {
    #[schemars(description = "Task ID for filtering")]
    pub task_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCommentsParams {
    #[schemars(description = "Project ID for filtering")]
    pub project_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskCommentParams {
    #[schemars(description = "Comment text")]
    pub content: String,
    #[schemars(description = "Task ID")]
    pub task_id: String,
}

impl From<CreateTaskCommentParams> for AddCommentArgs {
    fn from(p: CreateTaskCommentParams) -> Self {
        AddCommentArgs::on_task(p.content, p.task_id)
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectCommentParams {
    #[schemars(description = "Comment text")]
    pub content: String,
    #[schemars(description = "Project ID")]
    pub project_id: String,
}

impl From<CreateProjectCommentParams> for AddCommentArgs {
    fn from(p: CreateProjectCommentParams) -> Self {
        AddCommentArgs::on_project(p.content, p.project_id)
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateCommentParams {
    #[schemars(description = "Unique comment identifier")]
    pub id: String,
    #[schemars(description = "New comment text")]
    pub content: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CommentIdParams {
    #[schemars(description = "Unique comment identifier")]
    pub id: String,
}

#[tool_router(router = comment_router, vis = "pub(crate)")]
impl TodoistServer {
    #[tool(
        name = "getTaskComments",
        description = "Get a list of comments for a specific task in Todoist"
    )]
    pub async fn get_task_comments(
        &self,
        Parameters(params): Parameters<TaskCommentsParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let api = resolve_api!(self, context);
        json_result(
            api.get_comments(&GetCommentsArgs::for_task(params.task_id))
                .await,
        )
    }

    #[tool(
        name = "getProjectComments",
        description = "Get a list of comments for a specific project in Todoist"
    )]
    pub async fn get_project_comments(
        &self,
        Parameters(params): Parameters<ProjectCommentsParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let api = resolve_api!(self, context);
        json_result(
            api.get_comments(&GetCommentsArgs::for_project(params.project_id))
                .await,
        )
    }

    #[tool(
        name = "createTaskComment",
        description = "Create a new comment for a task in Todoist"
    )]
    pub async fn create_task_comment(
        &self,
        Parameters(params): Parameters<CreateTaskCommentParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let api = resolve_api!(self, context);
        json_result(api.add_comment(&params.into()).await)
    }

    #[tool(
        name = "createProjectComment",
        description = "Create a new comment for a project in Todoist"
    )]
    pub async fn create_project_comment(
        &self,
        Parameters(params): Parameters<CreateProjectCommentParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let api = resolve_api!(self, context);
        json_result(api.add_comment(&params.into()).await)
    }

    #[tool(
        name = "updateComment",
        description = "Update an existing comment in Todoist"
    )]
    pub async fn update_comment(
        &self,
        Parameters(params): Parameters<UpdateCommentParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let api = resolve_api!(self, context);
        let args = UpdateCommentArgs {
            content: params.content,
        };
        json_result(api.update_comment(&params.id, &args).await)
    }

    #[tool(name = "deleteComment", description = "Delete a comment from Todoist")]
    pub async fn delete_comment(
        &self,
        Parameters(params): Parameters<CommentIdParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let api = resolve_api!(self, context);
        Ok(message_result(
            api.delete_comment(&params.id).await,
            "Comment deleted successfully",
        ))
    }

    #[tool(
        name = "getComment",
        description = "Get information about a specific comment by its ID"
    )]
    pub async fn get_comment(
        &self,
        Parameters(params): Parameters<CommentIdParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let api = resolve_api!(self, context);
        json_result(api.get_comment(&params.id).await)
    }
}
