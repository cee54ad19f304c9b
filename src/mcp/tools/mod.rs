//! MCP tool implementations
//!
//! One module per Todoist resource. Each contributes a `ToolRouter` on
//! [`TodoistServer`](crate::mcp::TodoistServer); the server sums them.
//!
//! Every tool resolves a fresh Todoist client for its caller, forwards the
//! call and turns the outcome into a tool result. Downstream failures are
//! returned as `isError` results, never as protocol errors.

use std::fmt::Display;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde_json::{Value, json};
use tracing::warn;

use crate::todoist::{GetTasksArgs, TodoistResult};

/// Resolve the caller's Todoist client, or return the resolver failure as
/// an error tool result.
macro_rules! resolve_api {
    ($server:expr, $context:expr) => {
        match $server.resolver().resolve_for(&$context) {
            Ok(api) => api,
            Err(err) => return Ok($crate::mcp::tools::tool_error(err)),
        }
    };
}

pub mod comments;
pub mod labels;
pub mod projects;
pub mod sections;
pub mod tasks;


/// Pretty-printed downstream JSON as a single text item.
pub(crate) fn json_result(result: TodoistResult<Value>) -> Result<CallToolResult, McpError> {
    match result {
        Ok(value) => {
            let text = serde_json::to_string_pretty(&value).map_err(|e| {
                McpError::internal_error(
                    "serialization_failed",
                    Some(json!({"error": e.to_string()})),
                )
            })?;
            Ok(CallToolResult::success(vec![Content::text(text)]))
        }
        Err(err) => Ok(tool_error(err)),
    }
}

/// Fixed confirmation for operations without a response body.
pub(crate) fn message_result(result: TodoistResult<()>, message: &str) -> CallToolResult {
    match result {
        Ok(()) => CallToolResult::success(vec![Content::text(message)]),
        Err(err) => tool_error(err),
    }
}

pub(crate) fn tool_error(err: impl Display) -> CallToolResult {
    warn!(error = %err, "Tool call failed");
    CallToolResult::error(vec![Content::text(err.to_string())])
}

/// Todoist priorities run from 1 (normal) to 4 (urgent).
pub(crate) fn validate_priority(priority: Option<i32>) -> Result<(), McpError> {
    match priority {
        Some(p) if !(1..=4).contains(&p) => Err(McpError::invalid_params(
            "invalid_priority",
            Some(json!({"priority": p, "error": "priority must be between 1 and 4"})),
        )),
        _ => Ok(()),
    }
}

/// Task listings never lose their scope: a filter query that would replace
/// a structured scope is refused before any request is made.
pub(crate) fn validate_task_scope(args: &GetTasksArgs) -> Result<(), McpError> {
    match args.conflicting_scope() {
        Some(field) => Err(McpError::invalid_params(
            "conflicting_filters",
            Some(json!({
                "field": field,
                "error": format!("filter cannot be combined with {field}"),
            })),
        )),
        None => Ok(()),
    }
}
