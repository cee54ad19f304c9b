//! Minimal typed client for the Todoist REST API (v1).
//!
//! Covers the five resource families exposed as MCP tools: tasks, projects,
//! sections, labels and comments. Responses are passed through as raw JSON;
//! only request arguments are typed.

mod client;
mod error;
mod types;

#[cfg(test)]
pub(crate) mod stub;

#[cfg(test)]
mod client_test;

pub use client::{DEFAULT_BASE_URL, TodoistClient};
pub use error::{TodoistError, TodoistResult};
pub use types::{
    AddCommentArgs, AddLabelArgs, AddProjectArgs, AddSectionArgs, AddTaskArgs, GetCommentsArgs,
    GetSectionsArgs, GetTasksArgs, TodoistColor, UpdateCommentArgs, UpdateLabelArgs,
    UpdateProjectArgs, UpdateSectionArgs, UpdateTaskArgs, ViewStyle,
};
