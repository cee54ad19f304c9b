use std::fmt;
use std::sync::Once;

use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};

use super::error::{TodoistError, TodoistResult};
use super::types::{
    AddCommentArgs, AddLabelArgs, AddProjectArgs, AddSectionArgs, AddTaskArgs, GetCommentsArgs,
    GetSectionsArgs, GetTasksArgs, UpdateCommentArgs, UpdateLabelArgs, UpdateProjectArgs,
    UpdateSectionArgs, UpdateTaskArgs,
};

/// Production Todoist REST API root.
pub const DEFAULT_BASE_URL: &str = "https://api.todoist.com/api/v1";

static CRYPTO_PROVIDER: Once = Once::new();

/// reqwest is built without a bundled rustls provider; install `ring` once
/// per process before the first client is built.
fn ensure_crypto_provider() {
    CRYPTO_PROVIDER.call_once(|| {
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

#[derive(Serialize)]
struct FilterQuery<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    cursor: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
}

/// Client for the Todoist REST API bound to a single API token.
///
/// Cheap to build and meant to be short-lived: one instance per tool call.
pub struct TodoistClient {
    base_url: Url,
    api_token: String,
    client: Client,
}

impl fmt::Debug for TodoistClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoistClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl TodoistClient {
    /// Create a client for `api_token` against the API rooted at `base_url`.
    ///
    /// No request is made here.
    pub fn new(api_token: impl Into<String>, base_url: &str) -> TodoistResult<Self> {
        ensure_crypto_provider();

        let base_url = Url::parse(base_url).map_err(|e| TodoistError::InvalidBaseUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(TodoistError::InvalidBaseUrl {
                url: base_url.to_string(),
                message: "URL cannot be used as a base".to_string(),
            });
        }

        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url,
            api_token: api_token.into(),
            client,
        })
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Build the URL for `segments` below the base URL.
    ///
    /// Each segment is percent-encoded, so ids cannot escape their path slot.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        self.client
            .request(method, self.url(segments))
            .bearer_auth(&self.api_token)
    }

    /// Create a GET request builder
    fn get(&self, segments: &[&str]) -> RequestBuilder {
        self.request(Method::GET, segments)
    }

    /// Create a POST request builder
    fn post(&self, segments: &[&str]) -> RequestBuilder {
        self.request(Method::POST, segments)
    }

    /// Create a DELETE request builder
    fn delete(&self, segments: &[&str]) -> RequestBuilder {
        self.request(Method::DELETE, segments)
    }

    async fn send_json(request: RequestBuilder) -> TodoistResult<Value> {
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    async fn send_empty(request: RequestBuilder) -> TodoistResult<()> {
        let response = request.send().await?;
        Self::ensure_success(response).await.map(|_| ())
    }

    /// Handle API response with standardized error handling
    ///
    /// Returns the deserialized response body on success,
    /// or a `TodoistError::Api` on non-success status codes.
    pub async fn handle_response<T: DeserializeOwned>(response: Response) -> TodoistResult<T> {
        let response = Self::ensure_success(response).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn ensure_success(response: Response) -> TodoistResult<Response> {
        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url().path(), "Todoist API response");

        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .ok()
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });
        Err(TodoistError::Api {
            status: status.as_u16(),
            message,
        })
    }

    // =========================================================================
    // Tasks
    // =========================================================================

    /// List tasks. A filter combined with a structured scope is refused
    /// rather than sent without that scope.
    #[instrument(skip(self))]
    pub async fn get_tasks(&self, args: &GetTasksArgs) -> TodoistResult<Value> {
        if let Some(field) = args.conflicting_scope() {
            return Err(TodoistError::FilterConflict { field });
        }
        let request = match &args.filter {
            Some(filter) => self.get(&["tasks", "filter"]).query(&FilterQuery {
                query: filter,
                cursor: args.cursor.as_deref(),
                limit: args.limit,
            }),
            None => self.get(&["tasks"]).query(args),
        };
        Self::send_json(request).await
    }

    #[instrument(skip(self))]
    pub async fn get_task(&self, id: &str) -> TodoistResult<Value> {
        Self::send_json(self.get(&["tasks", id])).await
    }

    #[instrument(skip(self))]
    pub async fn add_task(&self, args: &AddTaskArgs) -> TodoistResult<Value> {
        Self::send_json(self.post(&["tasks"]).json(args)).await
    }

    #[instrument(skip(self))]
    pub async fn update_task(&self, id: &str, args: &UpdateTaskArgs) -> TodoistResult<Value> {
        Self::send_json(self.post(&["tasks", id]).json(args)).await
    }

    #[instrument(skip(self))]
    pub async fn delete_task(&self, id: &str) -> TodoistResult<()> {
        Self::send_empty(self.delete(&["tasks", id])).await
    }

    #[instrument(skip(self))]
    pub async fn close_task(&self, id: &str) -> TodoistResult<()> {
        Self::send_empty(self.post(&["tasks", id, "close"])).await
    }

    #[instrument(skip(self))]
    pub async fn reopen_task(&self, id: &str) -> TodoistResult<()> {
        Self::send_empty(self.post(&["tasks", id, "reopen"])).await
    }

    // =========================================================================
    // Projects
    // =========================================================================

    #[instrument(skip(self))]
    pub async fn get_projects(&self) -> TodoistResult<Value> {
        Self::send_json(self.get(&["projects"])).await
    }

    #[instrument(skip(self))]
    pub async fn get_project(&self, id: &str) -> TodoistResult<Value> {
        Self::send_json(self.get(&["projects", id])).await
    }

    #[instrument(skip(self))]
    pub async fn add_project(&self, args: &AddProjectArgs) -> TodoistResult<Value> {
        Self::send_json(self.post(&["projects"]).json(args)).await
    }

    #[instrument(skip(self))]
    pub async fn update_project(&self, id: &str, args: &UpdateProjectArgs) -> TodoistResult<Value> {
        Self::send_json(self.post(&["projects", id]).json(args)).await
    }

    #[instrument(skip(self))]
    pub async fn delete_project(&self, id: &str) -> TodoistResult<()> {
        Self::send_empty(self.delete(&["projects", id])).await
    }

    // =========================================================================
    // Sections
    // =========================================================================

    #[instrument(skip(self))]
    pub async fn get_sections(&self, args: &GetSectionsArgs) -> TodoistResult<Value> {
        Self::send_json(self.get(&["sections"]).query(args)).await
    }

    #[instrument(skip(self))]
    pub async fn get_section(&self, id: &str) -> TodoistResult<Value> {
        Self::send_json(self.get(&["sections", id])).await
    }

    #[instrument(skip(self))]
    pub async fn add_section(&self, args: &AddSectionArgs) -> TodoistResult<Value> {
        Self::send_json(self.post(&["sections"]).json(args)).await
    }

    #[instrument(skip(self))]
    pub async fn update_section(&self, id: &str, args: &UpdateSectionArgs) -> TodoistResult<Value> {
        Self::send_json(self.post(&["sections", id]).json(args)).await
    }

    #[instrument(skip(self))]
    pub async fn delete_section(&self, id: &str) -> TodoistResult<()> {
        Self::send_empty(self.delete(&["sections", id])).await
    }

    // =========================================================================
    // Labels
    // =========================================================================

    #[instrument(skip(self))]
    pub async fn get_labels(&self) -> TodoistResult<Value> {
        Self::send_json(self.get(&["labels"])).await
    }

    #[instrument(skip(self))]
    pub async fn get_label(&self, id: &str) -> TodoistResult<Value> {
        Self::send_json(self.get(&["labels", id])).await
    }

    #[instrument(skip(self))]
    pub async fn add_label(&self, args: &AddLabelArgs) -> TodoistResult<Value> {
        Self::send_json(self.post(&["labels"]).json(args)).await
    }

    #[instrument(skip(self))]
    pub async fn update_label(&self, id: &str, args: &UpdateLabelArgs) -> TodoistResult<Value> {
        Self::send_json(self.post(&["labels", id]).json(args)).await
    }

    #[instrument(skip(self))]
    pub async fn delete_label(&self, id: &str) -> TodoistResult<()> {
        Self::send_empty(self.delete(&["labels", id])).await
    }

    // =========================================================================
    // Comments
    // =========================================================================

    #[instrument(skip(self))]
    pub async fn get_comments(&self, args: &GetCommentsArgs) -> TodoistResult<Value> {
        Self::send_json(self.get(&["comments"]).query(args)).await
    }

    #[instrument(skip(self))]
    pub async fn get_comment(&self, id: &str) -> TodoistResult<Value> {
        Self::send_json(self.get(&["comments", id])).await
    }

    #[instrument(skip(self))]
    pub async fn add_comment(&self, args: &AddCommentArgs) -> TodoistResult<Value> {
        Self::send_json(self.post(&["comments"]).json(args)).await
    }

    #[instrument(skip(self))]
    pub async fn update_comment(&self, id: &str, args: &UpdateCommentArgs) -> TodoistResult<Value> {
        Self::send_json(self.post(&["comments", id]).json(args)).await
    }

    #[instrument(skip(self))]
    pub async fn delete_comment(&self, id: &str) -> TodoistResult<()> {
        Self::send_empty(self.delete(&["comments", id])).await
    }
}
