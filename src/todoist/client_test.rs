//! Tests for the Todoist API client against the in-process stub.

use axum::http::{Method, StatusCode};
use serde_json::json;

use super::stub::{STUB_TOKEN, StubTodoist};
use super::{
    AddCommentArgs, AddProjectArgs, AddTaskArgs, DEFAULT_BASE_URL, GetCommentsArgs,
    GetSectionsArgs, GetTasksArgs, TodoistClient, TodoistColor, TodoistError, UpdateTaskArgs,
    ViewStyle,
};

#[test]
fn test_new_with_default_base_url() {
    let client = TodoistClient::new("token", DEFAULT_BASE_URL).unwrap();
    assert_eq!(client.base_url(), "https://api.todoist.com/api/v1");
}

#[test]
fn test_new_rejects_invalid_base_url() {
    let err = TodoistClient::new("token", "not a url").unwrap_err();
    assert!(matches!(err, TodoistError::InvalidBaseUrl { .. }));
}

#[test]
fn test_debug_does_not_leak_token() {
    let client = TodoistClient::new("very-secret-token", DEFAULT_BASE_URL).unwrap();
    assert!(!format!("{:?}", client).contains("very-secret-token"));
}

#[tokio::test]
async fn test_requests_carry_bearer_token() {
    let stub = StubTodoist::start().await;

    stub.client().get_projects().await.unwrap();

    let request = stub.last_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/api/v1/projects");
    assert_eq!(
        request.authorization.as_deref(),
        Some(format!("Bearer {STUB_TOKEN}").as_str())
    );
}

#[tokio::test]
async fn test_get_tasks_sends_structured_filters_as_query() {
    let stub = StubTodoist::start().await;
    let args = GetTasksArgs {
        project_id: Some("2207306141".to_string()),
        ids: Some(vec!["123".to_string(), "456".to_string()]),
        limit: Some(20),
        ..Default::default()
    };

    stub.client().get_tasks(&args).await.unwrap();

    let request = stub.last_request();
    assert_eq!(request.path, "/api/v1/tasks");
    assert_eq!(
        request.query.as_deref(),
        Some("project_id=2207306141&ids=123%2C456&limit=20")
    );
}

#[tokio::test]
async fn test_get_tasks_with_filter_uses_filter_endpoint() {
    let stub = StubTodoist::start().await;
    let args = GetTasksArgs {
        filter: Some("today & @work".to_string()),
        cursor: Some("abc".to_string()),
        ..Default::default()
    };

    stub.client().get_tasks(&args).await.unwrap();

    let request = stub.last_request();
    assert_eq!(request.path, "/api/v1/tasks/filter");
    let query = request.query.unwrap();
    assert!(query.starts_with("query=today+%26+%40work"), "{query}");
    assert!(query.contains("cursor=abc"));
}

#[tokio::test]
async fn test_get_tasks_refuses_filter_with_project_scope() {
    let stub = StubTodoist::start().await;
    let args = GetTasksArgs {
        filter: Some("today".to_string()),
        project_id: Some("2207306141".to_string()),
        ..Default::default()
    };

    let err = stub.client().get_tasks(&args).await.unwrap_err();

    assert!(matches!(
        err,
        TodoistError::FilterConflict { field: "projectId" }
    ));
    assert!(stub.requests().is_empty());
}

#[tokio::test]
async fn test_add_task_posts_snake_case_body() {
    let stub = StubTodoist::start().await;
    let args = AddTaskArgs {
        content: "Write report".to_string(),
        due_string: Some("tomorrow at 3pm".to_string()),
        priority: Some(4),
        labels: Some(vec!["work".to_string()]),
        ..Default::default()
    };

    let created = stub.client().add_task(&args).await.unwrap();

    let request = stub.last_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/api/v1/tasks");
    assert_eq!(
        request.body,
        json!({
            "content": "Write report",
            "due_string": "tomorrow at 3pm",
            "priority": 4,
            "labels": ["work"],
        })
    );
    assert_eq!(created["id"], "stub-1");
}

#[tokio::test]
async fn test_update_task_posts_to_task_path() {
    let stub = StubTodoist::start().await;
    let args = UpdateTaskArgs {
        content: Some("Renamed".to_string()),
        ..Default::default()
    };

    stub.client().update_task("7025", &args).await.unwrap();

    let request = stub.last_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/api/v1/tasks/7025");
    assert_eq!(request.body, json!({"content": "Renamed"}));
}

#[tokio::test]
async fn test_task_state_transitions() {
    let stub = StubTodoist::start().await;
    let client = stub.client();

    client.close_task("1").await.unwrap();
    client.reopen_task("1").await.unwrap();
    client.delete_task("1").await.unwrap();

    let requests = stub.requests();
    let calls: Vec<_> = requests
        .iter()
        .map(|r| (r.method.as_str(), r.path.as_str()))
        .collect();
    assert_eq!(
        calls,
        vec![
            ("POST", "/api/v1/tasks/1/close"),
            ("POST", "/api/v1/tasks/1/reopen"),
            ("DELETE", "/api/v1/tasks/1"),
        ]
    );
}

#[tokio::test]
async fn test_ids_are_encoded_as_single_path_segment() {
    let stub = StubTodoist::start().await;

    stub.client().get_task("../projects").await.unwrap();

    assert_eq!(stub.last_request().path, "/api/v1/tasks/..%2Fprojects");
}

#[tokio::test]
async fn test_add_project_serializes_enums() {
    let stub = StubTodoist::start().await;
    let args = AddProjectArgs {
        name: "Home".to_string(),
        color: Some(TodoistColor::MintGreen),
        view_style: Some(ViewStyle::Board),
        is_favorite: Some(true),
        ..Default::default()
    };

    stub.client().add_project(&args).await.unwrap();

    assert_eq!(
        stub.last_request().body,
        json!({
            "name": "Home",
            "color": "mint_green",
            "is_favorite": true,
            "view_style": "board",
        })
    );
}

#[tokio::test]
async fn test_sections_and_comments_query_scopes() {
    let stub = StubTodoist::start().await;
    let client = stub.client();

    client
        .get_sections(&GetSectionsArgs {
            project_id: Some("42".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(stub.last_request().query.as_deref(), Some("project_id=42"));

    client.get_sections(&GetSectionsArgs::default()).await.unwrap();
    assert_eq!(stub.last_request().query, None);

    client
        .get_comments(&GetCommentsArgs::for_task("99"))
        .await
        .unwrap();
    assert_eq!(stub.last_request().query.as_deref(), Some("task_id=99"));

    client
        .add_comment(&AddCommentArgs::on_task("Looks good", "99"))
        .await
        .unwrap();
    assert_eq!(
        stub.last_request().body,
        json!({"content": "Looks good", "task_id": "99"})
    );
}

#[tokio::test]
async fn test_api_error_carries_status_and_message() {
    let stub = StubTodoist::failing(StatusCode::NOT_FOUND, "Task not found").await;

    let err = stub.client().get_task("missing").await.unwrap_err();

    match err {
        TodoistError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Task not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_api_error_without_body_uses_reason_phrase() {
    let stub = StubTodoist::failing(StatusCode::FORBIDDEN, "").await;

    let err = stub.client().delete_task("1").await.unwrap_err();

    assert_eq!(err.to_string(), "Todoist API error (403): Forbidden");
}

#[tokio::test]
async fn test_connection_failure() {
    // Reserve a port, then release it so nothing is listening there.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = TodoistClient::new("token", &format!("http://{addr}/api/v1")).unwrap();

    let err = client.get_projects().await.unwrap_err();
    assert!(matches!(err, TodoistError::ConnectionFailed { .. }), "{err:?}");
}
