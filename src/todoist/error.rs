use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoistError {
    #[error("Failed to connect to the Todoist API")]
    ConnectionFailed {
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to build HTTP client")]
    ClientBuild {
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid Todoist API URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    #[error("Invalid response from the Todoist API: {message}")]
    InvalidResponse { message: String },

    #[error("A filter query cannot be combined with {field}")]
    FilterConflict { field: &'static str },

    #[error("Todoist API error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl From<reqwest::Error> for TodoistError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            TodoistError::ClientBuild { source: e }
        } else if e.is_connect() || e.is_timeout() {
            TodoistError::ConnectionFailed { source: e }
        } else {
            TodoistError::InvalidResponse {
                message: e.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for TodoistError {
    fn from(e: serde_json::Error) -> Self {
        TodoistError::InvalidResponse {
            message: e.to_string(),
        }
    }
}

pub type TodoistResult<T> = Result<T, TodoistError>;
