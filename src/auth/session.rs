use std::fmt;

/// Authenticated context for one request (or one stdio process).
///
/// Holds the caller's Todoist API token. A `Session` always carries a
/// non-empty token; the only way to build one is [`Session::new`].
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    api_token: String,
}

impl Session {
    /// Create a session from a token, trimming surrounding whitespace.
    ///
    /// Returns `None` when nothing is left after trimming.
    pub fn new(api_token: impl AsRef<str>) -> Option<Self> {
        let api_token = api_token.as_ref().trim();
        if api_token.is_empty() {
            return None;
        }

        Some(Self {
            api_token: api_token.to_string(),
        })
    }

    /// The Todoist API token for this session.
    pub fn api_token(&self) -> &str {
        &self.api_token
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("api_token", &"<redacted>")
            .finish()
    }
}
