use thiserror::Error;

/// Error type for GraphQL operations.
///
/// - `Transport` — network unreachable, timeout, aborted request
/// - `Status` — non-2xx HTTP status with no GraphQL body
/// - `Server` — the response carried a GraphQL `errors` array
/// - `Decode` — the body did not match the expected shape
///
/// Views render every variant the same way; the distinction is for logs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("GraphQL error: {}", .0.join("; "))]
    Server(Vec<String>),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_) | FetchError::Status(_))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
