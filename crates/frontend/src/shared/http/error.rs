use serde_json::Value;
use thiserror::Error;

/// Everything an API call can fail with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never reached the server (offline, DNS, CORS, refused).
    #[error("Unable to reach the server: {0}")]
    Network(String),

    /// The runtime refused to build or send the request.
    #[error("{0}")]
    Transport(String),

    /// Non-2xx answer. `message` comes from the body or the status line.
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        body: Value,
    },

    /// 2xx answer whose body does not match the expected shape.
    #[error("Unexpected response from server: {0}")]
    Decode(String),

    #[error("Could not encode request: {0}")]
    Encode(String),

    /// Rejected locally before any request was issued.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The server rejected our credentials.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// Message for the inline error area of the view that issued `action`.
    pub fn inline_message(&self, action: &str) -> String {
        format!("Failed to {}: {}", action, self)
    }
}
