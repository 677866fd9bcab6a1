// Error types shared by the resource client and the view model

use thiserror::Error;

use crate::models::{RecordId, ResourceKind};

// Errors a resource call can produce. Unresolved foreign keys are not here:
// they are a normal `Resolved::Unknown` value, never an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResourceError {
    #[error("{} #{id} not found", .kind.label())]
    NotFound { kind: ResourceKind, id: RecordId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl ResourceError {
    // Fetch failures never bring the process down, the screen shows an error state instead
    pub fn is_recoverable(&self) -> bool {
        true
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ResourceError::NotFound { .. })
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        ResourceError::Validation(message.into())
    }
}

impl From<reqwest::Error> for ResourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ResourceError::Decode(err.to_string())
        } else {
            ResourceError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ResourceError {
    fn from(err: serde_json::Error) -> Self {
        ResourceError::Decode(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Initialization error: {0}")]
    InitError(String),
}
