use serde::{Deserialize, Serialize};

use crate::HttpError;

/// Uniform failure shape returned to callers on every error path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Short human-readable description of what went wrong
    pub error: String,
    /// Diagnostic detail, typically an upstream body or transport message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: None,
        }
    }

    /// Build the envelope for a domain error
    pub fn from_http_error<E: HttpError + ?Sized>(error: &E) -> Self {
        Self {
            error: error.client_message(),
            detail: error.detail(),
        }
    }
}
