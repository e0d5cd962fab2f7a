use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;
use voxgate_core::{ErrorEnvelope, HttpError};

/// Errors that can occur on the chat relay path
#[derive(Debug, Error)]
pub enum ChatError {
    /// Request carried neither `messages` nor `input`
    #[error("missing required field: {field}")]
    MissingField {
        /// Name of the absent field
        field: &'static str,
    },

    /// No upstream credential configured
    #[error("upstream credential is not configured")]
    Configuration,

    /// The provider endpoint could not be reached at the network level
    #[error("upstream unreachable")]
    UpstreamUnreachable(#[source] reqwest::Error),

    /// Upstream reported success but the body was not valid JSON
    #[error("invalid JSON in upstream response")]
    BadUpstreamPayload(#[source] serde_json::Error),
}

impl HttpError for ChatError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingField { .. } => StatusCode::BAD_REQUEST,
            Self::Configuration | Self::UpstreamUnreachable(_) | Self::BadUpstreamPayload(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn client_message(&self) -> String {
        self.to_string()
    }

    fn detail(&self) -> Option<String> {
        match self {
            Self::MissingField { .. } | Self::Configuration => None,
            Self::UpstreamUnreachable(source) => Some(source.to_string()),
            Self::BadUpstreamPayload(source) => Some(source.to_string()),
        }
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let envelope = ErrorEnvelope::from_http_error(&self);
        (self.status_code(), Json(envelope)).into_response()
    }
}

/// Convenience alias for chat-path results
pub type Result<T, E = ChatError> = std::result::Result<T, E>;
