use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;
use voxgate_core::{ErrorEnvelope, HttpError};

/// Errors that can occur on the transcription proxy path
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Request did not name the asset to transcribe
    #[error("missing required field: {field}")]
    MissingField {
        /// Name of the absent field
        field: &'static str,
    },

    /// No upstream credential configured
    #[error("upstream credential is not configured")]
    Configuration,

    /// The remote asset fetch returned a non-success status
    #[error("failed to download audio")]
    AssetDownloadFailed {
        /// Body text the remote host returned
        detail: String,
    },

    /// The asset is larger than the provider accepts
    #[error("audio asset exceeds the {limit_bytes} byte upload limit")]
    AssetTooLarge {
        limit_bytes: usize,
    },

    /// The transcription endpoint returned a non-success status
    #[error("transcription request failed")]
    TranscriptionFailed {
        /// Status reported by the transcription endpoint, mirrored to the caller
        status: StatusCode,
        /// Body text the endpoint returned
        detail: String,
    },

    /// Catch-all for transport and I/O failures on either hop
    #[error("speech proxy error")]
    Proxy(#[from] reqwest::Error),
}

impl HttpError for SpeechError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingField { .. } => StatusCode::BAD_REQUEST,
            Self::Configuration | Self::Proxy(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::AssetDownloadFailed { .. } => StatusCode::BAD_GATEWAY,
            Self::AssetTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::TranscriptionFailed { status, .. } => *status,
        }
    }

    fn client_message(&self) -> String {
        self.to_string()
    }

    fn detail(&self) -> Option<String> {
        match self {
            Self::MissingField { .. } | Self::Configuration | Self::AssetTooLarge { .. } => None,
            Self::AssetDownloadFailed { detail } | Self::TranscriptionFailed { detail, .. } => Some(detail.clone()),
            Self::Proxy(source) => Some(source.to_string()),
        }
    }
}

impl IntoResponse for SpeechError {
    fn into_response(self) -> Response {
        let envelope = ErrorEnvelope::from_http_error(&self);
        (self.status_code(), Json(envelope)).into_response()
    }
}

/// Convenience alias for speech-path results
pub type Result<T, E = SpeechError> = std::result::Result<T, E>;
