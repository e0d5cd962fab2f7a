//! Request extraction for the speech path

use axum::body::Body;
use axum::response::IntoResponse;

use crate::types::SpeechRequest;

/// Loose JSON extractor for [`SpeechRequest`]
///
/// Mini-program runtimes are sloppy about request bodies: some send no
/// body at all, some send JSON without a content type. Anything absent
/// or unparseable is treated as an empty request, which then fails on
/// the missing `fileUrl` with a useful message instead of a parser error.
pub struct ExtractPayload(pub SpeechRequest);

/// Body limit for speech requests (64 KiB); the audio itself travels by URL
const BODY_LIMIT_BYTES: usize = 64 << 10;

impl<S> axum::extract::FromRequest<S> for ExtractPayload
where
    S: Send + Sync,
{
    type Rejection = axum::response::Response;

    async fn from_request(request: http::Request<Body>, _state: &S) -> Result<Self, Self::Rejection> {
        let bytes = axum::body::to_bytes(request.into_body(), BODY_LIMIT_BYTES)
            .await
            .map_err(|err| {
                (
                    http::StatusCode::BAD_REQUEST,
                    axum::Json(voxgate_core::ErrorEnvelope::new(format!(
                        "failed to read request body: {err}"
                    ))),
                )
                    .into_response()
            })?;

        let payload = serde_json::from_slice(&bytes).unwrap_or_default();

        Ok(Self(payload))
    }
}
