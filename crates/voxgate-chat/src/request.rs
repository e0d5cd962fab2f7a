//! Request extraction for the chat path

use axum::body::Body;
use axum::response::IntoResponse;

use crate::protocol::ChatRequest;

/// Loose JSON extractor for [`ChatRequest`]
///
/// An absent or unparseable body is treated as a request with no fields,
/// which then fails on the missing `messages`/`input` pair with a useful
/// message instead of a content-type rejection.
pub struct ExtractPayload(pub ChatRequest);

/// Body limit for chat requests (1 MiB); conversations can run long
const BODY_LIMIT_BYTES: usize = 1 << 20;

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
