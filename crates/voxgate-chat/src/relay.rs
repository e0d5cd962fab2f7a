//! Buffered and streaming relay of upstream responses
//!
//! The relay owns the upstream response from the moment the status line is
//! known. On the buffered path the whole body is collected before anything
//! is sent downstream; on the streaming path bytes are forwarded as they
//! arrive and the downstream connection closes when the upstream does.

use axum::Json;
use axum::body::Body;
use axum::response::{IntoResponse, Response};
use futures_util::StreamExt;
use http::{HeaderValue, header};

use crate::error::{ChatError, Result};

/// Relay a fully-buffered upstream response
///
/// The upstream's own status code is preserved. A success body that is
/// not valid JSON is a relay failure; an error body that is not valid
/// JSON is still passed along as text, since the provider's diagnostics
/// are more useful to the caller than a reinterpretation.
pub(crate) async fn buffered(upstream: reqwest::Response) -> Result<Response> {
    let status = upstream.status();
    let body = upstream.text().await.map_err(ChatError::UpstreamUnreachable)?;

    match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(json) => Ok((status, Json(json)).into_response()),
        Err(e) if status.is_success() => Err(ChatError::BadUpstreamPayload(e)),
        Err(_) => Ok((status, body).into_response()),
    }
}

/// Relay a streaming upstream response chunk-for-chunk
///
/// Event-stream headers are fixed before the first byte. Chunks are
/// forwarded verbatim with no re-framing. Once the status line has been
/// sent nothing can be retracted, so an upstream error mid-stream ends
/// the downstream body early; premature termination is the only failure
/// signal a caller can observe on this path. Ending the stream also drops
/// the upstream response, releasing its connection.
pub(crate) fn streaming(upstream: reqwest::Response) -> Response {
    let status = upstream.status();

    let passthrough = upstream.bytes_stream().scan((), |(), chunk| {
        std::future::ready(match chunk {
            Ok(bytes) => Some(Ok::<_, std::convert::Infallible>(bytes)),
            Err(e) => {
                tracing::warn!(error = %e, "upstream stream ended early");
                None
            }
        })
    });

    let mut response = Response::new(Body::from_stream(passthrough));
    *response.status_mut() = status;

    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/event-stream"));
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache, no-transform"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));

    response
}
