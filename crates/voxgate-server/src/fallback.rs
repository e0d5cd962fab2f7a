use axum::Json;
use http::StatusCode;
use voxgate_core::ErrorEnvelope;

/// Uniform 405 for known paths hit with a verb other than the allowed one
///
/// Axum's default method-not-allowed response has an empty body; callers
/// of this gateway expect the envelope shape on every failure.
pub async fn method_not_allowed() -> (StatusCode, Json<ErrorEnvelope>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorEnvelope::new("method not allowed")),
    )
}
