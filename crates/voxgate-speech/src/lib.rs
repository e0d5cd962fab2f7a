#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod fetch;
mod http_client;
mod request;
mod server;
mod transcriber;
mod types;

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};

pub use error::{Result, SpeechError};
pub use server::{Server, SpeechServerBuilder};
pub use types::{DEFAULT_LANGUAGE, DEFAULT_MODEL, SpeechRequest, SpeechResponse};
use request::ExtractPayload;

/// Build the transcription proxy server from configuration
pub fn build_server(config: &voxgate_config::Config) -> Arc<Server> {
    Arc::new(SpeechServerBuilder::new(config).build())
}

/// Create the endpoint router for the speech path
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route("/api/speech", post(transcribe))
}

/// Handle transcription requests
async fn transcribe(
    State(server): State<Arc<Server>>,
    ExtractPayload(request): ExtractPayload,
) -> Result<Json<SpeechResponse>> {
    let response = server.transcribe(request).await?;

    tracing::debug!("transcription complete");

    Ok(Json(response))
}
