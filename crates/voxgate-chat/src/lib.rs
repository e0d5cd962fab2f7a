#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod client;
mod error;
mod http_client;
mod normalize;
mod protocol;
mod relay;
mod request;
mod server;

use std::sync::Arc;

use axum::{Router, extract::State, response::Response, routing::post};

pub use error::{ChatError, Result};
pub use protocol::{
    ChatMessage, ChatRequest, DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_MODEL, InputPayload, UpstreamChatRequest,
};
pub use server::{ChatServerBuilder, Server};
use request::ExtractPayload;

/// Build the chat relay server from configuration
pub fn build_server(config: &voxgate_config::Config) -> Arc<Server> {
    Arc::new(ChatServerBuilder::new(config).build())
}

/// Create the endpoint router for the chat path
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route("/api/chat", post(chat))
}

/// Handle chat relay requests
async fn chat(State(server): State<Arc<Server>>, ExtractPayload(request): ExtractPayload) -> Result<Response> {
    server.relay(request).await
}
