//! Mock upstream provider for integration tests
//!
//! Implements the completion, transcription, and asset endpoints the
//! gateway talks to, returning canned deterministic responses and
//! recording what it received so tests can assert on the wire shape.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use futures_util::StreamExt;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// Bytes served for the canned audio assets
pub const MOCK_AUDIO: &[u8] = b"\xff\xfb\x90\x00mock mpeg frames";

/// Transcript returned by the mock transcription endpoint
pub const MOCK_TRANSCRIPT: &str = "\u{4f60}\u{597d}\u{4e16}\u{754c}";

/// Mock upstream that returns predictable responses
pub struct MockUpstream {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

#[derive(Default)]
struct MockState {
    completion_count: AtomicU32,
    asset_count: AtomicU32,
    transcription_count: AtomicU32,
    /// Last body received on the completions endpoint
    last_completion_body: Mutex<Option<Value>>,
    /// Fields of the last multipart transcription request
    last_transcription: Mutex<Option<TranscriptionFields>>,
    /// Chunks emitted for streaming completions
    stream_chunks: Vec<String>,
    /// Drop the connection after the chunks instead of finishing cleanly
    abort_stream: bool,
    /// Forced status/body for responses (None = canned success)
    forced_error: Option<(u16, String)>,
}

/// What the mock transcription endpoint saw in the multipart form
#[derive(Debug, Clone, Default)]
pub struct TranscriptionFields {
    pub filename: String,
    pub content_type: String,
    pub audio: Vec<u8>,
    pub model: String,
    pub response_format: String,
    pub language: String,
}

impl MockUpstream {
    /// Start the mock server with default canned responses
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(default_chunks(), false, None).await
    }

    /// Start a mock whose streaming responses emit exactly these chunks
    pub async fn start_streaming(chunks: &[&str]) -> anyhow::Result<Self> {
        Self::start_inner(chunks.iter().map(|&c| c.to_owned()).collect(), false, None).await
    }

    /// Start a mock whose streaming responses emit the chunks then drop
    pub async fn start_streaming_aborting(chunks: &[&str]) -> anyhow::Result<Self> {
        Self::start_inner(chunks.iter().map(|&c| c.to_owned()).collect(), true, None).await
    }

    /// Start a mock that answers every API call with the given status/body
    pub async fn start_failing(status: u16, body: &str) -> anyhow::Result<Self> {
        Self::start_inner(default_chunks(), false, Some((status, body.to_owned()))).await
    }

    async fn start_inner(
        stream_chunks: Vec<String>,
        abort_stream: bool,
        forced_error: Option<(u16, String)>,
    ) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            stream_chunks,
            abort_stream,
            forced_error,
            ..MockState::default()
        });

        let app = Router::new()
            .route("/v1/responses", routing::post(handle_completions))
            .route("/v1/audio/transcriptions", routing::post(handle_transcriptions))
            .route("/assets/{name}", routing::get(handle_asset))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as the upstream provider
    ///
    /// Includes `/v1` since the gateway appends paths like `/responses`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// URL of a hosted asset
    pub fn asset_url(&self, name: &str) -> String {
        format!("http://{}/assets/{name}", self.addr)
    }

    /// Number of completion requests received
    pub fn completion_count(&self) -> u32 {
        self.state.completion_count.load(Ordering::Relaxed)
    }

    /// Number of asset downloads served
    pub fn asset_count(&self) -> u32 {
        self.state.asset_count.load(Ordering::Relaxed)
    }

    /// Number of transcription requests received
    pub fn transcription_count(&self) -> u32 {
        self.state.transcription_count.load(Ordering::Relaxed)
    }

    /// Last body posted to the completions endpoint
    pub fn last_completion_body(&self) -> Option<Value> {
        self.state.last_completion_body.lock().unwrap().clone()
    }

    /// Multipart fields of the last transcription request
    pub fn last_transcription(&self) -> Option<TranscriptionFields> {
        self.state.last_transcription.lock().unwrap().clone()
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

fn default_chunks() -> Vec<String> {
    vec![
        "data: {\"type\":\"response.output_text.delta\",\"delta\":\"Hello\"}\n\n".to_owned(),
        "data: [DONE]\n\n".to_owned(),
    ]
}

// -- Handlers --

async fn handle_completions(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    state.completion_count.fetch_add(1, Ordering::Relaxed);
    *state.last_completion_body.lock().unwrap() = Some(body.clone());

    if let Some((status, text)) = &state.forced_error {
        return forced_response(*status, text.clone());
    }

    if body.get("stream").and_then(Value::as_bool).unwrap_or(false) {
        return streaming_response(&state);
    }

    Json(canned_completion(&body)).into_response()
}

/// Deterministic completion document echoing the requested model
fn canned_completion(body: &Value) -> Value {
    serde_json::json!({
        "id": "resp_mock_1",
        "object": "response",
        "model": body.get("model").cloned().unwrap_or_default(),
        "output": [{
            "type": "message",
            "role": "assistant",
            "content": [{"type": "output_text", "text": "Hello from mock upstream"}]
        }],
        "usage": {"input_tokens": 10, "output_tokens": 5, "total_tokens": 15}
    })
}

/// Build an SSE body from the configured chunks
///
/// When aborting, the error item is delayed so the chunks are flushed to
/// the wire before the connection drops.
fn streaming_response(state: &Arc<MockState>) -> Response {
    let chunks: Vec<Result<String, std::io::Error>> = state.stream_chunks.iter().cloned().map(Ok).collect();
    let chunk_stream = futures_util::stream::iter(chunks);

    let body = if state.abort_stream {
        let failure = futures_util::stream::once(async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            Err(std::io::Error::other("mock upstream dropped the stream"))
        });
        Body::from_stream(chunk_stream.chain(failure))
    } else {
        Body::from_stream(chunk_stream)
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/event-stream")],
        body,
    )
        .into_response()
}

async fn handle_asset(State(state): State<Arc<MockState>>, Path(name): Path<String>) -> Response {
    state.asset_count.fetch_add(1, Ordering::Relaxed);

    match name.as_str() {
        "voice.mp3" => ([(header::CONTENT_TYPE, "audio/mpeg")], MOCK_AUDIO).into_response(),
        "clip.bin" => ([(header::CONTENT_TYPE, "application/octet-stream")], MOCK_AUDIO).into_response(),
        _ => (StatusCode::NOT_FOUND, "asset not found").into_response(),
    }
}

async fn handle_transcriptions(State(state): State<Arc<MockState>>, mut multipart: Multipart) -> Response {
    state.transcription_count.fetch_add(1, Ordering::Relaxed);

    if let Some((status, text)) = &state.forced_error {
        return forced_response(*status, text.clone());
    }

    let mut fields = TranscriptionFields::default();

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or("").to_owned();
        match name.as_str() {
            "file" => {
                fields.filename = field.file_name().unwrap_or("").to_owned();
                fields.content_type = field.content_type().unwrap_or("").to_owned();
                fields.audio = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
            }
            "model" => fields.model = field.text().await.unwrap_or_default(),
            "response_format" => fields.response_format = field.text().await.unwrap_or_default(),
            "language" => fields.language = field.text().await.unwrap_or_default(),
            _ => {}
        }
    }

    *state.last_transcription.lock().unwrap() = Some(fields);

    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        MOCK_TRANSCRIPT,
    )
        .into_response()
}

fn forced_response(status: u16, body: String) -> Response {
    (
        StatusCode::from_u16(status).expect("valid mock status"),
        body,
    )
        .into_response()
}
