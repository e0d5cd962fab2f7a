//! Wire formats for the chat relay
//!
//! Callers reach the gateway with a message-oriented payload in one of
//! several historical shapes; the provider only ever sees the canonical
//! request built by [`crate::normalize`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Model used when the caller does not name one
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Output-token budget used when the caller does not set one
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 300;

/// Chat request as accepted from callers
///
/// Either a prepared `input` sequence or a `messages` array may be sent;
/// the legacy `max_completion_tokens` name is accepted alongside
/// `max_output_tokens`. Unknown extra fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub model: Option<String>,
    /// Conversation turns to project onto the canonical input sequence
    #[serde(default)]
    pub messages: Option<Vec<ChatMessage>>,
    /// Prepared input sequence, forwarded verbatim
    #[serde(default)]
    pub input: Option<Value>,
    /// Accepted for compatibility; not part of the canonical field set
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub max_output_tokens: Option<u32>,
    /// Legacy name for `max_output_tokens`
    #[serde(default)]
    pub max_completion_tokens: Option<u32>,
    /// Only a literal `true` selects the streaming path
    #[serde(default, deserialize_with = "literal_true")]
    pub stream: bool,
}

/// One caller-supplied conversation turn
///
/// Roles are not validated here; the provider is the authority on which
/// roles exist, so unrecognized ones pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    #[serde(default)]
    pub content: Value,
}

/// Canonical request sent upstream
///
/// Built once per call and never mutated; serializes exactly these four
/// fields so no caller-supplied extras can leak to the provider.
#[derive(Debug, Serialize)]
pub struct UpstreamChatRequest {
    pub model: String,
    pub input: InputPayload,
    pub max_output_tokens: u32,
    pub stream: bool,
}

/// Input sequence of the canonical request
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum InputPayload {
    /// Caller-prepared input, relayed as received
    Raw(Value),
    /// Ordered projection of a caller `messages` array
    Messages(Vec<ChatMessage>),
}

/// Deserialize any JSON value, treating only a literal `true` as true
///
/// Callers have historically sent `"true"`, `1`, or nothing at all; all
/// of those select the buffered path.
fn literal_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(matches!(value, Value::Bool(true)))
}
