//! Projection of caller payloads onto the canonical upstream request
//!
//! Several generations of callers exist in the wild; this module is the
//! single place where their shapes collapse into one.

use crate::error::{ChatError, Result};
use crate::protocol::{ChatRequest, DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_MODEL, InputPayload, UpstreamChatRequest};

/// Build the canonical upstream request from a caller payload
///
/// A prepared `input` wins over `messages` when both are present; a
/// `messages` array is projected in order with no filtering. Requests
/// carrying neither are rejected.
///
/// # Errors
///
/// Returns [`ChatError::MissingField`] when the request has neither
/// `messages` nor `input`.
pub fn normalize(request: ChatRequest) -> Result<UpstreamChatRequest> {
    let model = request.model.unwrap_or_else(|| DEFAULT_MODEL.to_owned());

    let input = match (request.input, request.messages) {
        (Some(input), _) => InputPayload::Raw(input),
        (None, Some(messages)) => InputPayload::Messages(messages),
        (None, None) => return Err(ChatError::MissingField { field: "messages" }),
    };

    // Current field name wins over the legacy one when both appear
    let max_output_tokens = request
        .max_output_tokens
        .or(request.max_completion_tokens)
        .unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS);

    Ok(UpstreamChatRequest {
        model,
        input,
        max_output_tokens,
        stream: request.stream,
    })
}
