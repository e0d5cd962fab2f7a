use serde::{Deserialize, Serialize};

/// Transcription model used when the caller does not name one
pub const DEFAULT_MODEL: &str = "whisper-1";

/// Language hint used when the caller does not set one
pub const DEFAULT_LANGUAGE: &str = "zh";

/// Transcription request as accepted from callers
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechRequest {
    /// URL of the audio asset to transcribe
    #[serde(default)]
    pub file_url: Option<String>,
    /// Transcription model identifier
    #[serde(default)]
    pub model: Option<String>,
    /// Language hint (ISO 639-1)
    #[serde(default)]
    pub language: Option<String>,
}

/// Successful transcription reply
#[derive(Debug, Serialize, Deserialize)]
pub struct SpeechResponse {
    pub success: bool,
    /// Raw transcript text as returned by the provider
    pub text: String,
}

/// Downloaded audio ready to be re-wrapped as a multipart upload
///
/// Consumed exactly once when the form is built, then gone.
#[derive(Debug)]
pub struct AudioAsset {
    pub bytes: Vec<u8>,
    pub content_type: String,
}
