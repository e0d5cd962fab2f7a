use secrecy::{ExposeSecret, SecretString};

use crate::error::{Result, SpeechError};
use crate::types::AudioAsset;

/// Default provider API base URL
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Filename presented to the transcription endpoint
const AUDIO_FILENAME: &str = "voice.mp3";

/// Client for the provider transcription endpoint
pub(crate) struct Transcriber {
    client: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

impl Transcriber {
    pub fn new(client: reqwest::Client, api_key: SecretString, base_url: Option<String>) -> Self {
        let base_url = base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_owned();

        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Wrap the asset in a multipart form and submit it for transcription
    ///
    /// `response_format` is pinned to `text`, so on success the body itself
    /// is the transcript. The multipart boundary header comes from the
    /// form; no JSON content type is set on this request.
    pub async fn transcribe(&self, asset: AudioAsset, model: String, language: String) -> Result<String> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        tracing::debug!(bytes = asset.bytes.len(), %model, %language, "transcription request");

        let file = reqwest::multipart::Part::bytes(asset.bytes)
            .file_name(AUDIO_FILENAME)
            .mime_str(&asset.content_type)?;

        let form = reqwest::multipart::Form::new()
            .part("file", file)
            .text("model", model)
            .text("response_format", "text")
            .text("language", language);

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "transcription request failed");
                SpeechError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_else(|_| "unknown error".to_owned());
            tracing::warn!(%status, "transcription endpoint returned error");
            return Err(SpeechError::TranscriptionFailed { status, detail });
        }

        Ok(response.text().await?)
    }
}
