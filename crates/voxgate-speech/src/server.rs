use crate::error::{Result, SpeechError};
use crate::fetch;
use crate::http_client::http_client;
use crate::transcriber::Transcriber;
use crate::types::{DEFAULT_LANGUAGE, DEFAULT_MODEL, SpeechRequest, SpeechResponse};

/// Transcription proxy server state
///
/// `transcriber` is `None` when no credential is configured; the request
/// handler reports that as a configuration error rather than failing at
/// startup, so a chat-only deployment still boots.
pub struct Server {
    http: reqwest::Client,
    transcriber: Option<Transcriber>,
}

impl Server {
    /// Run one transcription job: validate, download, re-wrap, forward
    pub(crate) async fn transcribe(&self, request: SpeechRequest) -> Result<SpeechResponse> {
        let file_url = request
            .file_url
            .filter(|url| !url.is_empty())
            .ok_or(SpeechError::MissingField { field: "fileUrl" })?;

        let transcriber = self.transcriber.as_ref().ok_or(SpeechError::Configuration)?;

        let model = request.model.unwrap_or_else(|| DEFAULT_MODEL.to_owned());
        let language = request.language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_owned());

        let asset = fetch::asset(&self.http, &file_url).await?;
        let text = transcriber.transcribe(asset, model, language).await?;

        Ok(SpeechResponse { success: true, text })
    }
}

/// Builder for constructing the transcription proxy from configuration
pub struct SpeechServerBuilder<'a> {
    config: &'a voxgate_config::Config,
}

impl<'a> SpeechServerBuilder<'a> {
    pub const fn new(config: &'a voxgate_config::Config) -> Self {
        Self { config }
    }

    pub fn build(self) -> Server {
        let http = http_client();

        let transcriber = self.config.upstream.api_key.clone().map(|api_key| {
            Transcriber::new(http.clone(), api_key, self.config.upstream.base_url.clone())
        });

        if transcriber.is_none() {
            tracing::debug!("no upstream credential; transcription requests will be rejected");
        }

        Server { http, transcriber }
    }
}
