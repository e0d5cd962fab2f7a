use secrecy::{ExposeSecret, SecretString};

use crate::error::{ChatError, Result};
use crate::http_client::http_client;
use crate::protocol::UpstreamChatRequest;

/// Default provider API base URL
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// HTTP client for the provider's completion endpoint
///
/// Carries the credential; callers never see it. The response comes back
/// uninterpreted; status handling belongs to [`crate::relay`].
pub(crate) struct UpstreamClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<SecretString>,
}

impl UpstreamClient {
    pub fn new(api_key: Option<SecretString>, base_url: Option<String>) -> Self {
        let base_url = base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_owned();

        Self {
            client: http_client(),
            base_url,
            api_key,
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/responses", self.base_url)
    }

    /// Send the canonical request and hand back the raw upstream response
    pub async fn send(&self, request: &UpstreamChatRequest) -> Result<reqwest::Response> {
        let api_key = self.api_key.as_ref().ok_or(ChatError::Configuration)?;

        self.client
            .post(self.completions_url())
            .bearer_auth(api_key.expose_secret())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "upstream request failed");
                ChatError::UpstreamUnreachable(e)
            })
    }
}
