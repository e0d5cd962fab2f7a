use secrecy::SecretString;
use serde::Deserialize;

/// Upstream provider configuration shared by the chat and speech paths
///
/// A missing credential is tolerated here so that startup succeeds; the
/// affected request path reports a configuration error at call time.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamConfig {
    /// Bearer credential for the provider API
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override; both the chat and transcription endpoints honor it
    #[serde(default)]
    pub base_url: Option<String>,
}
