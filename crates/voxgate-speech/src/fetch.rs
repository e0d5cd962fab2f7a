//! Remote audio asset retrieval
//!
//! The transcription endpoint needs a complete multipart body, so unlike
//! the chat relay this path buffers the whole asset in memory.

use http::header;

use crate::error::{Result, SpeechError};
use crate::types::AudioAsset;

/// Cap on buffered assets, matching the provider's own upload limit
pub(crate) const MAX_ASSET_BYTES: usize = 25 << 20;

/// Content type assumed when the remote host does not declare an audio one
const FALLBACK_CONTENT_TYPE: &str = "audio/mpeg";

/// Download the asset at `url` into memory
///
/// A non-success response from the remote host is a download failure
/// carrying the remote body as diagnostic detail. The declared content
/// type is kept only when it is an `audio/*` type; hosts that serve
/// audio as `application/octet-stream` fall back to `audio/mpeg`.
pub(crate) async fn asset(client: &reqwest::Client, url: &str) -> Result<AudioAsset> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        let detail = response.text().await.unwrap_or_else(|_| "unknown error".to_owned());
        return Err(SpeechError::AssetDownloadFailed { detail });
    }

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .filter(|value| value.starts_with("audio/"))
        .unwrap_or(FALLBACK_CONTENT_TYPE)
        .to_owned();

    let bytes = response.bytes().await?;
    if bytes.len() > MAX_ASSET_BYTES {
        return Err(SpeechError::AssetTooLarge {
            limit_bytes: MAX_ASSET_BYTES,
        });
    }

    tracing::debug!(bytes = bytes.len(), %content_type, "audio asset downloaded");

    Ok(AudioAsset {
        bytes: bytes.to_vec(),
        content_type,
    })
}
