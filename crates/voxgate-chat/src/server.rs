use axum::response::Response;

use crate::client::UpstreamClient;
use crate::error::Result;
use crate::protocol::ChatRequest;
use crate::{normalize, relay};

/// Chat relay server state
pub struct Server {
    client: UpstreamClient,
}

impl Server {
    /// Normalize the caller payload, call upstream, and relay the response
    ///
    /// The `stream` flag decides the relay mode at the moment the upstream
    /// call completes; everything before that point is shared.
    pub(crate) async fn relay(&self, request: ChatRequest) -> Result<Response> {
        let canonical = normalize::normalize(request)?;

        tracing::debug!(model = %canonical.model, stream = canonical.stream, "relaying chat request");

        let upstream = self.client.send(&canonical).await?;

        if canonical.stream {
            Ok(relay::streaming(upstream))
        } else {
            relay::buffered(upstream).await
        }
    }
}

/// Builder for constructing the chat server from configuration
pub struct ChatServerBuilder<'a> {
    config: &'a voxgate_config::Config,
}

impl<'a> ChatServerBuilder<'a> {
    pub const fn new(config: &'a voxgate_config::Config) -> Self {
        Self { config }
    }

    pub fn build(self) -> Server {
        Server {
            client: UpstreamClient::new(
                self.config.upstream.api_key.clone(),
                self.config.upstream.base_url.clone(),
            ),
        }
    }
}
