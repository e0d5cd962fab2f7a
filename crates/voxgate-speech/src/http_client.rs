use std::{sync::OnceLock, time::Duration};

use http::{HeaderMap, HeaderValue, header};
use reqwest::Client;

/// Shared HTTP client for asset downloads and transcription uploads
///
/// Both hops on this path are fully buffered, so a whole-request timeout
/// is safe and keeps a stalled remote host from pinning the request.
pub fn http_client() -> Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();

    CLIENT
        .get_or_init(|| {
            let mut headers = HeaderMap::new();
            headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));

            Client::builder()
                .timeout(Duration::from_secs(120))
                .pool_idle_timeout(Some(Duration::from_secs(5)))
                .tcp_nodelay(true)
                .tcp_keepalive(Some(Duration::from_secs(60)))
                .default_headers(headers)
                .build()
                .expect("Failed to build default HTTP client")
        })
        .clone()
}
