use std::{sync::OnceLock, time::Duration};

use http::{HeaderMap, HeaderValue, header};
use reqwest::Client;

/// Shared HTTP client for upstream chat requests
///
/// No whole-request timeout: a streamed completion holds its connection
/// open for the full generation, so only the connect phase is bounded.
pub fn http_client() -> Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();

    CLIENT
        .get_or_init(|| {
            let mut headers = HeaderMap::new();
            headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));

            Client::builder()
                .connect_timeout(Duration::from_secs(10))
                .pool_idle_timeout(Some(Duration::from_secs(5)))
                .tcp_nodelay(true)
                .tcp_keepalive(Some(Duration::from_secs(60)))
                .default_headers(headers)
                .build()
                .expect("Failed to build default HTTP client")
        })
        .clone()
}
