use std::time::Duration;

use http::Method;
use http::header::HeaderName;
use tower_http::cors::{AllowOrigin, CorsLayer};
use voxgate_config::{AllowList, CorsConfig};

/// Build the Tower CORS layer from configuration
///
/// This layer answers preflight OPTIONS requests itself, before any route
/// or body parsing runs, and stamps the origin grant on every other
/// response, errors included, so browser callers can read failure bodies
/// instead of seeing an opaque network error.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new();

    layer = match &config.origins {
        AllowList::Any => layer.allow_origin(AllowOrigin::any()),
        AllowList::List(origins) => {
            let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            layer.allow_origin(origins)
        }
    };

    let methods: Vec<Method> = config.methods.iter().filter_map(|m| m.parse().ok()).collect();
    layer = layer.allow_methods(methods);

    let headers: Vec<HeaderName> = config.headers.iter().filter_map(|h| h.parse().ok()).collect();
    layer = layer.allow_headers(headers);

    if let Some(seconds) = config.max_age {
        layer = layer.max_age(Duration::from_secs(seconds));
    }

    layer
}
