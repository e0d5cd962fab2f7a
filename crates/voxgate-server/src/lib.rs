mod cors;
mod fallback;
mod health;

use std::net::SocketAddr;

use axum::Router;
use tower_http::trace::TraceLayer;
use voxgate_config::Config;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    pub fn new(config: Config) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let chat_state = voxgate_chat::build_server(&config);
        let speech_state = voxgate_speech::build_server(&config);

        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        // Chat relay routes
        app = app.merge(voxgate_chat::endpoint_router().with_state(chat_state));

        // Transcription proxy routes
        app = app.merge(voxgate_speech::endpoint_router().with_state(speech_state));

        // Known paths answer wrong verbs with the uniform envelope
        app = app.method_not_allowed_fallback(fallback::method_not_allowed);

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        // CORS wraps everything so the origin grant reaches error responses too
        app = app.layer(cors::cors_layer(&config.server.cors));

        Self {
            router: app,
            listen_address,
        }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
