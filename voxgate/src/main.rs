#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use args::Args;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use voxgate_config::Config;
use voxgate_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_tracing();

    // Load configuration
    let mut config = Config::load(&args.config)?;
    if let Some(listen) = args.listen {
        config.server.listen_address = Some(listen);
    }

    tracing::info!(
        config_path = %args.config.display(),
        "starting voxgate"
    );

    // Build server
    let server = Server::new(config);

    // Set up graceful shutdown
    let shutdown = CancellationToken::new();
    let shutdown_clone = shutdown.clone();

    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown_clone.cancel();
    });

    // Run server
    server.serve(shutdown).await?;

    tracing::info!("voxgate stopped");
    Ok(())
}

/// Plain stdout logging with `RUST_LOG` filtering
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for a shutdown signal (`SIGINT` or `SIGTERM`)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
