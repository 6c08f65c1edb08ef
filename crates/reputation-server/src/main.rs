mod app;
mod error;
mod json;
mod metrics;
mod rate_limit;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use reputation_core::{Config, Reputation};
use state::AppState;

/// Runs the reputation scoring HTTP service.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Overrides the PORT environment variable / config default.
    #[arg(long)]
    port: Option<u16>,

    /// Overrides the listen address; defaults to 0.0.0.0:<port>.
    #[arg(long)]
    listen: Option<String>,
}

fn init_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_env("REPUTATION_LOG")
        .unwrap_or_else(|_| EnvFilter::new("reputation_server=info,reputation_core=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let mut config = Config::load()?;
    if let Some(port) = cli.port {
        config.port = port;
    }

    let reputation = Arc::new(Reputation::new(config.clone()));
    reputation.spawn_update_workers();

    let app = app::build(AppState {
        reputation: reputation.clone(),
    });

    let listen = cli
        .listen
        .unwrap_or_else(|| format!("0.0.0.0:{}", config.port));
    let addr: SocketAddr = listen.parse()?;

    tracing::info!(%addr, "reputation server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
