//! SuperMart engine API server

use std::net::SocketAddr;

use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use supermart_engine::api::{create_router, AppState};
use supermart_engine::config::ConfigLoader;

/// Tax and line-item calculation API server
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Listening address
    #[clap(short, long, default_value = "127.0.0.1:8080")]
    addr: SocketAddr,

    /// Jurisdiction configuration directory
    #[clap(short, long, default_value = "./config/kenya")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // RUST_LOG overrides the default level
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = match ConfigLoader::load(&args.config) {
        Ok(config) => config,
        Err(err) => {
            error!(path = %args.config, error = %err, "Failed to load configuration");
            return Err(err.into());
        }
    };
    info!(
        jurisdiction = %config.jurisdiction().code,
        vat_rate = %config.vat_rate(),
        tax_classes = config.tax_classes().len(),
        "Configuration loaded"
    );

    let app = create_router(AppState::new(config));

    let listener = TcpListener::bind(args.addr).await?;
    info!("Listening on {}", args.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        error!(error = %err, "Failed to listen for shutdown signal");
    }
}
