mod cli;

use crate::cli::Cli;
use clap::Parser;
use reel_catalog::CatalogService;
use reel_gateway::{App, AppState};
use reel_generator::RandomAlphanumeric;
use reel_storage::InMemoryRepository;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::try_parse()?;

    reel_telemetry::init(config.log_format.into(), &config.log_filter)?;

    let generator = RandomAlphanumeric::new(usize::from(config.id_length));
    let repository = InMemoryRepository::with_generator(generator);
    let state = AppState::new(Arc::new(CatalogService::new(repository)));

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(
        listen_addr = %listener.local_addr()?,
        id_length = config.id_length,
        log_format = %config.log_format,
        "starting gateway server"
    );

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
