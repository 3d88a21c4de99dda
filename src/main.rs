use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::info;

use resort_rs::{
    application_router, init_observability,
    repositories::{FixtureCatalogRepository, FixtureStore, InMemoryReservationRepository},
    services::{BookingService, CatalogService, FeedbackService},
    Config,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_environment()?;

    init_observability(
        &config.observability.service_name,
        &config.observability.log_level,
        config.observability.enable_json_logging,
    )?;

    info!("Starting resort-rs service");
    info!(
        "Service: {} v{}",
        config.observability.service_name, config.observability.service_version
    );

    // A missing or malformed fixture document is fatal: the whole site
    // depends on the fixtures being present.
    let store = match &config.fixtures.fixtures_dir {
        Some(dir) => {
            info!("Loading fixtures from {}", dir.display());
            FixtureStore::load_from_dir(dir)?
        }
        None => {
            info!("Loading bundled fixtures");
            FixtureStore::bundled()?
        }
    };
    let store = Arc::new(store);

    let latency = config.latency.simulated_latency();
    info!(
        "Simulated latency: lookup={:?}, collection={:?}, submission={:?}",
        latency.lookup, latency.collection, latency.submission
    );

    // Repositories
    let catalog_repository = Arc::new(FixtureCatalogRepository::new(store, latency));
    let reservation_repository = Arc::new(InMemoryReservationRepository::new());
    info!("Repositories initialized successfully");

    // Services
    let catalog_service = Arc::new(CatalogService::new(catalog_repository));
    let booking_service = Arc::new(BookingService::new(reservation_repository, latency));
    let feedback_service = Arc::new(FeedbackService::new(latency));
    info!("Services initialized successfully");

    let app = application_router(catalog_service, booking_service, feedback_service);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        info!("Shutdown signal received");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
