use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tokio::net::TcpListener;

use resort_rs::application_router;
use resort_rs::repositories::{
    FixtureCatalogRepository, FixtureStore, InMemoryReservationRepository, SimulatedLatency,
};
use resort_rs::services::{BookingService, CatalogService, FeedbackService};

pub struct TestEnvironment {
    pub client: Client,
    pub base_url: String,
}

impl TestEnvironment {
    /// Start the real application router on an ephemeral port, with bundled
    /// fixtures and zeroed simulated latency
    pub async fn new() -> Self {
        let store = Arc::new(FixtureStore::bundled().expect("Failed to load bundled fixtures"));
        let latency = SimulatedLatency::zero();

        let catalog_repository = Arc::new(FixtureCatalogRepository::new(store, latency));
        let reservation_repository = Arc::new(InMemoryReservationRepository::new());

        let catalog = Arc::new(CatalogService::new(catalog_repository));
        let booking = Arc::new(BookingService::new(reservation_repository, latency));
        let feedback = Arc::new(FeedbackService::new(latency));

        let app = application_router(catalog, booking, feedback);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Failed to get local address");
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Failed to serve app");
        });

        // Wait for server to start
        tokio::time::sleep(Duration::from_millis(50)).await;

        let client = Client::new();

        Self { client, base_url }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
