use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::models::{GalleryItem, MenuItem, Special, StoreResult, Testimonial};
use crate::repositories::{FixtureStore, SimulatedLatency};

/// Read access to the catalog collections
///
/// The fixture-backed implementation below serves bundled data with
/// simulated latency; a real backend client would be a second
/// implementation of this trait, chosen at startup.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// All menu items, in fixture order
    async fn menu_items(&self) -> StoreResult<Vec<MenuItem>>;

    /// A single menu item, if it exists
    async fn menu_item(&self, id: u32) -> StoreResult<Option<MenuItem>>;

    /// All specials, in fixture order
    async fn specials(&self) -> StoreResult<Vec<Special>>;

    /// A single special, if it exists
    async fn special(&self, id: u32) -> StoreResult<Option<Special>>;

    /// All gallery items, in fixture order
    async fn gallery_items(&self) -> StoreResult<Vec<GalleryItem>>;

    /// All testimonials, in fixture order
    async fn testimonials(&self) -> StoreResult<Vec<Testimonial>>;
}

/// Fixture-backed catalog reads with per-tier simulated latency
pub struct FixtureCatalogRepository {
    store: Arc<FixtureStore>,
    latency: SimulatedLatency,
}

impl FixtureCatalogRepository {
    pub fn new(store: Arc<FixtureStore>, latency: SimulatedLatency) -> Self {
        Self { store, latency }
    }
}

#[async_trait]
impl CatalogRepository for FixtureCatalogRepository {
    #[instrument(skip(self))]
    async fn menu_items(&self) -> StoreResult<Vec<MenuItem>> {
        self.latency.collection_delay().await;
        let items = self.store.menu_items().to_vec();
        info!("Fetched {} menu items", items.len());
        Ok(items)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn menu_item(&self, id: u32) -> StoreResult<Option<MenuItem>> {
        self.latency.lookup_delay().await;
        let item = self
            .store
            .menu_items()
            .iter()
            .find(|item| item.id == id)
            .cloned();
        info!(found = item.is_some(), "Menu item lookup");
        Ok(item)
    }

    #[instrument(skip(self))]
    async fn specials(&self) -> StoreResult<Vec<Special>> {
        self.latency.collection_delay().await;
        let specials = self.store.specials().to_vec();
        info!("Fetched {} specials", specials.len());
        Ok(specials)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn special(&self, id: u32) -> StoreResult<Option<Special>> {
        self.latency.lookup_delay().await;
        let special = self
            .store
            .specials()
            .iter()
            .find(|special| special.id == id)
            .cloned();
        info!(found = special.is_some(), "Special lookup");
        Ok(special)
    }

    #[instrument(skip(self))]
    async fn gallery_items(&self) -> StoreResult<Vec<GalleryItem>> {
        self.latency.collection_delay().await;
        let items = self.store.gallery_items().to_vec();
        info!("Fetched {} gallery items", items.len());
        Ok(items)
    }

    #[instrument(skip(self))]
    async fn testimonials(&self) -> StoreResult<Vec<Testimonial>> {
        self.latency.collection_delay().await;
        let testimonials = self.store.testimonials().to_vec();
        info!("Fetched {} testimonials", testimonials.len());
        Ok(testimonials)
    }
}
