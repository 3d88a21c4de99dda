use std::sync::Arc;
use tracing::{info, instrument};

use crate::models::{
    GalleryCategoryFilter, GalleryItem, MenuCategoryFilter, MenuItem, Rating, ServiceResult,
    Special, Testimonial,
};
use crate::repositories::CatalogRepository;

/// Read-side service over the catalog collections
///
/// Category and rating filtering happen here, on top of whatever the
/// repository returns; results always keep fixture order.
pub struct CatalogService {
    repository: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    /// All menu items
    #[instrument(skip(self))]
    pub async fn list_menu(&self) -> ServiceResult<Vec<MenuItem>> {
        let items = self.repository.menu_items().await?;
        Ok(items)
    }

    /// Menu items under the given category selector
    ///
    /// `All` returns the full menu; a category with no items returns an
    /// empty list, never an error.
    #[instrument(skip(self), fields(category = %filter))]
    pub async fn menu_by_category(
        &self,
        filter: MenuCategoryFilter,
    ) -> ServiceResult<Vec<MenuItem>> {
        let items = self.repository.menu_items().await?;
        let filtered: Vec<MenuItem> = items
            .into_iter()
            .filter(|item| item.matches(filter))
            .collect();

        info!("Found {} menu items in category {}", filtered.len(), filter);
        Ok(filtered)
    }

    /// A single menu item; absence is not an error
    #[instrument(skip(self), fields(id = %id))]
    pub async fn menu_item(&self, id: u32) -> ServiceResult<Option<MenuItem>> {
        let item = self.repository.menu_item(id).await?;
        Ok(item)
    }

    /// Menu items flagged as chef's specials
    #[instrument(skip(self))]
    pub async fn special_menu_items(&self) -> ServiceResult<Vec<MenuItem>> {
        let items = self.repository.menu_items().await?;
        let specials: Vec<MenuItem> = items.into_iter().filter(|item| item.is_special).collect();

        info!("Found {} special menu items", specials.len());
        Ok(specials)
    }

    /// All recurring specials
    #[instrument(skip(self))]
    pub async fn list_specials(&self) -> ServiceResult<Vec<Special>> {
        let specials = self.repository.specials().await?;
        Ok(specials)
    }

    /// Specials flagged as popular
    #[instrument(skip(self))]
    pub async fn popular_specials(&self) -> ServiceResult<Vec<Special>> {
        let specials = self.repository.specials().await?;
        let popular: Vec<Special> = specials.into_iter().filter(|s| s.is_popular).collect();

        info!("Found {} popular specials", popular.len());
        Ok(popular)
    }

    /// A single special; absence is not an error
    #[instrument(skip(self), fields(id = %id))]
    pub async fn special(&self, id: u32) -> ServiceResult<Option<Special>> {
        let special = self.repository.special(id).await?;
        Ok(special)
    }

    /// All gallery items
    #[instrument(skip(self))]
    pub async fn list_gallery(&self) -> ServiceResult<Vec<GalleryItem>> {
        let items = self.repository.gallery_items().await?;
        Ok(items)
    }

    /// Gallery items under the given category selector
    #[instrument(skip(self), fields(category = %filter))]
    pub async fn gallery_by_category(
        &self,
        filter: GalleryCategoryFilter,
    ) -> ServiceResult<Vec<GalleryItem>> {
        let items = self.repository.gallery_items().await?;
        let filtered: Vec<GalleryItem> = items
            .into_iter()
            .filter(|item| item.matches(filter))
            .collect();

        info!(
            "Found {} gallery items in category {}",
            filtered.len(),
            filter
        );
        Ok(filtered)
    }

    /// All testimonials
    #[instrument(skip(self))]
    pub async fn list_testimonials(&self) -> ServiceResult<Vec<Testimonial>> {
        let testimonials = self.repository.testimonials().await?;
        Ok(testimonials)
    }

    /// Testimonials with exactly the given rating
    #[instrument(skip(self), fields(rating = %rating))]
    pub async fn testimonials_by_rating(&self, rating: Rating) -> ServiceResult<Vec<Testimonial>> {
        let testimonials = self.repository.testimonials().await?;
        let matching: Vec<Testimonial> = testimonials
            .into_iter()
            .filter(|t| t.rating == rating)
            .collect();

        info!("Found {} testimonials rated {}", matching.len(), rating);
        Ok(matching)
    }
}
