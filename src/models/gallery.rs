use serde::{Deserialize, Serialize};

use super::{GalleryCategory, GalleryCategoryFilter};

/// A photo on the gallery wall
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub category: GalleryCategory,
}

impl GalleryItem {
    pub fn matches(&self, filter: GalleryCategoryFilter) -> bool {
        match filter {
            GalleryCategoryFilter::All => true,
            GalleryCategoryFilter::Category(category) => self.category == category,
        }
    }
}
