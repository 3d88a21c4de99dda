use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::models::{
    GalleryCategoryFilter, GalleryItem, MenuCategoryFilter, MenuItem, Rating, ServiceError,
    Special, Testimonial,
};
use crate::services::CatalogService;

/// Shared state for the read-only catalog endpoints
#[derive(Clone)]
pub struct ApiState {
    pub catalog: Arc<CatalogService>,
}

/// Query parameters accepted by the category-filtered listings
#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

/// Query parameters accepted by the testimonial listing
#[derive(Debug, Deserialize)]
pub struct TestimonialQuery {
    pub rating: Option<u8>,
}

/// Envelope for every collection response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionResponse<T> {
    pub items: Vec<T>,
    pub total_count: usize,
}

impl<T> From<Vec<T>> for CollectionResponse<T> {
    fn from(items: Vec<T>) -> Self {
        let total_count = items.len();
        Self { items, total_count }
    }
}

// =============================================================================
// MENU ENDPOINTS
// =============================================================================

/// List menu items, optionally narrowed to one category
#[instrument(name = "list_menu", skip(state), fields(category = query.category.as_deref()))]
pub async fn list_menu(
    State(state): State<ApiState>,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<CollectionResponse<MenuItem>>, (StatusCode, Json<Value>)> {
    let filter = parse_filter::<MenuCategoryFilter>(query.category, MenuCategoryFilter::All)?;

    match state.catalog.menu_by_category(filter).await {
        Ok(items) => {
            info!("Listed {} menu items", items.len());
            Ok(Json(items.into()))
        }
        Err(err) => {
            error!("Failed to list menu: {}", err);
            Err(service_error_to_response(err))
        }
    }
}

/// Menu items flagged as chef's specials
#[instrument(name = "list_special_menu_items", skip(state))]
pub async fn list_special_menu_items(
    State(state): State<ApiState>,
) -> Result<Json<CollectionResponse<MenuItem>>, (StatusCode, Json<Value>)> {
    match state.catalog.special_menu_items().await {
        Ok(items) => Ok(Json(items.into())),
        Err(err) => {
            error!("Failed to list special menu items: {}", err);
            Err(service_error_to_response(err))
        }
    }
}

/// Get a single menu item
#[instrument(name = "get_menu_item", skip(state), fields(id = %id))]
pub async fn get_menu_item(
    State(state): State<ApiState>,
    Path(id): Path<u32>,
) -> Result<Json<MenuItem>, (StatusCode, Json<Value>)> {
    match state.catalog.menu_item(id).await {
        Ok(Some(item)) => Ok(Json(item)),
        Ok(None) => Err(not_found("Menu item not found")),
        Err(err) => {
            error!("Failed to get menu item {}: {}", id, err);
            Err(service_error_to_response(err))
        }
    }
}

// =============================================================================
// SPECIALS ENDPOINTS
// =============================================================================

/// List every recurring special
#[instrument(name = "list_specials", skip(state))]
pub async fn list_specials(
    State(state): State<ApiState>,
) -> Result<Json<CollectionResponse<Special>>, (StatusCode, Json<Value>)> {
    match state.catalog.list_specials().await {
        Ok(specials) => Ok(Json(specials.into())),
        Err(err) => {
            error!("Failed to list specials: {}", err);
            Err(service_error_to_response(err))
        }
    }
}

/// Specials flagged as popular
#[instrument(name = "list_popular_specials", skip(state))]
pub async fn list_popular_specials(
    State(state): State<ApiState>,
) -> Result<Json<CollectionResponse<Special>>, (StatusCode, Json<Value>)> {
    match state.catalog.popular_specials().await {
        Ok(specials) => Ok(Json(specials.into())),
        Err(err) => {
            error!("Failed to list popular specials: {}", err);
            Err(service_error_to_response(err))
        }
    }
}

/// Get a single special
#[instrument(name = "get_special", skip(state), fields(id = %id))]
pub async fn get_special(
    State(state): State<ApiState>,
    Path(id): Path<u32>,
) -> Result<Json<Special>, (StatusCode, Json<Value>)> {
    match state.catalog.special(id).await {
        Ok(Some(special)) => Ok(Json(special)),
        Ok(None) => Err(not_found("Special not found")),
        Err(err) => {
            error!("Failed to get special {}: {}", id, err);
            Err(service_error_to_response(err))
        }
    }
}

// =============================================================================
// GALLERY AND TESTIMONIAL ENDPOINTS
// =============================================================================

/// List gallery items, optionally narrowed to one category
#[instrument(name = "list_gallery", skip(state), fields(category = query.category.as_deref()))]
pub async fn list_gallery(
    State(state): State<ApiState>,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<CollectionResponse<GalleryItem>>, (StatusCode, Json<Value>)> {
    let filter = parse_filter::<GalleryCategoryFilter>(query.category, GalleryCategoryFilter::All)?;

    match state.catalog.gallery_by_category(filter).await {
        Ok(items) => Ok(Json(items.into())),
        Err(err) => {
            error!("Failed to list gallery: {}", err);
            Err(service_error_to_response(err))
        }
    }
}

/// List testimonials, optionally filtered to an exact rating
#[instrument(name = "list_testimonials", skip(state), fields(rating = query.rating))]
pub async fn list_testimonials(
    State(state): State<ApiState>,
    Query(query): Query<TestimonialQuery>,
) -> Result<Json<CollectionResponse<Testimonial>>, (StatusCode, Json<Value>)> {
    let result = match query.rating {
        Some(stars) => {
            let rating = Rating::new(stars).map_err(bad_request)?;
            state.catalog.testimonials_by_rating(rating).await
        }
        None => state.catalog.list_testimonials().await,
    };

    match result {
        Ok(testimonials) => Ok(Json(testimonials.into())),
        Err(err) => {
            error!("Failed to list testimonials: {}", err);
            Err(service_error_to_response(err))
        }
    }
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

fn parse_filter<F>(
    raw: Option<String>,
    default: F,
) -> Result<F, (StatusCode, Json<Value>)>
where
    F: std::str::FromStr<Err = String>,
{
    match raw {
        Some(value) => value.parse().map_err(bad_request),
        None => Ok(default),
    }
}

fn bad_request(message: String) -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": message,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}

fn not_found(message: &str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": message,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}

/// Convert a ServiceError to an HTTP response
pub fn service_error_to_response(err: ServiceError) -> (StatusCode, Json<Value>) {
    let (status, body) = match &err {
        ServiceError::ReservationNotFound { .. } => (
            StatusCode::NOT_FOUND,
            json!({ "error": err.to_string() }),
        ),
        ServiceError::ReservationAlreadyCancelled { .. } => (
            StatusCode::CONFLICT,
            json!({ "error": err.to_string() }),
        ),
        ServiceError::ValidationFailed { errors } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({ "error": "Validation failed", "fields": errors }),
        ),
        ServiceError::Store { .. } => (
            StatusCode::SERVICE_UNAVAILABLE,
            json!({ "error": "Data temporarily unavailable" }),
        ),
    };

    let mut body = body;
    body["timestamp"] = json!(chrono::Utc::now().to_rfc3339());
    (status, Json(body))
}
