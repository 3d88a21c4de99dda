pub mod api;
pub mod health;
pub mod middleware;
pub mod submissions;

pub use api::*;
pub use health::*;
pub use middleware::*;
pub use submissions::*;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::services::{BookingService, CatalogService, FeedbackService};

/// Build the full application router over the given services
///
/// Used by the binary and by integration tests, which inject services with
/// zeroed latency and test fixtures.
pub fn application_router(
    catalog: Arc<CatalogService>,
    booking: Arc<BookingService>,
    feedback: Arc<FeedbackService>,
) -> Router {
    let api_state = ApiState { catalog };
    let submissions_state = SubmissionsState { booking, feedback };

    Router::new()
        .route("/health/status", get(health_check))
        // Catalog endpoints (read-only)
        .route("/api/menu", get(list_menu))
        .route("/api/menu/specials", get(list_special_menu_items))
        .route("/api/menu/:id", get(get_menu_item))
        .route("/api/specials", get(list_specials))
        .route("/api/specials/popular", get(list_popular_specials))
        .route("/api/specials/:id", get(get_special))
        .route("/api/gallery", get(list_gallery))
        .route("/api/testimonials", get(list_testimonials))
        .with_state(api_state)
        // Guest submission endpoints
        .route("/api/testimonials/submit", post(submit_testimonial))
        .route("/api/reservations", post(create_reservation))
        .route(
            "/api/reservations/:confirmation_id",
            get(get_reservation).delete(cancel_reservation),
        )
        .route("/api/contact", post(submit_contact_form))
        .with_state(submissions_state)
        // Middleware layers (order matters - outer to inner)
        .layer(axum_middleware::from_fn(security_headers_middleware))
        .layer(axum_middleware::from_fn(cors_middleware))
        .layer(axum_middleware::from_fn(request_validation_middleware))
        .layer(tower_http::trace::TraceLayer::new_for_http())
}
