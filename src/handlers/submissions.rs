use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::handlers::api::service_error_to_response;
use crate::models::{
    Acknowledgement, ConfirmationId, ContactRequest, ReservationConfirmation, ReservationRequest,
    ReservationStatusView, TestimonialSubmission,
};
use crate::services::{BookingService, FeedbackService};

/// Shared state for the guest-submission endpoints
#[derive(Clone)]
pub struct SubmissionsState {
    pub booking: Arc<BookingService>,
    pub feedback: Arc<FeedbackService>,
}

/// Create a reservation
#[instrument(name = "create_reservation", skip(state, request), fields(
    guests = %request.guests,
    date = %request.date,
))]
pub async fn create_reservation(
    State(state): State<SubmissionsState>,
    Json(request): Json<ReservationRequest>,
) -> Result<(StatusCode, Json<ReservationConfirmation>), (StatusCode, Json<Value>)> {
    match state.booking.create_reservation(request).await {
        Ok(confirmation) => {
            info!(
                confirmation_id = %confirmation.confirmation_id,
                "Reservation created"
            );
            Ok((StatusCode::CREATED, Json(confirmation)))
        }
        Err(err) => {
            error!("Failed to create reservation: {}", err);
            Err(service_error_to_response(err))
        }
    }
}

/// Look up a reservation's status by confirmation id
#[instrument(name = "get_reservation", skip(state), fields(confirmation_id = %confirmation_id))]
pub async fn get_reservation(
    State(state): State<SubmissionsState>,
    Path(confirmation_id): Path<String>,
) -> Result<Json<ReservationStatusView>, (StatusCode, Json<Value>)> {
    let id = ConfirmationId::from(confirmation_id);

    match state.booking.reservation_status(&id).await {
        Ok(view) => Ok(Json(view)),
        Err(err) => {
            error!("Failed to look up reservation: {}", err);
            Err(service_error_to_response(err))
        }
    }
}

/// Cancel a reservation by confirmation id
#[instrument(name = "cancel_reservation", skip(state), fields(confirmation_id = %confirmation_id))]
pub async fn cancel_reservation(
    State(state): State<SubmissionsState>,
    Path(confirmation_id): Path<String>,
) -> Result<Json<Acknowledgement>, (StatusCode, Json<Value>)> {
    let id = ConfirmationId::from(confirmation_id);

    match state.booking.cancel_reservation(&id).await {
        Ok(ack) => {
            info!("Reservation cancelled");
            Ok(Json(ack))
        }
        Err(err) => {
            error!("Failed to cancel reservation: {}", err);
            Err(service_error_to_response(err))
        }
    }
}

/// Submit a contact-form message
#[instrument(name = "submit_contact_form", skip(state, request), fields(subject = %request.subject))]
pub async fn submit_contact_form(
    State(state): State<SubmissionsState>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<Acknowledgement>, (StatusCode, Json<Value>)> {
    match state.feedback.submit_contact_form(request).await {
        Ok(ack) => {
            info!("Contact form accepted");
            Ok(Json(ack))
        }
        Err(err) => {
            error!("Failed to submit contact form: {}", err);
            Err(service_error_to_response(err))
        }
    }
}

/// Submit a guest testimonial
#[instrument(name = "submit_testimonial", skip(state, submission), fields(rating = %submission.rating))]
pub async fn submit_testimonial(
    State(state): State<SubmissionsState>,
    Json(submission): Json<TestimonialSubmission>,
) -> Result<(StatusCode, Json<Acknowledgement>), (StatusCode, Json<Value>)> {
    match state.feedback.submit_testimonial(submission).await {
        Ok(ack) => {
            info!("Testimonial accepted");
            Ok((StatusCode::CREATED, Json(ack)))
        }
        Err(err) => {
            error!("Failed to submit testimonial: {}", err);
            Err(service_error_to_response(err))
        }
    }
}
