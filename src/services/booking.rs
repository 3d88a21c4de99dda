use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::models::{
    Acknowledgement, ConfirmationId, ReservationConfirmation, ReservationRecord,
    ReservationRequest, ReservationStatus, ReservationStatusView, ServiceError, ServiceResult,
    ValidateForm,
};
use crate::repositories::{ReservationRepository, SimulatedLatency};

/// Reservation lifecycle: create, look up, cancel
///
/// Every confirmation id this service hands out is recorded, so a cancel
/// against an id that was never issued fails instead of being acknowledged
/// blindly.
pub struct BookingService {
    reservations: Arc<dyn ReservationRepository>,
    latency: SimulatedLatency,
}

impl BookingService {
    pub fn new(reservations: Arc<dyn ReservationRepository>, latency: SimulatedLatency) -> Self {
        Self {
            reservations,
            latency,
        }
    }

    /// Create a reservation from a guest-submitted request
    ///
    /// The request must pass the reservation form validator; an invalid
    /// payload is rejected before anything is stored. The returned
    /// confirmation echoes the payload and carries a freshly generated,
    /// unique confirmation id.
    #[instrument(skip(self, request), fields(guests = %request.guests, date = %request.date))]
    pub async fn create_reservation(
        &self,
        request: ReservationRequest,
    ) -> ServiceResult<ReservationConfirmation> {
        let errors = request.validate();
        if !errors.is_empty() {
            warn!("Reservation request rejected by validation: {}", errors);
            return Err(ServiceError::ValidationFailed { errors });
        }

        self.latency.submission_delay().await;

        let confirmation_id = ConfirmationId::generate();
        let record = ReservationRecord::new(confirmation_id.clone(), request.clone());
        self.reservations.insert(record).await?;

        info!(
            confirmation_id = %confirmation_id,
            name = %request.full_name,
            date = %request.date,
            time = %request.time,
            "Reservation created"
        );

        Ok(ReservationConfirmation {
            success: true,
            message: "Reservation confirmed".to_string(),
            confirmation_id,
            reservation: request,
        })
    }

    /// Look up the status of a previously created reservation
    #[instrument(skip(self), fields(confirmation_id = %confirmation_id))]
    pub async fn reservation_status(
        &self,
        confirmation_id: &ConfirmationId,
    ) -> ServiceResult<ReservationStatusView> {
        self.latency.lookup_delay().await;

        match self.reservations.find(confirmation_id).await? {
            Some(record) => Ok(ReservationStatusView {
                confirmation_id: record.confirmation_id,
                status: record.status,
            }),
            None => {
                warn!("Reservation status requested for unknown id");
                Err(ServiceError::ReservationNotFound {
                    confirmation_id: confirmation_id.clone(),
                })
            }
        }
    }

    /// Cancel a reservation by confirmation id
    ///
    /// Only ids issued by a prior create succeed; a second cancel of the
    /// same reservation is rejected.
    #[instrument(skip(self), fields(confirmation_id = %confirmation_id))]
    pub async fn cancel_reservation(
        &self,
        confirmation_id: &ConfirmationId,
    ) -> ServiceResult<Acknowledgement> {
        self.latency.submission_delay().await;

        let existing = self.reservations.find(confirmation_id).await?;
        match existing {
            None => {
                warn!("Cancel requested for unknown reservation");
                Err(ServiceError::ReservationNotFound {
                    confirmation_id: confirmation_id.clone(),
                })
            }
            Some(record) if record.status == ReservationStatus::Cancelled => {
                warn!("Cancel requested for already cancelled reservation");
                Err(ServiceError::ReservationAlreadyCancelled {
                    confirmation_id: confirmation_id.clone(),
                })
            }
            Some(_) => {
                self.reservations
                    .set_status(confirmation_id, ReservationStatus::Cancelled)
                    .await?;

                info!("Reservation cancelled");
                Ok(Acknowledgement::ok("Reservation cancelled"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GuestCount, StoreError};
    use crate::repositories::InMemoryReservationRepository;
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        TestReservationRepository {}

        #[async_trait]
        impl ReservationRepository for TestReservationRepository {
            async fn insert(&self, record: ReservationRecord) -> Result<(), StoreError>;
            async fn find(&self, id: &ConfirmationId) -> Result<Option<ReservationRecord>, StoreError>;
            async fn set_status(
                &self,
                id: &ConfirmationId,
                status: ReservationStatus,
            ) -> Result<Option<ReservationRecord>, StoreError>;
            async fn count(&self) -> Result<usize, StoreError>;
        }
    }

    fn valid_request() -> ReservationRequest {
        ReservationRequest {
            full_name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            date: "2999-06-15".to_string(),
            time: "19:00".to_string(),
            guests: GuestCount::Seated(2),
            occasion: None,
            special_requests: None,
        }
    }

    fn in_memory_service() -> BookingService {
        BookingService::new(
            Arc::new(InMemoryReservationRepository::new()),
            SimulatedLatency::zero(),
        )
    }

    #[tokio::test]
    async fn test_create_reservation_success() {
        let service = in_memory_service();

        let confirmation = service.create_reservation(valid_request()).await.unwrap();

        assert!(confirmation.success);
        assert_eq!(confirmation.message, "Reservation confirmed");
        assert!(confirmation.confirmation_id.as_str().starts_with("RES-"));
        assert_eq!(confirmation.reservation, valid_request());
    }

    #[tokio::test]
    async fn test_consecutive_creates_get_distinct_ids() {
        let service = in_memory_service();

        let first = service.create_reservation(valid_request()).await.unwrap();
        let second = service.create_reservation(valid_request()).await.unwrap();

        assert_ne!(first.confirmation_id, second.confirmation_id);
    }

    #[tokio::test]
    async fn test_invalid_request_never_reaches_the_store() {
        // No expectations: any repository call would panic the test
        let mock_repo = MockTestReservationRepository::new();
        let service = BookingService::new(Arc::new(mock_repo), SimulatedLatency::zero());

        let mut request = valid_request();
        request.email = "not-an-email".to_string();
        request.date = "2020-01-01".to_string();

        let result = service.create_reservation(request).await;

        match result {
            Err(ServiceError::ValidationFailed { errors }) => {
                assert!(errors.get("email").is_some());
                assert!(errors.get("date").is_some());
            }
            other => panic!("Expected ValidationFailed, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_status_lookup_roundtrip() {
        let service = in_memory_service();
        let confirmation = service.create_reservation(valid_request()).await.unwrap();

        let status = service
            .reservation_status(&confirmation.confirmation_id)
            .await
            .unwrap();

        assert_eq!(status.status, ReservationStatus::Confirmed);
        assert_eq!(status.confirmation_id, confirmation.confirmation_id);
    }

    #[tokio::test]
    async fn test_cancel_unknown_reservation() {
        let service = in_memory_service();
        let unknown = ConfirmationId::generate();

        let result = service.cancel_reservation(&unknown).await;

        assert!(matches!(
            result,
            Err(ServiceError::ReservationNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_cancel_twice_is_rejected() {
        let service = in_memory_service();
        let confirmation = service.create_reservation(valid_request()).await.unwrap();

        let ack = service
            .cancel_reservation(&confirmation.confirmation_id)
            .await
            .unwrap();
        assert!(ack.success);
        assert_eq!(ack.message, "Reservation cancelled");

        let second = service
            .cancel_reservation(&confirmation.confirmation_id)
            .await;
        assert!(matches!(
            second,
            Err(ServiceError::ReservationAlreadyCancelled { .. })
        ));
    }

    #[tokio::test]
    async fn test_form_session_guards_the_submit_flow() {
        use crate::models::{FormLifecycle, FormSession};

        let service = in_memory_service();
        let request = valid_request();

        // Validation completes before the service call is issued
        let mut session = FormSession::new();
        session.begin_submit(request.validate()).unwrap();
        assert_eq!(session.state(), FormLifecycle::Submitting);

        // A second submit while one is in flight is rejected outright
        assert!(session.begin_submit(request.validate()).is_err());

        let confirmation = service.create_reservation(request).await.unwrap();
        assert!(confirmation.success);

        session.complete();
        session.acknowledge();
        assert_eq!(session.state(), FormLifecycle::Idle);
    }

    #[tokio::test]
    async fn test_cancelled_status_is_visible() {
        let service = in_memory_service();
        let confirmation = service.create_reservation(valid_request()).await.unwrap();

        service
            .cancel_reservation(&confirmation.confirmation_id)
            .await
            .unwrap();

        let status = service
            .reservation_status(&confirmation.confirmation_id)
            .await
            .unwrap();
        assert_eq!(status.status, ReservationStatus::Cancelled);
    }
}
