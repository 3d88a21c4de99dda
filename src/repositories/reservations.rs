use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::models::{ConfirmationId, ReservationRecord, ReservationStatus, StoreResult};

/// Storage for reservations issued by this process
///
/// The in-memory implementation is the system of record here; a persistent
/// backend would implement the same trait.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Store a freshly confirmed reservation
    async fn insert(&self, record: ReservationRecord) -> StoreResult<()>;

    /// Look up a reservation by its confirmation id
    async fn find(&self, id: &ConfirmationId) -> StoreResult<Option<ReservationRecord>>;

    /// Update the status of a stored reservation; returns the updated record
    /// or `None` when the id was never issued
    async fn set_status(
        &self,
        id: &ConfirmationId,
        status: ReservationStatus,
    ) -> StoreResult<Option<ReservationRecord>>;

    /// Number of reservations currently stored
    async fn count(&self) -> StoreResult<usize>;
}

/// Reservation store backed by a shared in-memory map
#[derive(Debug, Default)]
pub struct InMemoryReservationRepository {
    records: RwLock<HashMap<ConfirmationId, ReservationRecord>>,
}

impl InMemoryReservationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationRepository {
    #[instrument(skip(self, record), fields(confirmation_id = %record.confirmation_id))]
    async fn insert(&self, record: ReservationRecord) -> StoreResult<()> {
        let mut records = self.records.write().await;
        records.insert(record.confirmation_id.clone(), record);
        info!("Reservation stored");
        Ok(())
    }

    #[instrument(skip(self), fields(confirmation_id = %id))]
    async fn find(&self, id: &ConfirmationId) -> StoreResult<Option<ReservationRecord>> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    #[instrument(skip(self), fields(confirmation_id = %id, status = %status))]
    async fn set_status(
        &self,
        id: &ConfirmationId,
        status: ReservationStatus,
    ) -> StoreResult<Option<ReservationRecord>> {
        let mut records = self.records.write().await;
        match records.get_mut(id) {
            Some(record) => {
                record.status = status;
                info!("Reservation status updated");
                Ok(Some(record.clone()))
            }
            None => Ok(None),
        }
    }

    async fn count(&self) -> StoreResult<usize> {
        let records = self.records.read().await;
        Ok(records.len())
    }
}
