use std::time::Duration;
use tokio::time::sleep;

/// Artificial delays standing in for a network round trip
///
/// Single-item lookups resolve faster than collection fetches, and
/// submissions slower than both, mirroring the latency profile of the
/// backend this service mocks. Tiers come from configuration so tests can
/// zero them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    pub lookup: Duration,
    pub collection: Duration,
    pub submission: Duration,
}

impl SimulatedLatency {
    pub fn new(lookup: Duration, collection: Duration, submission: Duration) -> Self {
        Self {
            lookup,
            collection,
            submission,
        }
    }

    /// No delays at all, for tests
    pub fn zero() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO, Duration::ZERO)
    }

    pub async fn lookup_delay(&self) {
        delay(self.lookup).await;
    }

    pub async fn collection_delay(&self) {
        delay(self.collection).await;
    }

    pub async fn submission_delay(&self) {
        delay(self.submission).await;
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(300),
            Duration::from_millis(500),
            Duration::from_millis(1500),
        )
    }
}

async fn delay(duration: Duration) {
    if !duration.is_zero() {
        sleep(duration).await;
    }
}
