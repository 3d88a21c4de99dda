// Data access layer: the fixture store and the repositories over it
pub mod catalog;
pub mod fixture_store;
pub mod latency;
pub mod reservations;

pub use catalog::{CatalogRepository, FixtureCatalogRepository};
pub use fixture_store::FixtureStore;
pub use latency::SimulatedLatency;
pub use reservations::{InMemoryReservationRepository, ReservationRepository};
