//! Station repository interface

use async_trait::async_trait;

use super::model::{Station, StationState};
use crate::domain::ids::{LocationId, StationId};
use crate::domain::DomainResult;

#[async_trait]
pub trait StationRepository: Send + Sync {
    /// Save a new station
    async fn save(&self, station: Station) -> DomainResult<()>;

    /// Find station by ID
    async fn find_by_id(&self, id: StationId) -> DomainResult<Option<Station>>;

    /// Find all stations attached to a location
    async fn find_by_location(&self, location_id: LocationId) -> DomainResult<Vec<Station>>;

    /// Find all stations in a given operational state
    async fn find_by_state(&self, state: StationState) -> DomainResult<Vec<Station>>;

    /// Find all stations
    async fn find_all(&self) -> DomainResult<Vec<Station>>;

    /// Update the operational state reported by an operator
    async fn update_state(&self, id: StationId, state: StationState) -> DomainResult<()>;

    /// Delete a station. Cascades to its reservations.
    async fn delete(&self, id: StationId) -> DomainResult<()>;
}
