//! Station availability checking

use std::sync::Arc;

use crate::domain::{DomainError, DomainResult, Reservation, RepositoryProvider, Slot, StationId};

/// Read-only conflict detection for a station's reservation calendar.
///
/// Only active reservations (Pending or Accepted) count against the
/// calendar; rejected and cancelled ones have released their slot.
pub struct AvailabilityService {
    repos: Arc<dyn RepositoryProvider>,
}

impl AvailabilityService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Return every active reservation on `station_id` whose slot overlaps
    /// `slot`. The full set is returned so callers can report what blocks a
    /// request, not just that something does.
    pub async fn conflicts(
        &self,
        station_id: StationId,
        slot: Slot,
    ) -> DomainResult<Vec<Reservation>> {
        self.repos
            .stations()
            .find_by_id(station_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "Station",
                field: "id",
                value: station_id.to_string(),
            })?;

        let active = self
            .repos
            .reservations()
            .find_active_for_station(station_id)
            .await?;

        Ok(active
            .into_iter()
            .filter(|r| r.slot.overlaps(&slot))
            .collect())
    }

    /// Whether `slot` is free on `station_id`.
    pub async fn is_free(&self, station_id: StationId, slot: Slot) -> DomainResult<bool> {
        Ok(self.conflicts(station_id, slot).await?.is_empty())
    }
}
