//! Booking orchestration

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::availability::AvailabilityService;
use crate::domain::{
    DomainError, DomainResult, Reservation, RepositoryProvider, Slot, StationId, UserId,
};

/// Composes the availability check and reservation creation into the single
/// user-facing `book` operation.
///
/// The check-then-insert sequence runs under a per-station mutex so that two
/// concurrent bookings of the same station cannot both pass the availability
/// check before either insert lands. Bookings on different stations take
/// different locks and never contend.
pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
    availability: AvailabilityService,
    station_locks: DashMap<StationId, Arc<Mutex<()>>>,
}

impl BookingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        let availability = AvailabilityService::new(repos.clone());
        Self {
            repos,
            availability,
            station_locks: DashMap::new(),
        }
    }

    /// Reserve `station_id` for `[start, end)` on behalf of `user_id`.
    ///
    /// The reservation is created in `Pending` status; acceptance is a
    /// separate lifecycle step. Failures: `InvalidInterval` when end <=
    /// start, `NotFound` for an unknown user or station, `SlotUnavailable`
    /// (carrying the conflicting reservation ids) when the slot is taken.
    pub async fn book(
        &self,
        user_id: UserId,
        station_id: StationId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<Reservation> {
        let slot = Slot::new(start, end)?;

        let user = self
            .repos
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "User",
                field: "id",
                value: user_id.to_string(),
            })?;

        let station = self
            .repos
            .stations()
            .find_by_id(station_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "Station",
                field: "id",
                value: station_id.to_string(),
            })?;

        // Clone the lock handle out before awaiting; holding a DashMap guard
        // across an await point would pin the shard.
        let lock = self
            .station_locks
            .entry(station_id)
            .or_default()
            .clone();
        let _guard = lock.lock().await;

        debug!(station = %station_id, %slot, "checking availability");
        let conflicts = self.availability.conflicts(station_id, slot).await?;
        if !conflicts.is_empty() {
            return Err(DomainError::SlotUnavailable {
                station_id,
                conflicts: conflicts.into_iter().map(|r| r.id).collect(),
            });
        }

        let reservation = Reservation::new(user.id, station.id, slot);
        self.repos.reservations().save(reservation.clone()).await?;

        info!(
            reservation = %reservation.id,
            user = %user.email,
            station = %station.id,
            %slot,
            "reservation created"
        );

        Ok(reservation)
    }

    /// Conflict probe without booking, for callers offering alternate slots.
    pub async fn conflicts(
        &self,
        station_id: StationId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<Vec<Reservation>> {
        let slot = Slot::new(start, end)?;
        self.availability.conflicts(station_id, slot).await
    }
}
