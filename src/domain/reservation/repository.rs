//! Reservation repository interface

use async_trait::async_trait;

use super::model::{Reservation, ReservationStatus};
use crate::domain::ids::{ReservationId, StationId, UserId};
use crate::domain::DomainResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Save a new reservation
    async fn save(&self, reservation: Reservation) -> DomainResult<()>;

    /// Find reservation by ID
    async fn find_by_id(&self, id: ReservationId) -> DomainResult<Option<Reservation>>;

    /// Find all reservations made by a user (any status)
    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Vec<Reservation>>;

    /// Find all reservations on a station (any status)
    async fn find_by_station(&self, station_id: StationId) -> DomainResult<Vec<Reservation>>;

    /// Find reservations on a station that occupy the calendar
    /// (status Pending or Accepted)
    async fn find_active_for_station(
        &self,
        station_id: StationId,
    ) -> DomainResult<Vec<Reservation>>;

    /// Persist a status change decided by the lifecycle manager
    async fn update_status(
        &self,
        id: ReservationId,
        status: ReservationStatus,
    ) -> DomainResult<()>;

    /// Delete a reservation
    async fn delete(&self, id: ReservationId) -> DomainResult<()>;
}
