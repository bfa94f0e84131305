//! Reservation lifecycle management

use std::sync::Arc;

use tracing::info;

use crate::domain::{
    DomainError, DomainResult, Reservation, ReservationId, ReservationStatus, RepositoryProvider,
};

/// Owns the reservation status state machine.
///
/// Legal transitions: `Pending -> Accepted | Rejected` and
/// `Accepted -> Cancelled`. Everything else fails with `IllegalTransition`
/// and leaves the stored status untouched.
pub struct LifecycleService {
    repos: Arc<dyn RepositoryProvider>,
}

impl LifecycleService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Move a reservation to `target`, returning the updated reservation.
    ///
    /// Accepting re-checks the calendar: a pending reservation created
    /// directly through the store may conflict with another active one, and
    /// acceptance must not commit a double booking. Conflicts fail with
    /// `SlotUnavailable`.
    pub async fn transition(
        &self,
        id: ReservationId,
        target: ReservationStatus,
    ) -> DomainResult<Reservation> {
        let mut reservation = self
            .repos
            .reservations()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "Reservation",
                field: "id",
                value: id.to_string(),
            })?;

        if !reservation.status.can_transition_to(target) {
            return Err(DomainError::IllegalTransition {
                from: reservation.status,
                to: target,
            });
        }

        if target == ReservationStatus::Accepted {
            self.ensure_still_free(&reservation).await?;
        }

        let from = reservation.status;
        self.repos.reservations().update_status(id, target).await?;
        reservation.status = target;

        // Signal for downstream consumers; delivery itself lives elsewhere.
        info!(
            reservation = %id,
            station = %reservation.station_id,
            %from,
            to = %target,
            "reservation status changed"
        );

        Ok(reservation)
    }

    /// Accept a pending reservation.
    pub async fn accept(&self, id: ReservationId) -> DomainResult<Reservation> {
        self.transition(id, ReservationStatus::Accepted).await
    }

    /// Reject a pending reservation.
    pub async fn reject(&self, id: ReservationId) -> DomainResult<Reservation> {
        self.transition(id, ReservationStatus::Rejected).await
    }

    /// Cancel an accepted reservation.
    pub async fn cancel(&self, id: ReservationId) -> DomainResult<Reservation> {
        self.transition(id, ReservationStatus::Cancelled).await
    }

    /// Overlap re-validation at acceptance time, excluding the reservation
    /// under transition from its own conflict set.
    async fn ensure_still_free(&self, reservation: &Reservation) -> DomainResult<()> {
        let conflicts: Vec<_> = self
            .repos
            .reservations()
            .find_active_for_station(reservation.station_id)
            .await?
            .into_iter()
            .filter(|other| other.id != reservation.id && other.slot.overlaps(&reservation.slot))
            .map(|other| other.id)
            .collect();

        if conflicts.is_empty() {
            Ok(())
        } else {
            Err(DomainError::SlotUnavailable {
                station_id: reservation.station_id,
                conflicts,
            })
        }
    }
}
