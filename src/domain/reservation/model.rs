//! Reservation domain entity

use chrono::{DateTime, Utc};

use crate::domain::ids::{ReservationId, StationId, UserId};
use crate::domain::slot::Slot;

/// Reservation status
///
/// State machine: `Pending -> Accepted | Rejected`, `Accepted -> Cancelled`.
/// `Rejected` and `Cancelled` are terminal and release the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    /// Awaiting operator decision (initial state)
    Pending,
    /// Confirmed by an operator
    Accepted,
    /// Refused by an operator
    Rejected,
    /// Withdrawn after acceptance
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(Self::Pending),
            "Accepted" => Some(Self::Accepted),
            "Rejected" => Some(Self::Rejected),
            "Cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Whether a reservation in this status occupies the station calendar.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Accepted)
    }

    /// No transitions leave a terminal status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Cancelled)
    }

    /// Legality table of the status state machine. Self-transitions are not
    /// permitted.
    pub fn can_transition_to(&self, target: ReservationStatus) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Accepted)
                | (Self::Pending, Self::Rejected)
                | (Self::Accepted, Self::Cancelled)
        )
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A booked time slot binding one user to one station.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: ReservationId,
    pub user_id: UserId,
    pub station_id: StationId,
    pub slot: Slot,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Create a reservation in the initial `Pending` status.
    pub fn new(user_id: UserId, station_id: StationId, slot: Slot) -> Self {
        Self {
            id: ReservationId::new(),
            user_id,
            station_id,
            slot,
            status: ReservationStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Whether this reservation occupies the station calendar.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_slot() -> Slot {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 6, 1, 11, 0, 0).unwrap();
        Slot::new(start, end).unwrap()
    }

    fn sample_reservation() -> Reservation {
        Reservation::new(UserId::new(), StationId::new(), sample_slot())
    }

    #[test]
    fn new_reservation_is_pending_and_active() {
        let r = sample_reservation();
        assert_eq!(r.status, ReservationStatus::Pending);
        assert!(r.is_active());
    }

    #[test]
    fn pending_can_be_accepted_or_rejected() {
        let pending = ReservationStatus::Pending;
        assert!(pending.can_transition_to(ReservationStatus::Accepted));
        assert!(pending.can_transition_to(ReservationStatus::Rejected));
        assert!(!pending.can_transition_to(ReservationStatus::Cancelled));
        assert!(!pending.can_transition_to(ReservationStatus::Pending));
    }

    #[test]
    fn accepted_can_only_be_cancelled() {
        let accepted = ReservationStatus::Accepted;
        assert!(accepted.can_transition_to(ReservationStatus::Cancelled));
        assert!(!accepted.can_transition_to(ReservationStatus::Pending));
        assert!(!accepted.can_transition_to(ReservationStatus::Rejected));
        assert!(!accepted.can_transition_to(ReservationStatus::Accepted));
    }

    #[test]
    fn terminal_statuses_allow_nothing() {
        for terminal in [ReservationStatus::Rejected, ReservationStatus::Cancelled] {
            assert!(terminal.is_terminal());
            for target in [
                ReservationStatus::Pending,
                ReservationStatus::Accepted,
                ReservationStatus::Rejected,
                ReservationStatus::Cancelled,
            ] {
                assert!(!terminal.can_transition_to(target));
            }
        }
    }

    #[test]
    fn terminal_statuses_release_the_slot() {
        assert!(!ReservationStatus::Rejected.is_active());
        assert!(!ReservationStatus::Cancelled.is_active());
        assert!(ReservationStatus::Pending.is_active());
        assert!(ReservationStatus::Accepted.is_active());
    }

    #[test]
    fn status_roundtrip() {
        for status in [
            ReservationStatus::Pending,
            ReservationStatus::Accepted,
            ReservationStatus::Rejected,
            ReservationStatus::Cancelled,
        ] {
            assert_eq!(ReservationStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ReservationStatus::parse("Expired"), None);
    }
}
