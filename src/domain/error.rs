//! Domain errors

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::ids::{ReservationId, StationId};
use crate::domain::reservation::ReservationStatus;

/// Domain-level error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Candidate interval has end <= start
    #[error("Invalid interval: start {start} is not before end {end}")]
    InvalidInterval {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// Requested slot overlaps existing active reservations
    #[error("Slot unavailable on station {station_id}: {} conflicting reservation(s)", conflicts.len())]
    SlotUnavailable {
        station_id: StationId,
        conflicts: Vec<ReservationId>,
    },

    /// Status change not permitted by the reservation state machine
    #[error("Illegal transition: {from} -> {to}")]
    IllegalTransition {
        from: ReservationStatus,
        to: ReservationStatus,
    },

    #[error("Validation: {0}")]
    Validation(String),

    /// Underlying persistence failure, surfaced unchanged
    #[error("Store error: {0}")]
    Store(String),
}

impl DomainError {
    /// Whether this error is likely transient (e.g. DB connection lost)
    /// and the operation may succeed if retried by the caller.
    pub fn is_transient(&self) -> bool {
        matches!(self, DomainError::Store(_))
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
