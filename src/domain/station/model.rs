//! Charging station domain entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::ids::{LocationId, StationId};
use crate::domain::{DomainError, DomainResult};

/// Operational state of a station.
///
/// This is what an operator reports about the hardware. It is orthogonal to
/// the reservation calendar: an `Available` station can be fully booked for
/// a given interval, and an `Occupied` one can have open future slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationState {
    Available,
    Occupied,
    OutOfService,
}

impl StationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Occupied => "Occupied",
            Self::OutOfService => "OutOfService",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Available" => Some(Self::Available),
            "Occupied" => Some(Self::Occupied),
            "OutOfService" => Some(Self::OutOfService),
            _ => None,
        }
    }
}

impl std::fmt::Display for StationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A physical charging point attached to one location.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: StationId,
    pub location_id: LocationId,
    /// Price per hour of charging, strictly positive
    pub hourly_rate: Decimal,
    pub state: StationState,
    pub created_at: DateTime<Utc>,
}

impl Station {
    pub fn new(
        location_id: LocationId,
        hourly_rate: Decimal,
        state: StationState,
    ) -> DomainResult<Self> {
        if hourly_rate <= Decimal::ZERO {
            return Err(DomainError::Validation(format!(
                "hourly rate must be positive, got {hourly_rate}"
            )));
        }
        Ok(Self {
            id: StationId::new(),
            location_id,
            hourly_rate,
            state,
            created_at: Utc::now(),
        })
    }

    /// Operator reports a state change on the hardware.
    pub fn set_state(&mut self, state: StationState) {
        self.state = state;
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn new_station_with_positive_rate() {
        let s = Station::new(LocationId::new(), dec!(7.50), StationState::Available).unwrap();
        assert_eq!(s.hourly_rate, dec!(7.50));
        assert_eq!(s.state, StationState::Available);
    }

    #[test]
    fn rejects_zero_rate() {
        let err = Station::new(LocationId::new(), Decimal::ZERO, StationState::Available);
        assert!(matches!(err, Err(DomainError::Validation(_))));
    }

    #[test]
    fn rejects_negative_rate() {
        assert!(Station::new(LocationId::new(), dec!(-1), StationState::Available).is_err());
    }

    #[test]
    fn set_state_updates() {
        let mut s = Station::new(LocationId::new(), dec!(22), StationState::Occupied).unwrap();
        s.set_state(StationState::OutOfService);
        assert_eq!(s.state, StationState::OutOfService);
    }

    #[test]
    fn state_roundtrip() {
        for state in [
            StationState::Available,
            StationState::Occupied,
            StationState::OutOfService,
        ] {
            assert_eq!(StationState::parse(state.as_str()), Some(state));
        }
        assert_eq!(StationState::parse("Broken"), None);
    }
}
