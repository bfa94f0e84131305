//! Half-open reservation time slot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// A half-open time interval `[start, end)`.
///
/// The end instant is excluded, so a slot ending at 11:00 and a slot starting
/// at 11:00 do not overlap. This is what allows back-to-back bookings on the
/// same station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Slot {
    /// Build a slot, rejecting degenerate or inverted intervals.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> DomainResult<Self> {
        if end <= start {
            return Err(DomainError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Two half-open intervals overlap iff each starts before the other ends.
    pub fn overlaps(&self, other: &Slot) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {})",
            self.start.format("%Y-%m-%d %H:%M"),
            self.end.format("%Y-%m-%d %H:%M")
        )
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, hour, min, 0).unwrap()
    }

    #[test]
    fn rejects_empty_interval() {
        let err = Slot::new(at(10, 0), at(10, 0)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInterval { .. }));
    }

    #[test]
    fn rejects_inverted_interval() {
        assert!(Slot::new(at(11, 0), at(10, 0)).is_err());
    }

    #[test]
    fn detects_partial_overlap() {
        let a = Slot::new(at(10, 0), at(11, 0)).unwrap();
        let b = Slot::new(at(10, 30), at(11, 30)).unwrap();
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn detects_containment() {
        let outer = Slot::new(at(9, 0), at(12, 0)).unwrap();
        let inner = Slot::new(at(10, 0), at(11, 0)).unwrap();
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn boundary_touch_is_not_overlap() {
        let morning = Slot::new(at(10, 0), at(11, 0)).unwrap();
        let next = Slot::new(at(11, 0), at(12, 0)).unwrap();
        assert!(!morning.overlaps(&next));
        assert!(!next.overlaps(&morning));
    }

    #[test]
    fn disjoint_slots_do_not_overlap() {
        let a = Slot::new(at(8, 0), at(9, 0)).unwrap();
        let b = Slot::new(at(14, 0), at(15, 0)).unwrap();
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn duration_is_end_minus_start() {
        let slot = Slot::new(at(10, 0), at(11, 30)).unwrap();
        assert_eq!(slot.duration(), Duration::minutes(90));
    }
}
