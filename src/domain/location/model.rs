//! Charging location domain entity

use chrono::{DateTime, Utc};

use crate::domain::ids::LocationId;

/// A physical site grouping one or more charging stations.
///
/// Stations reference their location by id; deleting a location cascades to
/// its stations at the store level.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl Location {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: LocationId::new(),
            name: name.into(),
            address: address.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_location_carries_fields() {
        let l = Location::new("Parking Principal", "1 Avenue de la République");
        assert_eq!(l.name, "Parking Principal");
        assert_eq!(l.address, "1 Avenue de la République");
    }
}
