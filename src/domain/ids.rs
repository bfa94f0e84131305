//! Strong identifier types
//!
//! Every entity id is generated locally at construction time, never assigned
//! by the store. This keeps identity and equality well-defined for records
//! that have not been persisted yet.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a [`crate::domain::user::User`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

/// Identifier of a [`crate::domain::location::Location`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationId(Uuid);

/// Identifier of a [`crate::domain::station::Station`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StationId(Uuid);

/// Identifier of a [`crate::domain::reservation::Reservation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationId(Uuid);

macro_rules! impl_id {
    ($name:ident) => {
        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

impl_id!(UserId);
impl_id!(LocationId);
impl_id!(StationId);
impl_id!(ReservationId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        assert_ne!(StationId::new(), StationId::new());
    }

    #[test]
    fn id_roundtrips_through_uuid() {
        let id = ReservationId::new();
        assert_eq!(ReservationId::from(id.as_uuid()), id);
    }
}
