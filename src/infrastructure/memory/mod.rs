//! In-memory repositories for development and testing
//!
//! Mirrors the semantics of the SeaORM store, including cascade deletes and
//! the unique-email constraint, without needing a database file.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::ids::{LocationId, ReservationId, StationId, UserId};
use crate::domain::location::{Location, LocationRepository};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::reservation::{Reservation, ReservationRepository, ReservationStatus};
use crate::domain::station::{Station, StationRepository, StationState};
use crate::domain::user::{User, UserRepository};
use crate::domain::{DomainError, DomainResult};

/// Shared tables. Cascade deletes reach across aggregates, so all four maps
/// live in one struct behind an `Arc`.
#[derive(Default)]
struct MemoryTables {
    users: DashMap<UserId, User>,
    locations: DashMap<LocationId, Location>,
    stations: DashMap<StationId, Station>,
    reservations: DashMap<ReservationId, Reservation>,
}

impl MemoryTables {
    fn delete_reservations_of_user(&self, user_id: UserId) {
        self.reservations.retain(|_, r| r.user_id != user_id);
    }

    fn delete_reservations_of_station(&self, station_id: StationId) {
        self.reservations.retain(|_, r| r.station_id != station_id);
    }

    fn delete_stations_of_location(&self, location_id: LocationId) {
        let doomed: Vec<StationId> = self
            .stations
            .iter()
            .filter(|e| e.location_id == location_id)
            .map(|e| *e.key())
            .collect();
        for id in doomed {
            self.stations.remove(&id);
            self.delete_reservations_of_station(id);
        }
    }
}

pub struct InMemoryUserRepository {
    tables: Arc<MemoryTables>,
}

pub struct InMemoryLocationRepository {
    tables: Arc<MemoryTables>,
}

pub struct InMemoryStationRepository {
    tables: Arc<MemoryTables>,
}

pub struct InMemoryReservationRepository {
    tables: Arc<MemoryTables>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: User) -> DomainResult<()> {
        if self.tables.users.iter().any(|u| u.email == user.email) {
            return Err(DomainError::Store(format!(
                "UNIQUE constraint failed: users.email ({})",
                user.email
            )));
        }
        self.tables.users.insert(user.id, user);
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.tables.users.get(&id).map(|u| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        Ok(self
            .tables
            .users
            .iter()
            .find(|u| u.email == email)
            .map(|u| u.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<User>> {
        Ok(self.tables.users.iter().map(|u| u.clone()).collect())
    }

    async fn update(&self, user: User) -> DomainResult<()> {
        if !self.tables.users.contains_key(&user.id) {
            return Err(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: user.id.to_string(),
            });
        }
        self.tables.users.insert(user.id, user);
        Ok(())
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        if self.tables.users.remove(&id).is_none() {
            return Err(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            });
        }
        self.tables.delete_reservations_of_user(id);
        Ok(())
    }
}

#[async_trait]
impl LocationRepository for InMemoryLocationRepository {
    async fn save(&self, location: Location) -> DomainResult<()> {
        self.tables.locations.insert(location.id, location);
        Ok(())
    }

    async fn find_by_id(&self, id: LocationId) -> DomainResult<Option<Location>> {
        Ok(self.tables.locations.get(&id).map(|l| l.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Location>> {
        Ok(self.tables.locations.iter().map(|l| l.clone()).collect())
    }

    async fn update(&self, location: Location) -> DomainResult<()> {
        if !self.tables.locations.contains_key(&location.id) {
            return Err(DomainError::NotFound {
                entity: "Location",
                field: "id",
                value: location.id.to_string(),
            });
        }
        self.tables.locations.insert(location.id, location);
        Ok(())
    }

    async fn delete(&self, id: LocationId) -> DomainResult<()> {
        if self.tables.locations.remove(&id).is_none() {
            return Err(DomainError::NotFound {
                entity: "Location",
                field: "id",
                value: id.to_string(),
            });
        }
        self.tables.delete_stations_of_location(id);
        Ok(())
    }
}

#[async_trait]
impl StationRepository for InMemoryStationRepository {
    async fn save(&self, station: Station) -> DomainResult<()> {
        self.tables.stations.insert(station.id, station);
        Ok(())
    }

    async fn find_by_id(&self, id: StationId) -> DomainResult<Option<Station>> {
        Ok(self.tables.stations.get(&id).map(|s| s.clone()))
    }

    async fn find_by_location(&self, location_id: LocationId) -> DomainResult<Vec<Station>> {
        Ok(self
            .tables
            .stations
            .iter()
            .filter(|s| s.location_id == location_id)
            .map(|s| s.clone())
            .collect())
    }

    async fn find_by_state(&self, state: StationState) -> DomainResult<Vec<Station>> {
        Ok(self
            .tables
            .stations
            .iter()
            .filter(|s| s.state == state)
            .map(|s| s.clone())
            .collect())
    }

    async fn find_all(&self) -> DomainResult<Vec<Station>> {
        Ok(self.tables.stations.iter().map(|s| s.clone()).collect())
    }

    async fn update_state(&self, id: StationId, state: StationState) -> DomainResult<()> {
        let Some(mut station) = self.tables.stations.get_mut(&id) else {
            return Err(DomainError::NotFound {
                entity: "Station",
                field: "id",
                value: id.to_string(),
            });
        };
        station.set_state(state);
        Ok(())
    }

    async fn delete(&self, id: StationId) -> DomainResult<()> {
        if self.tables.stations.remove(&id).is_none() {
            return Err(DomainError::NotFound {
                entity: "Station",
                field: "id",
                value: id.to_string(),
            });
        }
        self.tables.delete_reservations_of_station(id);
        Ok(())
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationRepository {
    async fn save(&self, reservation: Reservation) -> DomainResult<()> {
        self.tables
            .reservations
            .insert(reservation.id, reservation);
        Ok(())
    }

    async fn find_by_id(&self, id: ReservationId) -> DomainResult<Option<Reservation>> {
        Ok(self.tables.reservations.get(&id).map(|r| r.clone()))
    }

    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Vec<Reservation>> {
        Ok(self
            .tables
            .reservations
            .iter()
            .filter(|r| r.user_id == user_id)
            .map(|r| r.clone())
            .collect())
    }

    async fn find_by_station(&self, station_id: StationId) -> DomainResult<Vec<Reservation>> {
        Ok(self
            .tables
            .reservations
            .iter()
            .filter(|r| r.station_id == station_id)
            .map(|r| r.clone())
            .collect())
    }

    async fn find_active_for_station(
        &self,
        station_id: StationId,
    ) -> DomainResult<Vec<Reservation>> {
        Ok(self
            .tables
            .reservations
            .iter()
            .filter(|r| r.station_id == station_id && r.is_active())
            .map(|r| r.clone())
            .collect())
    }

    async fn update_status(
        &self,
        id: ReservationId,
        status: ReservationStatus,
    ) -> DomainResult<()> {
        let Some(mut reservation) = self.tables.reservations.get_mut(&id) else {
            return Err(DomainError::NotFound {
                entity: "Reservation",
                field: "id",
                value: id.to_string(),
            });
        };
        reservation.status = status;
        Ok(())
    }

    async fn delete(&self, id: ReservationId) -> DomainResult<()> {
        if self.tables.reservations.remove(&id).is_none() {
            return Err(DomainError::NotFound {
                entity: "Reservation",
                field: "id",
                value: id.to_string(),
            });
        }
        Ok(())
    }
}

/// In-memory repository provider.
pub struct InMemoryRepositoryProvider {
    users: InMemoryUserRepository,
    locations: InMemoryLocationRepository,
    stations: InMemoryStationRepository,
    reservations: InMemoryReservationRepository,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        let tables = Arc::new(MemoryTables::default());
        Self {
            users: InMemoryUserRepository {
                tables: tables.clone(),
            },
            locations: InMemoryLocationRepository {
                tables: tables.clone(),
            },
            stations: InMemoryStationRepository {
                tables: tables.clone(),
            },
            reservations: InMemoryReservationRepository { tables },
        }
    }
}

impl Default for InMemoryRepositoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn locations(&self) -> &dyn LocationRepository {
        &self.locations
    }

    fn stations(&self) -> &dyn StationRepository {
        &self.stations
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        &self.reservations
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Slot, UserRole};
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn slot(hour: u32) -> Slot {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 6, 1, hour + 1, 0, 0).unwrap();
        Slot::new(start, end).unwrap()
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let repos = InMemoryRepositoryProvider::new();
        let first = User::new("a@example.com", "pw", UserRole::Standard);
        let second = User::new("a@example.com", "pw2", UserRole::Standard);

        repos.users().save(first).await.unwrap();
        let err = repos.users().save(second).await.unwrap_err();
        assert!(matches!(err, DomainError::Store(_)));
    }

    #[tokio::test]
    async fn deleting_user_cascades_reservations() {
        let repos = InMemoryRepositoryProvider::new();
        let user = User::new("b@example.com", "pw", UserRole::Standard);
        let location = Location::new("Parking", "1 rue Test");
        let station =
            Station::new(location.id, dec!(7), StationState::Available).unwrap();
        let reservation = Reservation::new(user.id, station.id, slot(10));

        repos.users().save(user.clone()).await.unwrap();
        repos.locations().save(location).await.unwrap();
        repos.stations().save(station.clone()).await.unwrap();
        repos.reservations().save(reservation).await.unwrap();

        repos.users().delete(user.id).await.unwrap();
        let left = repos
            .reservations()
            .find_by_station(station.id)
            .await
            .unwrap();
        assert!(left.is_empty());
    }

    #[tokio::test]
    async fn deleting_location_cascades_stations_and_reservations() {
        let repos = InMemoryRepositoryProvider::new();
        let user = User::new("c@example.com", "pw", UserRole::Standard);
        let location = Location::new("Zone Nord", "15 Route Nationale");
        let station =
            Station::new(location.id, dec!(22), StationState::Available).unwrap();
        let reservation = Reservation::new(user.id, station.id, slot(9));

        repos.users().save(user.clone()).await.unwrap();
        repos.locations().save(location.clone()).await.unwrap();
        repos.stations().save(station.clone()).await.unwrap();
        repos.reservations().save(reservation).await.unwrap();

        repos.locations().delete(location.id).await.unwrap();
        assert!(repos
            .stations()
            .find_by_id(station.id)
            .await
            .unwrap()
            .is_none());
        assert!(repos
            .reservations()
            .find_by_user(user.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn find_active_excludes_terminal_statuses() {
        let repos = InMemoryRepositoryProvider::new();
        let user = User::new("d@example.com", "pw", UserRole::Standard);
        let location = Location::new("Parking", "1 rue Test");
        let station =
            Station::new(location.id, dec!(7), StationState::Available).unwrap();

        repos.users().save(user.clone()).await.unwrap();
        repos.locations().save(location).await.unwrap();
        repos.stations().save(station.clone()).await.unwrap();

        let kept = Reservation::new(user.id, station.id, slot(10));
        let rejected = Reservation::new(user.id, station.id, slot(12));
        repos.reservations().save(kept.clone()).await.unwrap();
        repos.reservations().save(rejected.clone()).await.unwrap();
        repos
            .reservations()
            .update_status(rejected.id, ReservationStatus::Rejected)
            .await
            .unwrap();

        let active = repos
            .reservations()
            .find_active_for_station(station.id)
            .await
            .unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, kept.id);
    }
}
