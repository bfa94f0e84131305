//! SeaORM repository implementations

mod location_repository;
mod repository_provider;
mod reservation_repository;
mod station_repository;
mod user_repository;

pub use location_repository::SeaOrmLocationRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use reservation_repository::SeaOrmReservationRepository;
pub use station_repository::SeaOrmStationRepository;
pub use user_repository::SeaOrmUserRepository;

use crate::domain::DomainError;

/// Map a SeaORM error into the store failure variant. Surfaced unchanged to
/// the caller; the core never retries.
pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Store(e.to_string())
}
