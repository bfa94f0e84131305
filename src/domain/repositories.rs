//! Repository provider interface

use crate::domain::location::LocationRepository;
use crate::domain::reservation::ReservationRepository;
use crate::domain::station::StationRepository;
use crate::domain::user::UserRepository;

/// Bundles the per-aggregate repositories behind one injectable handle.
///
/// The application owns exactly one provider, constructed at startup and
/// passed into the services; nothing reaches for ambient global state.
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepository;

    fn locations(&self) -> &dyn LocationRepository;

    fn stations(&self) -> &dyn StationRepository;

    fn reservations(&self) -> &dyn ReservationRepository;
}
