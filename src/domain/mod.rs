pub mod error;
pub mod ids;
pub mod location;
pub mod repositories;
pub mod reservation;
pub mod slot;
pub mod station;
pub mod user;

// Re-export commonly used types
pub use error::{DomainError, DomainResult};
pub use ids::{LocationId, ReservationId, StationId, UserId};
pub use location::Location;
pub use repositories::RepositoryProvider;
pub use reservation::{Reservation, ReservationStatus};
pub use slot::Slot;
pub use station::{Station, StationState};
pub use user::{User, UserRole};
