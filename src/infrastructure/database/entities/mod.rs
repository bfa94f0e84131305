//! Database entities module

pub mod location;
pub mod reservation;
pub mod station;
pub mod user;

pub use location::Entity as Location;
pub use reservation::Entity as Reservation;
pub use station::Entity as Station;
pub use user::Entity as User;
