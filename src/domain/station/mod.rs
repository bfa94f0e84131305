pub mod model;
pub mod repository;

pub use model::{Station, StationState};
pub use repository::StationRepository;
