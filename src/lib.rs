//! # Bornes Service
//!
//! Reservation scheduling for physical charging stations ("bornes")
//! grouped into locations. The core guarantees that no two active
//! reservations for the same station overlap in time, and tracks each
//! reservation through its approval lifecycle.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: entities, strong id types, the `Slot` interval type,
//!   per-aggregate repository traits and errors
//! - **application**: the reservation core (availability checking,
//!   lifecycle management, booking orchestration)
//! - **infrastructure**: SeaORM persistence (entities, migrations,
//!   repositories) and an in-memory store for tests and development

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, shutdown_database, DatabaseConfig};
