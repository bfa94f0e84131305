pub mod database;
pub mod memory;

pub use database::repositories::SeaOrmRepositoryProvider;
pub use database::{init_database, shutdown_database, DatabaseConfig};
pub use memory::InMemoryRepositoryProvider;
