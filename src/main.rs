//! Bornes reservation service
//!
//! Owns the store lifecycle: connects the database, runs migrations, wires
//! the services and walks through a seeded demonstration flow before
//! closing the connection. Reads configuration from a TOML file
//! (~/.config/bornes-service/config.toml).

use std::sync::Arc;

use chrono::{Duration, Timelike, Utc};
use rust_decimal::Decimal;
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use bornes::application::{BookingService, LifecycleService};
use bornes::domain::{
    DomainError, Location, RepositoryProvider, Station, StationState, User, UserRole,
};
use bornes::infrastructure::database::migrator::Migrator;
use bornes::infrastructure::SeaOrmRepositoryProvider;
use bornes::{
    default_config_path, init_database, shutdown_database, AppConfig, DatabaseConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("BORNES_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting bornes reservation service...");

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig {
        url: cfg.database.url.clone(),
    };
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    Migrator::up(&db, None).await?;
    info!("Migrations completed");

    // ── Services ───────────────────────────────────────────────
    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
    let booking = BookingService::new(repos.clone());
    let lifecycle = LifecycleService::new(repos.clone());

    if let Err(e) = run_demo(repos.as_ref(), &booking, &lifecycle).await {
        error!("Demonstration flow failed: {}", e);
    }

    shutdown_database(db).await?;
    info!("Shutdown complete");
    Ok(())
}

/// Walk through the standard booking scenario: seed accounts, locations and
/// stations, book an available station, accept the reservation, show that an
/// overlapping request is refused and a back-to-back one is not.
async fn run_demo(
    repos: &dyn RepositoryProvider,
    booking: &BookingService,
    lifecycle: &LifecycleService,
) -> Result<(), DomainError> {
    let user1 = get_or_create_user(repos, "jean.dupont@example.com", "password123").await?;
    let user2 = get_or_create_user(repos, "alice.martin@example.com", "securepass").await?;
    info!("Users ready: {} / {}", user1.email, user2.email);

    let location = get_or_create_location(repos, "Parking Principal", "1 Avenue de la République")
        .await?;
    let stations = seed_stations(repos, &location).await?;
    info!(
        "Location '{}' has {} station(s)",
        location.name,
        stations.len()
    );

    let available = repos.stations().find_by_state(StationState::Available).await?;
    let Some(station) = available.first() else {
        warn!("No available station to demonstrate booking");
        return Ok(());
    };

    // Tomorrow at 10:00, on the hour
    let start = (Utc::now() + Duration::days(1))
        .with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .expect("in-range time components")
        .with_hour(10)
        .expect("hour 10 is valid");
    let end = start + Duration::hours(1);

    let reservation = booking.book(user2.id, station.id, start, end).await?;
    info!(
        "Reservation {} created in status {}",
        reservation.id, reservation.status
    );

    let accepted = lifecycle.accept(reservation.id).await?;
    info!("Reservation {} is now {}", accepted.id, accepted.status);

    // Overlapping request on the same station must be refused
    match booking
        .book(user1.id, station.id, start + Duration::minutes(30), end + Duration::minutes(30))
        .await
    {
        Err(DomainError::SlotUnavailable { conflicts, .. }) => {
            info!(
                "Overlapping request correctly refused ({} conflict(s))",
                conflicts.len()
            );
        }
        Err(e) => return Err(e),
        Ok(r) => warn!("Overlapping request unexpectedly accepted: {}", r.id),
    }

    // Back-to-back slot starting exactly at the previous end is fine
    let follow_up = booking
        .book(user1.id, station.id, end, end + Duration::hours(1))
        .await?;
    info!("Back-to-back reservation {} created", follow_up.id);

    let per_user = repos.reservations().find_by_user(user2.id).await?;
    info!("{} has {} reservation(s)", user2.email, per_user.len());
    let per_station = repos.reservations().find_by_station(station.id).await?;
    info!("Station {} has {} reservation(s)", station.id, per_station.len());

    Ok(())
}

async fn get_or_create_user(
    repos: &dyn RepositoryProvider,
    email: &str,
    password: &str,
) -> Result<User, DomainError> {
    if let Some(existing) = repos.users().find_by_email(email).await? {
        return Ok(existing);
    }
    let user = User::new(email, password, UserRole::Standard);
    repos.users().save(user.clone()).await?;
    Ok(user)
}

async fn get_or_create_location(
    repos: &dyn RepositoryProvider,
    name: &str,
    address: &str,
) -> Result<Location, DomainError> {
    if let Some(existing) = repos
        .locations()
        .find_all()
        .await?
        .into_iter()
        .find(|l| l.name == name)
    {
        return Ok(existing);
    }
    let location = Location::new(name, address);
    repos.locations().save(location.clone()).await?;
    Ok(location)
}

async fn seed_stations(
    repos: &dyn RepositoryProvider,
    location: &Location,
) -> Result<Vec<Station>, DomainError> {
    let existing = repos.stations().find_by_location(location.id).await?;
    if !existing.is_empty() {
        return Ok(existing);
    }

    let rates_and_states = [
        (Decimal::new(700, 2), StationState::Available),
        (Decimal::new(2200, 2), StationState::Occupied),
        (Decimal::new(300, 2), StationState::OutOfService),
    ];
    let mut stations = Vec::new();
    for (rate, state) in rates_and_states {
        let station = Station::new(location.id, rate, state)?;
        repos.stations().save(station.clone()).await?;
        stations.push(station);
    }
    Ok(stations)
}
