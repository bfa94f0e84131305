//! End-to-end booking scenarios against the in-memory store

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal_macros::dec;

use bornes::application::{BookingService, LifecycleService};
use bornes::domain::{
    DomainError, Location, RepositoryProvider, Reservation, ReservationStatus, Slot, Station,
    StationId, StationState, User, UserId, UserRole,
};
use bornes::infrastructure::InMemoryRepositoryProvider;

struct TestEnv {
    repos: Arc<dyn RepositoryProvider>,
    booking: Arc<BookingService>,
    lifecycle: LifecycleService,
    user: User,
    station_a: Station,
    station_b: Station,
}

async fn env() -> TestEnv {
    let repos: Arc<dyn RepositoryProvider> = Arc::new(InMemoryRepositoryProvider::new());

    let user = User::new("jean.dupont@example.com", "password123", UserRole::Standard);
    let location = Location::new("Parking Principal", "1 Avenue de la République");
    let station_a = Station::new(location.id, dec!(7.00), StationState::Available).unwrap();
    let station_b = Station::new(location.id, dec!(22.00), StationState::Occupied).unwrap();

    repos.users().save(user.clone()).await.unwrap();
    repos.locations().save(location).await.unwrap();
    repos.stations().save(station_a.clone()).await.unwrap();
    repos.stations().save(station_b.clone()).await.unwrap();

    TestEnv {
        booking: Arc::new(BookingService::new(repos.clone())),
        lifecycle: LifecycleService::new(repos.clone()),
        repos,
        user,
        station_a,
        station_b,
    }
}

fn at(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, hour, min, 0).unwrap()
}

#[tokio::test]
async fn back_to_back_bookings_succeed() {
    let env = env().await;

    let first = env
        .booking
        .book(env.user.id, env.station_a.id, at(10, 0), at(11, 0))
        .await
        .unwrap();
    let second = env
        .booking
        .book(env.user.id, env.station_a.id, at(11, 0), at(12, 0))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.status, ReservationStatus::Pending);
    assert_eq!(second.status, ReservationStatus::Pending);
}

#[tokio::test]
async fn overlapping_booking_is_refused_with_conflicts() {
    let env = env().await;

    let first = env
        .booking
        .book(env.user.id, env.station_a.id, at(10, 0), at(11, 0))
        .await
        .unwrap();

    let err = env
        .booking
        .book(env.user.id, env.station_a.id, at(10, 30), at(11, 30))
        .await
        .unwrap_err();

    match err {
        DomainError::SlotUnavailable {
            station_id,
            conflicts,
        } => {
            assert_eq!(station_id, env.station_a.id);
            assert_eq!(conflicts, vec![first.id]);
        }
        other => panic!("expected SlotUnavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_interval_creates_no_record() {
    let env = env().await;

    for (start, end) in [(at(10, 0), at(10, 0)), (at(11, 0), at(10, 0))] {
        let err = env
            .booking
            .book(env.user.id, env.station_a.id, start, end)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInterval { .. }));
    }

    let stored = env
        .repos
        .reservations()
        .find_by_station(env.station_a.id)
        .await
        .unwrap();
    assert!(stored.is_empty());
}

#[tokio::test]
async fn unknown_user_or_station_is_not_found() {
    let env = env().await;

    let err = env
        .booking
        .book(UserId::new(), env.station_a.id, at(10, 0), at(11, 0))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::NotFound { entity: "User", .. }
    ));

    let err = env
        .booking
        .book(env.user.id, StationId::new(), at(10, 0), at(11, 0))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::NotFound {
            entity: "Station",
            ..
        }
    ));
}

#[tokio::test]
async fn overlapping_bookings_on_different_stations_both_succeed() {
    let env = env().await;

    env.booking
        .book(env.user.id, env.station_a.id, at(10, 0), at(11, 0))
        .await
        .unwrap();
    // Operational state (Occupied) does not constrain the calendar
    env.booking
        .book(env.user.id, env.station_b.id, at(10, 0), at(11, 0))
        .await
        .unwrap();
}

#[tokio::test]
async fn conflict_probe_reports_without_booking() {
    let env = env().await;

    let reservation = env
        .booking
        .book(env.user.id, env.station_a.id, at(10, 0), at(11, 0))
        .await
        .unwrap();

    let conflicts = env
        .booking
        .conflicts(env.station_a.id, at(10, 45), at(11, 45))
        .await
        .unwrap();
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].id, reservation.id);

    // The probe itself must not create anything
    let stored = env
        .repos
        .reservations()
        .find_by_station(env.station_a.id)
        .await
        .unwrap();
    assert_eq!(stored.len(), 1);
}

#[tokio::test]
async fn rejected_reservation_cannot_be_accepted() {
    let env = env().await;

    let reservation = env
        .booking
        .book(env.user.id, env.station_a.id, at(10, 0), at(11, 0))
        .await
        .unwrap();
    env.lifecycle.reject(reservation.id).await.unwrap();

    let err = env.lifecycle.accept(reservation.id).await.unwrap_err();
    assert_eq!(
        err,
        DomainError::IllegalTransition {
            from: ReservationStatus::Rejected,
            to: ReservationStatus::Accepted,
        }
    );

    // Stored status is untouched
    let stored = env
        .repos
        .reservations()
        .find_by_id(reservation.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, ReservationStatus::Rejected);
}

#[tokio::test]
async fn accepting_rechecks_the_calendar() {
    let env = env().await;

    // Two conflicting pendings created directly through the store, bypassing
    // the orchestrator's lock
    let slot_a = Slot::new(at(10, 0), at(11, 0)).unwrap();
    let slot_b = Slot::new(at(10, 30), at(11, 30)).unwrap();
    let first = Reservation::new(env.user.id, env.station_a.id, slot_a);
    let second = Reservation::new(env.user.id, env.station_a.id, slot_b);
    env.repos.reservations().save(first.clone()).await.unwrap();
    env.repos.reservations().save(second.clone()).await.unwrap();

    env.lifecycle.accept(first.id).await.unwrap();

    let err = env.lifecycle.accept(second.id).await.unwrap_err();
    assert!(matches!(err, DomainError::SlotUnavailable { .. }));

    let stored = env
        .repos
        .reservations()
        .find_by_id(second.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, ReservationStatus::Pending);
}

#[tokio::test]
async fn cancelled_reservation_releases_the_slot() {
    let env = env().await;

    let reservation = env
        .booking
        .book(env.user.id, env.station_a.id, at(10, 0), at(11, 0))
        .await
        .unwrap();
    env.lifecycle.accept(reservation.id).await.unwrap();
    env.lifecycle.cancel(reservation.id).await.unwrap();

    // Same slot is bookable again
    env.booking
        .book(env.user.id, env.station_a.id, at(10, 0), at(11, 0))
        .await
        .unwrap();
}

#[tokio::test]
async fn active_reservations_never_overlap_per_station() {
    let env = env().await;

    // A mix of granted and refused requests over one afternoon
    let requests = [
        (at(10, 0), at(11, 0)),
        (at(10, 30), at(11, 30)),
        (at(11, 0), at(12, 30)),
        (at(12, 0), at(13, 0)),
        (at(12, 30), at(14, 0)),
    ];
    for (start, end) in requests {
        let _ = env
            .booking
            .book(env.user.id, env.station_a.id, start, end)
            .await;
    }

    let active = env
        .repos
        .reservations()
        .find_active_for_station(env.station_a.id)
        .await
        .unwrap();
    for (i, a) in active.iter().enumerate() {
        for b in active.iter().skip(i + 1) {
            assert!(
                !a.slot.overlaps(&b.slot),
                "active reservations {} and {} overlap",
                a.id,
                b.id
            );
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_bookings_yield_exactly_one_success() {
    let env = env().await;
    let attempts = 16;

    let mut handles = Vec::new();
    for _ in 0..attempts {
        let booking = env.booking.clone();
        let user_id = env.user.id;
        let station_id = env.station_a.id;
        handles.push(tokio::spawn(async move {
            booking.book(user_id, station_id, at(10, 0), at(11, 0)).await
        }));
    }

    let mut successes = 0;
    let mut unavailable = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(DomainError::SlotUnavailable { .. }) => unavailable += 1,
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(unavailable, attempts - 1);

    let active = env
        .repos
        .reservations()
        .find_active_for_station(env.station_a.id)
        .await
        .unwrap();
    assert_eq!(active.len(), 1);
}
