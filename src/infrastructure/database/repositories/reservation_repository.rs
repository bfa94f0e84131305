//! SeaORM implementation of ReservationRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::debug;

use crate::domain::ids::{ReservationId, StationId, UserId};
use crate::domain::reservation::{Reservation, ReservationRepository, ReservationStatus};
use crate::domain::slot::Slot;
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::reservation;

use super::db_err;

pub struct SeaOrmReservationRepository {
    db: DatabaseConnection,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: reservation::Model) -> DomainResult<Reservation> {
    let status = ReservationStatus::parse(&m.status)
        .ok_or_else(|| DomainError::Store(format!("unknown reservation status: {}", m.status)))?;
    // A stored row always satisfies end > start; the slot was validated
    // before insertion.
    let slot = Slot::new(m.start_at, m.end_at)?;
    Ok(Reservation {
        id: ReservationId::from(m.id),
        user_id: UserId::from(m.user_id),
        station_id: StationId::from(m.station_id),
        slot,
        status,
        created_at: m.created_at,
    })
}

fn domain_to_active(r: Reservation) -> reservation::ActiveModel {
    reservation::ActiveModel {
        id: Set(r.id.as_uuid()),
        user_id: Set(r.user_id.as_uuid()),
        station_id: Set(r.station_id.as_uuid()),
        start_at: Set(r.slot.start()),
        end_at: Set(r.slot.end()),
        status: Set(r.status.as_str().to_string()),
        created_at: Set(r.created_at),
    }
}

const ACTIVE_STATUSES: [&str; 2] = ["Pending", "Accepted"];

// ── ReservationRepository impl ──────────────────────────────────

#[async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn save(&self, r: Reservation) -> DomainResult<()> {
        debug!("Saving reservation: {}", r.id);
        domain_to_active(r).insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: ReservationId) -> DomainResult<Option<Reservation>> {
        let model = reservation::Entity::find_by_id(id.as_uuid())
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Vec<Reservation>> {
        let models = reservation::Entity::find()
            .filter(reservation::Column::UserId.eq(user_id.as_uuid()))
            .order_by_asc(reservation::Column::StartAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn find_by_station(&self, station_id: StationId) -> DomainResult<Vec<Reservation>> {
        let models = reservation::Entity::find()
            .filter(reservation::Column::StationId.eq(station_id.as_uuid()))
            .order_by_asc(reservation::Column::StartAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn find_active_for_station(
        &self,
        station_id: StationId,
    ) -> DomainResult<Vec<Reservation>> {
        let models = reservation::Entity::find()
            .filter(reservation::Column::StationId.eq(station_id.as_uuid()))
            .filter(reservation::Column::Status.is_in(ACTIVE_STATUSES))
            .order_by_asc(reservation::Column::StartAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn update_status(
        &self,
        id: ReservationId,
        status: ReservationStatus,
    ) -> DomainResult<()> {
        let existing = reservation::Entity::find_by_id(id.as_uuid())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Reservation",
                field: "id",
                value: id.to_string(),
            });
        };

        let mut active: reservation::ActiveModel = existing.into();
        active.status = Set(status.as_str().to_string());
        active.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: ReservationId) -> DomainResult<()> {
        let existing = reservation::Entity::find_by_id(id.as_uuid())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Reservation",
                field: "id",
                value: id.to_string(),
            });
        };

        existing.delete(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
