//! SeaORM implementation of StationRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
};
use tracing::debug;

use crate::domain::ids::{LocationId, StationId};
use crate::domain::station::{Station, StationRepository, StationState};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::station;

use super::db_err;

pub struct SeaOrmStationRepository {
    db: DatabaseConnection,
}

impl SeaOrmStationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: station::Model) -> DomainResult<Station> {
    let state = StationState::parse(&m.state)
        .ok_or_else(|| DomainError::Store(format!("unknown station state: {}", m.state)))?;
    Ok(Station {
        id: StationId::from(m.id),
        location_id: LocationId::from(m.location_id),
        hourly_rate: m.hourly_rate,
        state,
        created_at: m.created_at,
    })
}

fn domain_to_active(s: Station) -> station::ActiveModel {
    station::ActiveModel {
        id: Set(s.id.as_uuid()),
        location_id: Set(s.location_id.as_uuid()),
        hourly_rate: Set(s.hourly_rate),
        state: Set(s.state.as_str().to_string()),
        created_at: Set(s.created_at),
    }
}

// ── StationRepository impl ──────────────────────────────────────

#[async_trait]
impl StationRepository for SeaOrmStationRepository {
    async fn save(&self, s: Station) -> DomainResult<()> {
        debug!("Saving station: {}", s.id);
        domain_to_active(s).insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: StationId) -> DomainResult<Option<Station>> {
        let model = station::Entity::find_by_id(id.as_uuid())
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn find_by_location(&self, location_id: LocationId) -> DomainResult<Vec<Station>> {
        let models = station::Entity::find()
            .filter(station::Column::LocationId.eq(location_id.as_uuid()))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn find_by_state(&self, state: StationState) -> DomainResult<Vec<Station>> {
        let models = station::Entity::find()
            .filter(station::Column::State.eq(state.as_str()))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn find_all(&self) -> DomainResult<Vec<Station>> {
        let models = station::Entity::find()
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn update_state(&self, id: StationId, state: StationState) -> DomainResult<()> {
        let existing = station::Entity::find_by_id(id.as_uuid())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Station",
                field: "id",
                value: id.to_string(),
            });
        };

        let mut active: station::ActiveModel = existing.into();
        active.state = Set(state.as_str().to_string());
        active.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: StationId) -> DomainResult<()> {
        let existing = station::Entity::find_by_id(id.as_uuid())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Station",
                field: "id",
                value: id.to_string(),
            });
        };

        // FK cascade removes the station's reservations
        existing.delete(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
