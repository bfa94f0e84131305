//! SeaORM implementation of LocationRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};
use tracing::debug;

use crate::domain::ids::LocationId;
use crate::domain::location::{Location, LocationRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::location;

use super::db_err;

pub struct SeaOrmLocationRepository {
    db: DatabaseConnection,
}

impl SeaOrmLocationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: location::Model) -> Location {
    Location {
        id: LocationId::from(m.id),
        name: m.name,
        address: m.address,
        created_at: m.created_at,
    }
}

fn domain_to_active(l: Location) -> location::ActiveModel {
    location::ActiveModel {
        id: Set(l.id.as_uuid()),
        name: Set(l.name),
        address: Set(l.address),
        created_at: Set(l.created_at),
    }
}

// ── LocationRepository impl ─────────────────────────────────────

#[async_trait]
impl LocationRepository for SeaOrmLocationRepository {
    async fn save(&self, l: Location) -> DomainResult<()> {
        debug!("Saving location: {}", l.name);
        domain_to_active(l).insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: LocationId) -> DomainResult<Option<Location>> {
        let model = location::Entity::find_by_id(id.as_uuid())
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Location>> {
        let models = location::Entity::find()
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn update(&self, l: Location) -> DomainResult<()> {
        let existing = location::Entity::find_by_id(l.id.as_uuid())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::NotFound {
                entity: "Location",
                field: "id",
                value: l.id.to_string(),
            });
        }

        domain_to_active(l).update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: LocationId) -> DomainResult<()> {
        let existing = location::Entity::find_by_id(id.as_uuid())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Location",
                field: "id",
                value: id.to_string(),
            });
        };

        // FK cascade removes the stations, whose cascade removes reservations
        existing.delete(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
