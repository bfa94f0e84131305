//! Location repository interface

use async_trait::async_trait;

use super::model::Location;
use crate::domain::ids::LocationId;
use crate::domain::DomainResult;

#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Save a new location
    async fn save(&self, location: Location) -> DomainResult<()>;

    /// Find location by ID
    async fn find_by_id(&self, id: LocationId) -> DomainResult<Option<Location>>;

    /// Find all locations
    async fn find_all(&self) -> DomainResult<Vec<Location>>;

    /// Update an existing location
    async fn update(&self, location: Location) -> DomainResult<()>;

    /// Delete a location. Cascades to its stations and, transitively, to
    /// their reservations.
    async fn delete(&self, id: LocationId) -> DomainResult<()>;
}
