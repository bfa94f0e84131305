//! User repository interface

use async_trait::async_trait;

use super::model::User;
use crate::domain::ids::UserId;
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Save a new user. The email must be unique across all users.
    async fn save(&self, user: User) -> DomainResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Find all users
    async fn find_all(&self) -> DomainResult<Vec<User>>;

    /// Update an existing user
    async fn update(&self, user: User) -> DomainResult<()>;

    /// Delete a user. Cascades to the user's reservations.
    async fn delete(&self, id: UserId) -> DomainResult<()>;
}
