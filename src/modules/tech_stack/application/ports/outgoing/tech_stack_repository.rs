use async_trait::async_trait;
use uuid::Uuid;

use crate::shared::persistence::RepositoryError;
use crate::tech_stack::application::domain::entities::{TechStack, TechStackDraft};

#[async_trait]
pub trait TechStackRepository: Send + Sync {
    /// Ordered by category, then strongest first.
    async fn list(&self) -> Result<Vec<TechStack>, RepositoryError>;

    async fn insert(&self, draft: TechStackDraft) -> Result<TechStack, RepositoryError>;

    async fn replace(&self, id: Uuid, draft: TechStackDraft) -> Result<TechStack, RepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
