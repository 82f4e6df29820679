use async_trait::async_trait;
use uuid::Uuid;

use crate::experience::application::domain::entities::{Experience, ExperienceDraft};
use crate::shared::persistence::RepositoryError;

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// Most recent first.
    async fn list(&self) -> Result<Vec<Experience>, RepositoryError>;

    async fn insert(&self, draft: ExperienceDraft) -> Result<Experience, RepositoryError>;

    /// Full-row replace. `NotFound` when no row has this id.
    async fn replace(&self, id: Uuid, draft: ExperienceDraft)
        -> Result<Experience, RepositoryError>;

    /// `false` when no row had this id.
    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
