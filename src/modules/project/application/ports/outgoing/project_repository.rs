use async_trait::async_trait;
use uuid::Uuid;

use crate::project::application::domain::entities::{Project, ProjectDraft};
use crate::shared::persistence::RepositoryError;

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Project>, RepositoryError>;

    async fn insert(&self, draft: ProjectDraft) -> Result<Project, RepositoryError>;

    /// `NotFound` when no row has this id.
    async fn replace(&self, id: Uuid, draft: ProjectDraft) -> Result<Project, RepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
