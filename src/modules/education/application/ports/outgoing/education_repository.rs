use async_trait::async_trait;
use uuid::Uuid;

use crate::education::application::domain::entities::{Education, EducationDraft};
use crate::shared::persistence::RepositoryError;

#[async_trait]
pub trait EducationRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Education>, RepositoryError>;

    async fn insert(&self, draft: EducationDraft) -> Result<Education, RepositoryError>;

    /// `NotFound` when no row has this id.
    async fn replace(&self, id: Uuid, draft: EducationDraft) -> Result<Education, RepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
