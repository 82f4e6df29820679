use async_trait::async_trait;
use uuid::Uuid;

use crate::intro::application::domain::entities::{Intro, IntroDraft};
use crate::shared::persistence::RepositoryError;

#[async_trait]
pub trait IntroRepository: Send + Sync {
    /// Oldest row, if any.
    async fn find_first(&self) -> Result<Option<Intro>, RepositoryError>;

    async fn insert(&self, draft: IntroDraft) -> Result<Intro, RepositoryError>;

    /// `NotFound` when no row has this id.
    async fn replace(&self, id: Uuid, draft: IntroDraft) -> Result<Intro, RepositoryError>;

    /// Returns the number of rows removed.
    async fn delete_all(&self) -> Result<u64, RepositoryError>;
}
