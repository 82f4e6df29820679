use async_trait::async_trait;

use crate::auth::application::domain::entities::OwnerSession;
use crate::project::application::domain::entities::Project;
use crate::shared::action::{ActionError, ActionOutcome, FormFields};

#[async_trait]
pub trait LoadProjectsUseCase: Send + Sync {
    async fn load(&self) -> Result<Vec<Project>, ActionError>;
}

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn create(&self, session: Option<&OwnerSession>, form: &FormFields) -> ActionOutcome;
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn update(
        &self,
        session: Option<&OwnerSession>,
        id: &str,
        form: &FormFields,
    ) -> ActionOutcome;
}

#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn delete(&self, session: Option<&OwnerSession>, id: &str) -> ActionOutcome;
}
