use async_trait::async_trait;

use crate::auth::application::domain::entities::OwnerSession;
use crate::experience::application::domain::entities::Experience;
use crate::shared::action::{ActionError, ActionOutcome, FormFields};

#[async_trait]
pub trait LoadExperiencesUseCase: Send + Sync {
    async fn load(&self) -> Result<Vec<Experience>, ActionError>;
}

#[async_trait]
pub trait CreateExperienceUseCase: Send + Sync {
    async fn create(&self, session: Option<&OwnerSession>, form: &FormFields) -> ActionOutcome;
}

#[async_trait]
pub trait UpdateExperienceUseCase: Send + Sync {
    async fn update(
        &self,
        session: Option<&OwnerSession>,
        id: &str,
        form: &FormFields,
    ) -> ActionOutcome;
}

#[async_trait]
pub trait DeleteExperienceUseCase: Send + Sync {
    async fn delete(&self, session: Option<&OwnerSession>, id: &str) -> ActionOutcome;
}
