use async_trait::async_trait;

use crate::auth::application::domain::entities::OwnerSession;
use crate::education::application::domain::entities::Education;
use crate::shared::action::{ActionError, ActionOutcome, FormFields};

#[async_trait]
pub trait LoadEducationUseCase: Send + Sync {
    async fn load(&self) -> Result<Vec<Education>, ActionError>;
}

#[async_trait]
pub trait CreateEducationUseCase: Send + Sync {
    async fn create(&self, session: Option<&OwnerSession>, form: &FormFields) -> ActionOutcome;
}

#[async_trait]
pub trait UpdateEducationUseCase: Send + Sync {
    async fn update(
        &self,
        session: Option<&OwnerSession>,
        id: &str,
        form: &FormFields,
    ) -> ActionOutcome;
}

#[async_trait]
pub trait DeleteEducationUseCase: Send + Sync {
    async fn delete(&self, session: Option<&OwnerSession>, id: &str) -> ActionOutcome;
}
