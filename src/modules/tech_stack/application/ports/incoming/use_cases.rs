use async_trait::async_trait;

use crate::auth::application::domain::entities::OwnerSession;
use crate::shared::action::{ActionError, ActionOutcome, FormFields};
use crate::tech_stack::application::domain::entities::TechStack;

#[async_trait]
pub trait LoadTechStackUseCase: Send + Sync {
    async fn load(&self) -> Result<Vec<TechStack>, ActionError>;
}

#[async_trait]
pub trait CreateTechStackUseCase: Send + Sync {
    async fn create(&self, session: Option<&OwnerSession>, form: &FormFields) -> ActionOutcome;
}

#[async_trait]
pub trait UpdateTechStackUseCase: Send + Sync {
    async fn update(
        &self,
        session: Option<&OwnerSession>,
        id: &str,
        form: &FormFields,
    ) -> ActionOutcome;
}

#[async_trait]
pub trait DeleteTechStackUseCase: Send + Sync {
    async fn delete(&self, session: Option<&OwnerSession>, id: &str) -> ActionOutcome;
}
