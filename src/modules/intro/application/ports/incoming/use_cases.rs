use async_trait::async_trait;

use crate::auth::application::domain::entities::OwnerSession;
use crate::intro::application::domain::entities::Intro;
use crate::shared::action::{ActionError, ActionOutcome, FormFields};

#[async_trait]
pub trait LoadIntroUseCase: Send + Sync {
    async fn load(&self) -> Result<Option<Intro>, ActionError>;
}

/// Inserts the intro or overwrites the existing one. `action=delete` removes it instead.
#[async_trait]
pub trait SaveIntroUseCase: Send + Sync {
    async fn create_or_update(
        &self,
        session: Option<&OwnerSession>,
        form: &FormFields,
    ) -> ActionOutcome;
}

#[async_trait]
pub trait DeleteIntroUseCase: Send + Sync {
    async fn delete(&self, session: Option<&OwnerSession>) -> ActionOutcome;
}
