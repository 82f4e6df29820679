use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::auth::application::domain::entities::OwnerSession;
use crate::intro::application::domain::entities::{is_delete_request, Intro, IntroDraft};
use crate::intro::application::ports::incoming::use_cases::{
    DeleteIntroUseCase, LoadIntroUseCase, SaveIntroUseCase,
};
use crate::intro::application::ports::outgoing::IntroRepository;
use crate::shared::action::{ActionError, ActionOutcome, FormFields};
use crate::shared::persistence::{RepositoryError, WriteOp};

const ENTITY: &str = "Intro";

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct IntroService<R>
where
    R: IntroRepository,
{
    intro_repository: R,
}

impl<R> IntroService<R>
where
    R: IntroRepository,
{
    pub fn new(intro_repository: R) -> Self {
        Self { intro_repository }
    }

    async fn insert(&self, draft: IntroDraft) -> ActionOutcome {
        let created = self
            .intro_repository
            .insert(draft)
            .await
            .map_err(|e| e.into_action_error(WriteOp::Create, ENTITY))?;

        info!(intro_id = %created.id, "Intro added");
        Ok("Intro added successfully".to_string())
    }

    async fn remove_all(&self) -> ActionOutcome {
        let removed = self
            .intro_repository
            .delete_all()
            .await
            .map_err(|e| e.into_action_error(WriteOp::Delete, ENTITY))?;

        info!(rows = removed, "Intro deleted");
        Ok("Intro deleted successfully".to_string())
    }
}

#[async_trait]
impl<R> LoadIntroUseCase for IntroService<R>
where
    R: IntroRepository,
{
    async fn load(&self) -> Result<Option<Intro>, ActionError> {
        self.intro_repository.find_first().await.map_err(|e| {
            error!(error = %e, "Failed to load intro");
            ActionError::Persistence("Failed to load intro".to_string())
        })
    }
}

#[async_trait]
impl<R> SaveIntroUseCase for IntroService<R>
where
    R: IntroRepository,
{
    async fn create_or_update(
        &self,
        session: Option<&OwnerSession>,
        form: &FormFields,
    ) -> ActionOutcome {
        OwnerSession::require(session)?;

        if is_delete_request(form) {
            return self.remove_all().await;
        }

        let draft = IntroDraft::from_form(form)?;

        let existing = self
            .intro_repository
            .find_first()
            .await
            .map_err(|e| e.into_action_error(WriteOp::Update, ENTITY))?;

        let Some(existing) = existing else {
            return self.insert(draft).await;
        };

        match self.intro_repository.replace(existing.id, draft.clone()).await {
            Ok(_) => {
                info!(intro_id = %existing.id, "Intro updated");
                Ok("Intro updated successfully".to_string())
            }
            // removed between the lookup and the write
            Err(RepositoryError::NotFound) => {
                warn!(intro_id = %existing.id, "Intro vanished before update, inserting");
                self.insert(draft).await
            }
            Err(e) => Err(e.into_action_error(WriteOp::Update, ENTITY)),
        }
    }
}

#[async_trait]
impl<R> DeleteIntroUseCase for IntroService<R>
where
    R: IntroRepository,
{
    async fn delete(&self, session: Option<&OwnerSession>) -> ActionOutcome {
        OwnerSession::require(session)?;
        self.remove_all().await
    }
}
