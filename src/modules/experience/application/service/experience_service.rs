use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::auth::application::domain::entities::OwnerSession;
use crate::experience::application::domain::entities::{Experience, ExperienceDraft};
use crate::experience::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, DeleteExperienceUseCase, LoadExperiencesUseCase,
    UpdateExperienceUseCase,
};
use crate::experience::application::ports::outgoing::ExperienceRepository;
use crate::shared::action::{parse_record_id, ActionError, ActionOutcome, FormFields};
use crate::shared::persistence::WriteOp;

const ENTITY: &str = "Experience";

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct ExperienceService<R>
where
    R: ExperienceRepository,
{
    experience_repository: R,
}

impl<R> ExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(experience_repository: R) -> Self {
        Self {
            experience_repository,
        }
    }
}

#[async_trait]
impl<R> LoadExperiencesUseCase for ExperienceService<R>
where
    R: ExperienceRepository,
{
    async fn load(&self) -> Result<Vec<Experience>, ActionError> {
        self.experience_repository.list().await.map_err(|e| {
            error!(error = %e, "Failed to load experiences");
            ActionError::Persistence("Failed to load experiences".to_string())
        })
    }
}

#[async_trait]
impl<R> CreateExperienceUseCase for ExperienceService<R>
where
    R: ExperienceRepository,
{
    async fn create(&self, session: Option<&OwnerSession>, form: &FormFields) -> ActionOutcome {
        OwnerSession::require(session)?;
        let draft = ExperienceDraft::from_form(form)?;

        let created = self
            .experience_repository
            .insert(draft)
            .await
            .map_err(|e| e.into_action_error(WriteOp::Create, ENTITY))?;

        info!(experience_id = %created.id, "Experience created");
        Ok(format!("{ENTITY} created successfully"))
    }
}

#[async_trait]
impl<R> UpdateExperienceUseCase for ExperienceService<R>
where
    R: ExperienceRepository,
{
    async fn update(
        &self,
        session: Option<&OwnerSession>,
        id: &str,
        form: &FormFields,
    ) -> ActionOutcome {
        OwnerSession::require(session)?;
        let id = parse_record_id(id)?;
        let draft = ExperienceDraft::from_form(form)?;

        self.experience_repository
            .replace(id, draft)
            .await
            .map_err(|e| e.into_action_error(WriteOp::Update, ENTITY))?;

        info!(experience_id = %id, "Experience updated");
        Ok(format!("{ENTITY} updated successfully"))
    }
}

#[async_trait]
impl<R> DeleteExperienceUseCase for ExperienceService<R>
where
    R: ExperienceRepository,
{
    async fn delete(&self, session: Option<&OwnerSession>, id: &str) -> ActionOutcome {
        OwnerSession::require(session)?;
        let id = parse_record_id(id)?;

        let removed = self
            .experience_repository
            .delete(id)
            .await
            .map_err(|e| e.into_action_error(WriteOp::Delete, ENTITY))?;

        if removed {
            info!(experience_id = %id, "Experience deleted");
        } else {
            debug!(experience_id = %id, "Experience already absent");
        }
        Ok(format!("{ENTITY} deleted successfully"))
    }
}
