use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::auth::application::domain::entities::OwnerSession;
use crate::education::application::domain::entities::{Education, EducationDraft};
use crate::education::application::ports::incoming::use_cases::{
    CreateEducationUseCase, DeleteEducationUseCase, LoadEducationUseCase, UpdateEducationUseCase,
};
use crate::education::application::ports::outgoing::EducationRepository;
use crate::shared::action::{parse_record_id, ActionError, ActionOutcome, FormFields};
use crate::shared::persistence::WriteOp;

const ENTITY: &str = "Education";

pub struct EducationService<R>
where
    R: EducationRepository,
{
    education_repository: R,
}

impl<R> EducationService<R>
where
    R: EducationRepository,
{
    pub fn new(education_repository: R) -> Self {
        Self {
            education_repository,
        }
    }
}

#[async_trait]
impl<R> LoadEducationUseCase for EducationService<R>
where
    R: EducationRepository,
{
    async fn load(&self) -> Result<Vec<Education>, ActionError> {
        self.education_repository.list().await.map_err(|e| {
            error!(error = %e, "Failed to load education");
            ActionError::Persistence("Failed to load education".to_string())
        })
    }
}

#[async_trait]
impl<R> CreateEducationUseCase for EducationService<R>
where
    R: EducationRepository,
{
    async fn create(&self, session: Option<&OwnerSession>, form: &FormFields) -> ActionOutcome {
        OwnerSession::require(session)?;
        let draft = EducationDraft::from_form(form)?;

        let created = self
            .education_repository
            .insert(draft)
            .await
            .map_err(|e| e.into_action_error(WriteOp::Create, ENTITY))?;

        info!(education_id = %created.id, "Education created");
        Ok(format!("{ENTITY} created successfully"))
    }
}

#[async_trait]
impl<R> UpdateEducationUseCase for EducationService<R>
where
    R: EducationRepository,
{
    async fn update(
        &self,
        session: Option<&OwnerSession>,
        id: &str,
        form: &FormFields,
    ) -> ActionOutcome {
        OwnerSession::require(session)?;
        let id = parse_record_id(id)?;
        let draft = EducationDraft::from_form(form)?;

        self.education_repository
            .replace(id, draft)
            .await
            .map_err(|e| e.into_action_error(WriteOp::Update, ENTITY))?;

        info!(education_id = %id, "Education updated");
        Ok(format!("{ENTITY} updated successfully"))
    }
}

#[async_trait]
impl<R> DeleteEducationUseCase for EducationService<R>
where
    R: EducationRepository,
{
    async fn delete(&self, session: Option<&OwnerSession>, id: &str) -> ActionOutcome {
        OwnerSession::require(session)?;
        let id = parse_record_id(id)?;

        let removed = self
            .education_repository
            .delete(id)
            .await
            .map_err(|e| e.into_action_error(WriteOp::Delete, ENTITY))?;

        if !removed {
            debug!(education_id = %id, "Education already absent");
        }
        Ok(format!("{ENTITY} deleted successfully"))
    }
}
