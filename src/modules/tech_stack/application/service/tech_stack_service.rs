use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::auth::application::domain::entities::OwnerSession;
use crate::shared::action::{parse_record_id, ActionError, ActionOutcome, FormFields};
use crate::shared::persistence::WriteOp;
use crate::tech_stack::application::domain::entities::{TechStack, TechStackDraft};
use crate::tech_stack::application::ports::incoming::use_cases::{
    CreateTechStackUseCase, DeleteTechStackUseCase, LoadTechStackUseCase, UpdateTechStackUseCase,
};
use crate::tech_stack::application::ports::outgoing::TechStackRepository;

const ENTITY: &str = "Tech Stack";

pub struct TechStackService<R>
where
    R: TechStackRepository,
{
    tech_stack_repository: R,
}

impl<R> TechStackService<R>
where
    R: TechStackRepository,
{
    pub fn new(tech_stack_repository: R) -> Self {
        Self {
            tech_stack_repository,
        }
    }
}

#[async_trait]
impl<R> LoadTechStackUseCase for TechStackService<R>
where
    R: TechStackRepository,
{
    async fn load(&self) -> Result<Vec<TechStack>, ActionError> {
        self.tech_stack_repository.list().await.map_err(|e| {
            error!(error = %e, "Failed to load tech stack");
            ActionError::Persistence("Failed to load tech stack".to_string())
        })
    }
}

#[async_trait]
impl<R> CreateTechStackUseCase for TechStackService<R>
where
    R: TechStackRepository,
{
    async fn create(&self, session: Option<&OwnerSession>, form: &FormFields) -> ActionOutcome {
        OwnerSession::require(session)?;
        let draft = TechStackDraft::from_form(form)?;

        let created = self
            .tech_stack_repository
            .insert(draft)
            .await
            .map_err(|e| e.into_action_error(WriteOp::Create, ENTITY))?;

        info!(tech_stack_id = %created.id, name = %created.name, "Tech stack entry created");
        Ok(format!("{ENTITY} created successfully"))
    }
}

#[async_trait]
impl<R> UpdateTechStackUseCase for TechStackService<R>
where
    R: TechStackRepository,
{
    async fn update(
        &self,
        session: Option<&OwnerSession>,
        id: &str,
        form: &FormFields,
    ) -> ActionOutcome {
        OwnerSession::require(session)?;
        let id = parse_record_id(id)?;
        let draft = TechStackDraft::from_form(form)?;

        self.tech_stack_repository
            .replace(id, draft)
            .await
            .map_err(|e| e.into_action_error(WriteOp::Update, ENTITY))?;

        info!(tech_stack_id = %id, "Tech stack entry updated");
        Ok(format!("{ENTITY} updated successfully"))
    }
}

#[async_trait]
impl<R> DeleteTechStackUseCase for TechStackService<R>
where
    R: TechStackRepository,
{
    async fn delete(&self, session: Option<&OwnerSession>, id: &str) -> ActionOutcome {
        OwnerSession::require(session)?;
        let id = parse_record_id(id)?;

        let removed = self
            .tech_stack_repository
            .delete(id)
            .await
            .map_err(|e| e.into_action_error(WriteOp::Delete, ENTITY))?;

        if !removed {
            debug!(tech_stack_id = %id, "Tech stack entry already absent");
        }
        Ok(format!("{ENTITY} deleted successfully"))
    }
}
