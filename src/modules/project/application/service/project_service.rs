use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::auth::application::domain::entities::OwnerSession;
use crate::project::application::domain::entities::{Project, ProjectDraft};
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, LoadProjectsUseCase, UpdateProjectUseCase,
};
use crate::project::application::ports::outgoing::ProjectRepository;
use crate::shared::action::{parse_record_id, ActionError, ActionOutcome, FormFields};
use crate::shared::persistence::WriteOp;

const ENTITY: &str = "Project";

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct ProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> ProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> LoadProjectsUseCase for ProjectService<R>
where
    R: ProjectRepository,
{
    async fn load(&self) -> Result<Vec<Project>, ActionError> {
        self.project_repository.list().await.map_err(|e| {
            error!(error = %e, "Failed to load projects");
            ActionError::Persistence("Failed to load projects".to_string())
        })
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for ProjectService<R>
where
    R: ProjectRepository,
{
    async fn create(&self, session: Option<&OwnerSession>, form: &FormFields) -> ActionOutcome {
        OwnerSession::require(session)?;
        let draft = ProjectDraft::from_form(form)?;

        let created = self
            .project_repository
            .insert(draft)
            .await
            .map_err(|e| e.into_action_error(WriteOp::Create, ENTITY))?;

        info!(project_id = %created.id, "Project created");
        Ok(format!("{ENTITY} created successfully"))
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for ProjectService<R>
where
    R: ProjectRepository,
{
    async fn update(
        &self,
        session: Option<&OwnerSession>,
        id: &str,
        form: &FormFields,
    ) -> ActionOutcome {
        OwnerSession::require(session)?;
        let id = parse_record_id(id)?;
        let draft = ProjectDraft::from_form(form)?;

        self.project_repository
            .replace(id, draft)
            .await
            .map_err(|e| e.into_action_error(WriteOp::Update, ENTITY))?;

        info!(project_id = %id, "Project updated");
        Ok(format!("{ENTITY} updated successfully"))
    }
}

#[async_trait]
impl<R> DeleteProjectUseCase for ProjectService<R>
where
    R: ProjectRepository,
{
    async fn delete(&self, session: Option<&OwnerSession>, id: &str) -> ActionOutcome {
        OwnerSession::require(session)?;
        let id = parse_record_id(id)?;

        let removed = self
            .project_repository
            .delete(id)
            .await
            .map_err(|e| e.into_action_error(WriteOp::Delete, ENTITY))?;

        if removed {
            info!(project_id = %id, "Project deleted");
        } else {
            debug!(project_id = %id, "Project already absent");
        }
        Ok(format!("{ENTITY} deleted successfully"))
    }
}
