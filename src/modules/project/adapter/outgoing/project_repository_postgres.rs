use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde_json::Value as Json;
use std::sync::Arc;
use uuid::Uuid;

use crate::project::adapter::outgoing::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::project::application::domain::entities::{Project, ProjectDraft};
use crate::project::application::ports::outgoing::ProjectRepository;
use crate::shared::persistence::RepositoryError;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Project>, RepositoryError> {
        Entity::find()
            .order_by_desc(Column::StartDate)
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await?
            .into_iter()
            .map(model_to_project)
            .collect()
    }

    async fn insert(&self, draft: ProjectDraft) -> Result<Project, RepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(draft.title),
            description: Set(draft.description),
            technologies: Set(to_json(&draft.technologies)?),
            start_date: Set(draft.start_date),
            end_date: Set(draft.end_date),
            github_url: Set(draft.github_url),
            live_url: Set(draft.live_url),
            image_url: Set(draft.image_url),
            created_at: Set(now),
            updated_at: Set(now),
        };

        model_to_project(model.insert(&*self.db).await?)
    }

    async fn replace(&self, id: Uuid, draft: ProjectDraft) -> Result<Project, RepositoryError> {
        let model = ActiveModel {
            title: Set(draft.title),
            description: Set(draft.description),
            technologies: Set(to_json(&draft.technologies)?),
            start_date: Set(draft.start_date),
            end_date: Set(draft.end_date),
            github_url: Set(draft.github_url),
            live_url: Set(draft.live_url),
            image_url: Set(draft.image_url),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await?;

        match updated.into_iter().next() {
            Some(row) => model_to_project(row),
            None => Err(RepositoryError::NotFound),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let result = Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected > 0)
    }
}

// ============================================================================
// Mapping helpers
// ============================================================================

fn to_json(items: &[String]) -> Result<Json, RepositoryError> {
    serde_json::to_value(items).map_err(|e| RepositoryError::SerializationError(e.to_string()))
}

fn from_json(value: Json) -> Result<Vec<String>, RepositoryError> {
    serde_json::from_value(value).map_err(|e| RepositoryError::SerializationError(e.to_string()))
}

fn model_to_project(model: projects::Model) -> Result<Project, RepositoryError> {
    Ok(Project {
        id: model.id,
        title: model.title,
        description: model.description,
        technologies: from_json(model.technologies)?,
        start_date: model.start_date,
        end_date: model.end_date,
        github_url: model.github_url,
        live_url: model.live_url,
        image_url: model.image_url,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}
