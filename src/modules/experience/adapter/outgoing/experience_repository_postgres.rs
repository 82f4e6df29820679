use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::experience::adapter::outgoing::sea_orm_entity::job_experiences::{
    ActiveModel, Column, Entity,
};
use crate::experience::application::domain::entities::{Experience, ExperienceDraft};
use crate::experience::application::ports::outgoing::ExperienceRepository;
use crate::shared::persistence::RepositoryError;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Experience>, RepositoryError> {
        let rows = Entity::find()
            .order_by_desc(Column::StartDate)
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, draft: ExperienceDraft) -> Result<Experience, RepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            company: Set(draft.company),
            title: Set(draft.title),
            description: Set(draft.description),
            start_date: Set(draft.start_date),
            end_date: Set(draft.end_date),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(model.insert(&*self.db).await?.into())
    }

    async fn replace(
        &self,
        id: Uuid,
        draft: ExperienceDraft,
    ) -> Result<Experience, RepositoryError> {
        let model = ActiveModel {
            company: Set(draft.company),
            title: Set(draft.title),
            description: Set(draft.description),
            start_date: Set(draft.start_date),
            end_date: Set(draft.end_date),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await?;

        updated
            .into_iter()
            .next()
            .map(Into::into)
            .ok_or(RepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let result = Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
