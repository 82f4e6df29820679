use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::shared::persistence::RepositoryError;
use crate::tech_stack::adapter::outgoing::sea_orm_entity::tech_stack::{
    ActiveModel, Column, Entity,
};
use crate::tech_stack::application::domain::entities::{TechStack, TechStackDraft};
use crate::tech_stack::application::ports::outgoing::TechStackRepository;

#[derive(Clone)]
pub struct TechStackRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TechStackRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TechStackRepository for TechStackRepositoryPostgres {
    async fn list(&self) -> Result<Vec<TechStack>, RepositoryError> {
        let rows = Entity::find()
            .order_by_asc(Column::Category)
            .order_by_desc(Column::ProficiencyLevel)
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, draft: TechStackDraft) -> Result<TechStack, RepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(draft.name),
            category: Set(draft.category),
            proficiency_level: Set(draft.proficiency_level),
            years_of_experience: Set(draft.years_of_experience),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(model.insert(&*self.db).await?.into())
    }

    async fn replace(&self, id: Uuid, draft: TechStackDraft) -> Result<TechStack, RepositoryError> {
        let model = ActiveModel {
            name: Set(draft.name),
            category: Set(draft.category),
            proficiency_level: Set(draft.proficiency_level),
            years_of_experience: Set(draft.years_of_experience),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await?
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
