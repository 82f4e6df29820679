use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::education::adapter::outgoing::sea_orm_entity::education::{
    ActiveModel, Column, Entity,
};
use crate::education::application::domain::entities::{Education, EducationDraft};
use crate::education::application::ports::outgoing::EducationRepository;
use crate::shared::persistence::RepositoryError;

#[derive(Clone)]
pub struct EducationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EducationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EducationRepository for EducationRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Education>, RepositoryError> {
        let rows = Entity::find()
            .order_by_desc(Column::StartDate)
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, draft: EducationDraft) -> Result<Education, RepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            institution: Set(draft.institution),
            degree: Set(draft.degree),
            field_of_study: Set(draft.field_of_study),
            start_date: Set(draft.start_date),
            end_date: Set(draft.end_date),
            description: Set(draft.description),
            grade: Set(draft.grade),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(model.insert(&*self.db).await?.into())
    }

    async fn replace(&self, id: Uuid, draft: EducationDraft) -> Result<Education, RepositoryError> {
        // optional columns are set explicitly so a cleared field becomes NULL
        let model = ActiveModel {
            institution: Set(draft.institution),
            degree: Set(draft.degree),
            field_of_study: Set(draft.field_of_study),
            start_date: Set(draft.start_date),
            end_date: Set(draft.end_date),
            description: Set(draft.description),
            grade: Set(draft.grade),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::education::adapter::outgoing::sea_orm_entity::education;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn row(id: Uuid, end_date: Option<&str>) -> education::Model {
        let now = Utc::now().fixed_offset();
        education::Model {
            id,
            institution: "MIT".to_string(),
            degree: "BSc".to_string(),
            field_of_study: "Computer Science".to_string(),
            start_date: "2014-09".to_string(),
            end_date: end_date.map(str::to_string),
            description: None,
            grade: Some("3.8 GPA".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    fn draft() -> EducationDraft {
        EducationDraft {
            institution: "MIT".to_string(),
            degree: "BSc".to_string(),
            field_of_study: "Computer Science".to_string(),
            start_date: "2014-09".to_string(),
            end_date: None,
            description: None,
            grade: None,
        }
    }

    fn repo(db: MockDatabase) -> EducationRepositoryPostgres {
        EducationRepositoryPostgres::new(Arc::new(db.into_connection()))
    }

    #[tokio::test]
    async fn test_list_keeps_optional_columns() {
        let repo = repo(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![row(Uuid::new_v4(), None)]]),
        );

        let list = repo.list().await.unwrap();

        assert_eq!(list[0].end_date, None);
        assert_eq!(list[0].grade.as_deref(), Some("3.8 GPA"));
    }

    #[tokio::test]
    async fn test_insert_returns_generated_id() {
        let id = Uuid::new_v4();
        let repo = repo(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![row(id, Some("2018-06"))]]),
        );

        let created = repo.insert(draft()).await.unwrap();

        assert_eq!(created.id, id);
    }

    #[tokio::test]
    async fn test_insert_database_error() {
        let repo = repo(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_errors(vec![DbErr::Custom("value too long".into())]),
        );

        assert!(matches!(
            repo.insert(draft()).await,
            Err(RepositoryError::DatabaseError(_))
        ));
    }

    #[tokio::test]
    async fn test_replace_missing_row_is_not_found() {
        let repo = repo(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<education::Model>::new()]),
        );

        assert_eq!(
            repo.replace(Uuid::new_v4(), draft()).await.unwrap_err(),
            RepositoryError::NotFound
        );
    }

    #[tokio::test]
    async fn test_delete_missing_row_returns_false() {
        let repo = repo(
            MockDatabase::new(DatabaseBackend::Postgres).append_exec_results(vec![
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ]),
        );

        assert!(!repo.delete(Uuid::new_v4()).await.unwrap());
    }
}
