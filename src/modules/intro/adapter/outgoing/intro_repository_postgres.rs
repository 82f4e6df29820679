use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::intro::adapter::outgoing::sea_orm_entity::intro::{ActiveModel, Column, Entity};
use crate::intro::application::domain::entities::{Intro, IntroDraft};
use crate::intro::application::ports::outgoing::IntroRepository;
use crate::shared::persistence::RepositoryError;

#[derive(Clone)]
pub struct IntroRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl IntroRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IntroRepository for IntroRepositoryPostgres {
    async fn find_first(&self) -> Result<Option<Intro>, RepositoryError> {
        let row = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .one(&*self.db)
            .await?;

        Ok(row.map(Into::into))
    }

    async fn insert(&self, draft: IntroDraft) -> Result<Intro, RepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(draft.name),
            title: Set(draft.title),
            summary: Set(draft.summary),
            profile_image_url: Set(draft.profile_image_url),
            contact_email: Set(draft.contact_email),
            linkedin_url: Set(draft.linkedin_url),
            github_url: Set(draft.github_url),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(model.insert(&*self.db).await?.into())
    }

    async fn replace(&self, id: Uuid, draft: IntroDraft) -> Result<Intro, RepositoryError> {
        let model = ActiveModel {
            name: Set(draft.name),
            title: Set(draft.title),
            summary: Set(draft.summary),
            profile_image_url: Set(draft.profile_image_url),
            contact_email: Set(draft.contact_email),
            linkedin_url: Set(draft.linkedin_url),
            github_url: Set(draft.github_url),
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

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let result = Entity::delete_many().exec(&*self.db).await?;
        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intro::adapter::outgoing::sea_orm_entity::intro;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn row(id: Uuid, title: &str) -> intro::Model {
        let now = Utc::now().fixed_offset();
        intro::Model {
            id,
            name: "Jane Doe".to_string(),
            title: title.to_string(),
            summary: "I build APIs.".to_string(),
            profile_image_url: None,
            contact_email: Some("jane@example.com".to_string()),
            linkedin_url: None,
            github_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn draft() -> IntroDraft {
        IntroDraft {
            name: "Jane Doe".to_string(),
            title: "Engineer".to_string(),
            summary: "I build APIs.".to_string(),
            profile_image_url: None,
            contact_email: None,
            linkedin_url: None,
            github_url: None,
        }
    }

    fn repo(db: MockDatabase) -> IntroRepositoryPostgres {
        IntroRepositoryPostgres::new(Arc::new(db.into_connection()))
    }

    #[tokio::test]
    async fn test_find_first_empty_table() {
        let repo = repo(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<intro::Model>::new()]),
        );

        assert_eq!(repo.find_first().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_first_returns_row() {
        let id = Uuid::new_v4();
        let repo = repo(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![row(id, "Engineer")]]),
        );

        let intro = repo.find_first().await.unwrap().unwrap();

        assert_eq!(intro.id, id);
        assert_eq!(intro.contact_email.as_deref(), Some("jane@example.com"));
    }

    #[tokio::test]
    async fn test_insert_database_error() {
        let repo = repo(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_errors(vec![DbErr::Custom("disk full".into())]),
        );

        assert!(matches!(
            repo.insert(draft()).await,
            Err(RepositoryError::DatabaseError(_))
        ));
    }

    #[tokio::test]
    async fn test_replace_returns_updated_row() {
        let id = Uuid::new_v4();
        let repo = repo(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![row(id, "Staff Engineer")]]),
        );

        assert_eq!(
            repo.replace(id, draft()).await.unwrap().title,
            "Staff Engineer"
        );
    }

    #[tokio::test]
    async fn test_delete_all_reports_row_count() {
        let repo = repo(
            MockDatabase::new(DatabaseBackend::Postgres).append_exec_results(vec![
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 2,
                },
            ]),
        );

        assert_eq!(repo.delete_all().await.unwrap(), 2);
    }
}
