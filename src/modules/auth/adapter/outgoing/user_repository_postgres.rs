use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::OwnerAccount;
use crate::auth::application::ports::outgoing::{NewOwner, UserRepository, UserRepositoryError};

use super::sea_orm_entity::users::ActiveModel as UserActiveModel;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, owner: NewOwner) -> Result<OwnerAccount, UserRepositoryError> {
        let now = Utc::now().fixed_offset();
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(owner.email.trim().to_lowercase()),
            password_hash: Set(owner.password_hash),
            full_name: Set(owner.full_name),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("23505")
                || err_str.contains("duplicate key")
                || err_str.contains("unique constraint")
            {
                return UserRepositoryError::UserAlreadyExists;
            }
            UserRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(inserted.into())
    }
}
