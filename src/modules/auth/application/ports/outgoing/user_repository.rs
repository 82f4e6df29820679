use async_trait::async_trait;

use crate::auth::application::domain::entities::OwnerAccount;

#[derive(Debug, Clone)]
pub struct NewOwner {
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, owner: NewOwner) -> Result<OwnerAccount, UserRepositoryError>;
}
