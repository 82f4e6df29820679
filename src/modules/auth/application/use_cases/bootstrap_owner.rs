use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{
    NewOwner, PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};
use crate::config::OwnerCredentials;

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    Created(Uuid),
    AlreadyExists(Uuid),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootstrapOwnerError {
    #[error("Invalid owner credentials: {0}")]
    InvalidCredentials(String),

    #[error("Password hashing failed: {0}")]
    HashFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Creates the owner account on startup when it does not exist yet.
#[async_trait]
pub trait IBootstrapOwnerUseCase: Send + Sync {
    async fn execute(
        &self,
        credentials: &OwnerCredentials,
    ) -> Result<BootstrapOutcome, BootstrapOwnerError>;
}

pub struct BootstrapOwnerUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> BootstrapOwnerUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> IBootstrapOwnerUseCase for BootstrapOwnerUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        credentials: &OwnerCredentials,
    ) -> Result<BootstrapOutcome, BootstrapOwnerError> {
        let email = credentials.email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(BootstrapOwnerError::InvalidCredentials(
                "OWNER_EMAIL is not a valid email address".to_string(),
            ));
        }
        if credentials.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(BootstrapOwnerError::InvalidCredentials(format!(
                "OWNER_PASSWORD must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        let existing = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| BootstrapOwnerError::RepositoryError(e.to_string()))?;

        if let Some(owner) = existing {
            tracing::info!(owner_id = %owner.id, "Owner account already present");
            return Ok(BootstrapOutcome::AlreadyExists(owner.id));
        }

        let password_hash = self
            .password_hasher
            .hash_password(&credentials.password)
            .await
            .map_err(|e| BootstrapOwnerError::HashFailed(e.to_string()))?;

        let full_name = credentials
            .full_name
            .clone()
            .unwrap_or_else(|| "Portfolio Owner".to_string());

        match self
            .repository
            .create_user(NewOwner {
                email,
                password_hash,
                full_name,
            })
            .await
        {
            Ok(owner) => {
                tracing::info!(owner_id = %owner.id, "Owner account created");
                Ok(BootstrapOutcome::Created(owner.id))
            }
            // Another instance won the race
            Err(UserRepositoryError::UserAlreadyExists) => {
                let owner = self
                    .query
                    .find_by_email(&credentials.email.trim().to_lowercase())
                    .await
                    .map_err(|e| BootstrapOwnerError::RepositoryError(e.to_string()))?
                    .ok_or_else(|| {
                        BootstrapOwnerError::RepositoryError(
                            "owner vanished after duplicate insert".to_string(),
                        )
                    })?;
                Ok(BootstrapOutcome::AlreadyExists(owner.id))
            }
            Err(e) => Err(BootstrapOwnerError::RepositoryError(e.to_string())),
        }
    }
}
