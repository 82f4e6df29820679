use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};

// ========================= Sign-in Request =========================
/// Validated sign-in request.
#[derive(Debug, Clone)]
pub struct SignInRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignInRequestError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl SignInRequest {
    pub fn new(email: &str, password: &str) -> Result<Self, SignInRequestError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(SignInRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(email) {
            return Err(SignInRequestError::InvalidEmailFormat);
        }
        if password.is_empty() {
            return Err(SignInRequestError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_lowercase(),
            password: password.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Sign-in Error =============================
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignInError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

// ============================ Sign-in Response =================================
#[derive(Debug, Clone, Serialize)]
pub struct SignedInOwner {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignInResponse {
    pub access_token: String,
    pub expires_in: i64,
    pub owner: SignedInOwner,
}

// ============================ Use Case =============================
#[async_trait]
pub trait ISignInUseCase: Send + Sync {
    async fn execute(&self, request: SignInRequest) -> Result<SignInResponse, SignInError>;
}

#[derive(Clone)]
pub struct SignInUseCase<Q>
where
    Q: UserQuery,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> SignInUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ISignInUseCase for SignInUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, request: SignInRequest) -> Result<SignInResponse, SignInError> {
        let owner = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(|e| SignInError::QueryError(e.to_string()))?
            .ok_or(SignInError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &owner.password_hash)
            .await
            .map_err(|e| SignInError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(SignInError::InvalidCredentials);
        }

        let access_token = self
            .token_provider
            .generate_access_token(owner.id)
            .map_err(|e| SignInError::TokenGenerationFailed(e.to_string()))?;

        Ok(SignInResponse {
            access_token,
            expires_in: self.token_provider.access_token_expiry(),
            owner: SignedInOwner {
                id: owner.id,
                email: owner.email,
                full_name: owner.full_name,
            },
        })
    }
}
