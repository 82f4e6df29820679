use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::{HashError, PasswordHasher, TokenProvider};
use crate::auth::application::use_cases::sign_in::{
    ISignInUseCase, SignInError, SignInRequest, SignInResponse,
};

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_purposes_only";

/* --------------------------------------------------
 * Tokens
 * -------------------------------------------------- */

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret_key: TEST_JWT_SECRET.to_string(),
        issuer: "portfolio".to_string(),
        access_token_expiry: 3600,
    }
}

pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(JwtTokenService::new(test_jwt_config()))
}

/// `Authorization` header carrying a valid owner token.
pub fn owner_auth_header() -> (&'static str, String) {
    let token = test_token_provider()
        .generate_access_token(Uuid::new_v4())
        .expect("test token");
    ("Authorization", format!("Bearer {token}"))
}

/* --------------------------------------------------
 * Password hashing
 * -------------------------------------------------- */

/// Reversible stand-in for argon2 so tests stay fast.
pub struct FakePasswordHasher;

impl FakePasswordHasher {
    const PREFIX: &'static str = "fake$";

    pub fn hash_of(password: &str) -> String {
        format!("{}{}", Self::PREFIX, password)
    }
}

#[async_trait]
impl PasswordHasher for FakePasswordHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(Self::hash_of(password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        match hash.strip_prefix(Self::PREFIX) {
            Some(stored) => Ok(stored == password),
            None => Err(HashError::VerifyFailed),
        }
    }
}

/* --------------------------------------------------
 * Use case stubs
 * -------------------------------------------------- */

/// Sign-in that always rejects; routes that never sign in get this by default.
pub struct RejectingSignIn;

#[async_trait]
impl ISignInUseCase for RejectingSignIn {
    async fn execute(&self, _request: SignInRequest) -> Result<SignInResponse, SignInError> {
        Err(SignInError::InvalidCredentials)
    }
}
