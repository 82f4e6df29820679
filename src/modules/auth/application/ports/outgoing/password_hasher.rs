use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,

    #[error("Password verification failed")]
    VerifyFailed,

    #[error("Hashing task did not complete")]
    TaskFailed,
}

/// Owner password hashing. Implementations run the KDF off the async
/// executor; the stored string is self-describing (PHC format).
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` for a wrong password, `Err` only for an unusable hash.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
