use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::shared::action::ActionError;

/// Proof that the current request was made by the portfolio owner.
///
/// Mutating actions receive it explicitly as `Option<&OwnerSession>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerSession {
    pub user_id: Uuid,
}

impl OwnerSession {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }

    pub fn require(session: Option<&OwnerSession>) -> Result<&OwnerSession, ActionError> {
        session.ok_or(ActionError::Unauthorized)
    }
}

/// Stored owner account.
#[derive(Debug, Clone)]
pub struct OwnerAccount {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
