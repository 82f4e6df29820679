use sea_orm::DbErr;

use crate::shared::action::ActionError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<DbErr> for RepositoryError {
    fn from(e: DbErr) -> Self {
        RepositoryError::DatabaseError(e.to_string())
    }
}

/// Which write an action was attempting, used in the caller-facing summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    Create,
    Update,
    Delete,
}

impl WriteOp {
    fn verb(self) -> &'static str {
        match self {
            WriteOp::Create => "create",
            WriteOp::Update => "update",
            WriteOp::Delete => "delete",
        }
    }
}

impl RepositoryError {
    /// Logs the raw cause and folds it into the error an action reports.
    ///
    /// `entity` is the display name, e.g. "Tech Stack".
    pub fn into_action_error(self, op: WriteOp, entity: &str) -> ActionError {
        match self {
            RepositoryError::NotFound => ActionError::NotFound(format!("{entity} not found")),
            other => {
                tracing::error!(error = %other, entity, op = op.verb(), "Persistence failure");
                ActionError::Persistence(format!(
                    "Failed to {} {}",
                    op.verb(),
                    entity.to_lowercase()
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_entity() {
        let err = RepositoryError::NotFound.into_action_error(WriteOp::Update, "Project");

        assert_eq!(err, ActionError::NotFound("Project not found".to_string()));
    }

    #[test]
    fn database_error_is_summarised_without_details() {
        let err = RepositoryError::DatabaseError("connection refused on 10.0.0.3".to_string())
            .into_action_error(WriteOp::Create, "Tech Stack");

        assert_eq!(
            err,
            ActionError::Persistence("Failed to create tech stack".to_string())
        );
    }

    #[test]
    fn db_err_converts_into_database_error() {
        let err: RepositoryError = DbErr::Custom("boom".to_string()).into();

        assert!(matches!(err, RepositoryError::DatabaseError(msg) if msg.contains("boom")));
    }
}
