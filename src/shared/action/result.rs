use std::collections::BTreeMap;

use actix_web::http::StatusCode;
use serde::Serialize;
use utoipa::ToSchema;

/// Key under which form-level (non field) errors are reported.
pub const FORM_ERROR_KEY: &str = "form";

//
// ──────────────────────────────────────────────────────────
// Field errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = BTreeMap<String, Vec<String>>, example = json!({
    "proficiencyLevel": ["Proficiency level must be between 1 and 10"]
}))]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single form-level error.
    pub fn form(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(FORM_ERROR_KEY, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

//
// ──────────────────────────────────────────────────────────
// Action errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("Validation failed")]
    Validation(FieldErrors),

    #[error("Unauthorized")]
    Unauthorized,

    /// Carries the caller-facing message, e.g. "Project not found".
    #[error("{0}")]
    NotFound(String),

    /// Carries the caller-facing summary. The raw cause is logged, never stored here.
    #[error("{0}")]
    Persistence(String),
}

impl ActionError {
    pub fn invalid_id() -> Self {
        ActionError::Validation(FieldErrors::form("A valid ID is required"))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ActionError::Validation(_) => StatusCode::BAD_REQUEST,
            ActionError::Unauthorized => StatusCode::UNAUTHORIZED,
            ActionError::NotFound(_) => StatusCode::NOT_FOUND,
            ActionError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn into_field_errors(self) -> FieldErrors {
        match self {
            ActionError::Validation(errors) => errors,
            other => FieldErrors::form(other.to_string()),
        }
    }
}

/// `Ok` carries the confirmation message shown to the owner.
pub type ActionOutcome = Result<String, ActionError>;

//
// ──────────────────────────────────────────────────────────
// Result shapes returned to the presentation layer
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ActionResult {
    #[schema(example = "Experience created successfully")]
    pub message: Option<String>,
    pub errors: FieldErrors,
}

impl ActionResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            errors: FieldErrors::new(),
        }
    }

    pub fn failure(error: ActionError) -> Self {
        Self {
            message: None,
            errors: error.into_field_errors(),
        }
    }
}

impl From<ActionOutcome> for ActionResult {
    fn from(outcome: ActionOutcome) -> Self {
        match outcome {
            Ok(message) => ActionResult::success(message),
            Err(error) => ActionResult::failure(error),
        }
    }
}

/// Intro results also tell the client whether to reload the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IntroActionResult {
    #[schema(example = "Intro updated successfully")]
    pub message: Option<String>,
    pub errors: FieldErrors,
    pub should_refresh: bool,
}

impl From<ActionOutcome> for IntroActionResult {
    fn from(outcome: ActionOutcome) -> Self {
        let should_refresh = outcome.is_ok();
        let ActionResult { message, errors } = outcome.into();

        Self {
            message,
            errors,
            should_refresh,
        }
    }
}
