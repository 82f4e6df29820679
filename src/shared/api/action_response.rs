// src/shared/api/action_response.rs
use actix_web::{http::StatusCode, web, Either, HttpResponse};

use crate::auth::application::domain::entities::OwnerSession;
use crate::shared::action::{
    ActionError, ActionOutcome, ActionResult, FieldErrors, FormFields, IntroActionResult,
};

/// Admin forms arrive either as JSON or urlencoded. A body that fails to parse
/// is kept as an error so the action can still report `Unauthorized` first.
pub type FormPayload = Result<Either<web::Json<FormFields>, web::Form<FormFields>>, actix_web::Error>;

/// Unwraps the submitted fields.
///
/// An unreadable body becomes a form-level validation error, unless the caller
/// has no owner session, in which case it is `Unauthorized`.
pub fn form_fields(
    session: Option<&OwnerSession>,
    payload: FormPayload,
) -> Result<FormFields, ActionError> {
    match payload {
        Ok(Either::Left(json)) => Ok(json.into_inner()),
        Ok(Either::Right(form)) => Ok(form.into_inner()),
        Err(e) => {
            OwnerSession::require(session)?;
            tracing::debug!(error = %e, "Rejected unreadable form body");
            Err(ActionError::Validation(FieldErrors::form(e.to_string())))
        }
    }
}

fn outcome_status(outcome: &ActionOutcome, success: StatusCode) -> StatusCode {
    match outcome {
        Ok(_) => success,
        Err(e) => e.status(),
    }
}

/// Serializes an action outcome as `{message, errors}` with a matching status.
pub fn action_response(outcome: ActionOutcome, success: StatusCode) -> HttpResponse {
    let status = outcome_status(&outcome, success);
    HttpResponse::build(status).json(ActionResult::from(outcome))
}

pub fn intro_action_response(outcome: ActionOutcome) -> HttpResponse {
    let status = outcome_status(&outcome, StatusCode::OK);
    HttpResponse::build(status).json(IntroActionResult::from(outcome))
}
