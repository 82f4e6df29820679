use actix_web::{http::StatusCode, post, web, Responder};

use crate::auth::adapter::incoming::web::extractors::MaybeOwner;
use crate::shared::action::{ActionResult, FormFields};
use crate::shared::api::{action_response, form_fields, FormPayload};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Create a project
///
/// Owner only. `technologies` is a comma separated string.
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    request_body = FormFields,
    security(("BearerAuth" = [])),
    responses(
        (status = 201, description = "Created", body = ActionResult),
        (status = 400, description = "Field errors", body = ActionResult),
        (status = 401, description = "No owner session", body = ActionResult),
        (status = 500, description = "Storage failure", body = ActionResult),
    )
)]
#[post("/api/projects")]
pub async fn create_project_handler(
    owner: MaybeOwner,
    payload: FormPayload,
    data: web::Data<AppState>,
) -> impl Responder {
    let outcome = match form_fields(owner.session(), payload) {
        Ok(form) => data.project.create.create(owner.session(), &form).await,
        Err(rejected) => Err(rejected),
    };
    action_response(outcome, StatusCode::CREATED)
}
