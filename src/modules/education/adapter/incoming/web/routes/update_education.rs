use actix_web::{http::StatusCode, put, web, Responder};

use crate::auth::adapter::incoming::web::extractors::MaybeOwner;
use crate::shared::action::{ActionResult, FormFields};
use crate::shared::api::{action_response, form_fields, FormPayload};
use crate::AppState;

/// Replace an education entry
#[utoipa::path(
    put,
    path = "/api/education/{id}",
    tag = "education",
    params(("id" = String, Path, description = "Education id (UUID)")),
    request_body = FormFields,
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Updated", body = ActionResult),
        (status = 400, description = "Field errors or malformed id", body = ActionResult),
        (status = 401, description = "No owner session", body = ActionResult),
        (status = 404, description = "No such entry", body = ActionResult),
        (status = 500, description = "Storage failure", body = ActionResult),
    )
)]
#[put("/api/education/{id}")]
pub async fn update_education_handler(
    owner: MaybeOwner,
    path: web::Path<String>,
    payload: FormPayload,
    data: web::Data<AppState>,
) -> impl Responder {
    let outcome = match form_fields(owner.session(), payload) {
        Ok(form) => data
            .education
            .update
            .update(owner.session(), &path.into_inner(), &form)
            .await,
        Err(rejected) => Err(rejected),
    };
    action_response(outcome, StatusCode::OK)
}
