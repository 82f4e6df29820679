use actix_web::{post, web, Responder};

use crate::auth::adapter::incoming::web::extractors::MaybeOwner;
use crate::shared::action::{FormFields, IntroActionResult};
use crate::shared::api::{form_fields, intro_action_response, FormPayload};
use crate::AppState;

/// Create or update the intro
///
/// Owner only. Overwrites the existing intro when there is one. Submitting
/// `action=delete` removes the intro instead.
#[utoipa::path(
    post,
    path = "/api/intro",
    tag = "intro",
    request_body = FormFields,
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Added, updated or deleted", body = IntroActionResult),
        (status = 400, description = "Field errors", body = IntroActionResult),
        (status = 401, description = "No owner session", body = IntroActionResult),
        (status = 500, description = "Storage failure", body = IntroActionResult),
    )
)]
#[post("/api/intro")]
pub async fn save_intro_handler(
    owner: MaybeOwner,
    payload: FormPayload,
    data: web::Data<AppState>,
) -> impl Responder {
    let outcome = match form_fields(owner.session(), payload) {
        Ok(form) => data
            .intro
            .save
            .create_or_update(owner.session(), &form)
            .await,
        Err(rejected) => Err(rejected),
    };
    intro_action_response(outcome)
}
