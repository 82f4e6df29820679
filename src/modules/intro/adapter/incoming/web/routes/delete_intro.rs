use actix_web::{delete, web, Responder};

use crate::auth::adapter::incoming::web::extractors::MaybeOwner;
use crate::shared::action::IntroActionResult;
use crate::shared::api::intro_action_response;
use crate::AppState;

/// Delete the intro
#[utoipa::path(
    delete,
    path = "/api/intro",
    tag = "intro",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Deleted", body = IntroActionResult),
        (status = 401, description = "No owner session", body = IntroActionResult),
        (status = 500, description = "Storage failure", body = IntroActionResult),
    )
)]
#[delete("/api/intro")]
pub async fn delete_intro_handler(owner: MaybeOwner, data: web::Data<AppState>) -> impl Responder {
    let outcome = data.intro.delete.delete(owner.session()).await;
    intro_action_response(outcome)
}
