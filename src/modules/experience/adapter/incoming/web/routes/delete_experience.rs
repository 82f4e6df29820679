use actix_web::{delete, http::StatusCode, web, Responder};

use crate::auth::adapter::incoming::web::extractors::MaybeOwner;
use crate::shared::action::ActionResult;
use crate::shared::api::action_response;
use crate::AppState;

/// Delete an experience entry
///
/// Owner only. Deleting an id that is already gone still succeeds.
#[utoipa::path(
    delete,
    path = "/api/experiences/{id}",
    tag = "experience",
    params(("id" = String, Path, description = "Experience id (UUID)")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Deleted", body = ActionResult),
        (status = 400, description = "Malformed id", body = ActionResult),
        (status = 401, description = "No owner session", body = ActionResult),
        (status = 500, description = "Storage failure", body = ActionResult),
    )
)]
#[delete("/api/experiences/{id}")]
pub async fn delete_experience_handler(
    owner: MaybeOwner,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let outcome = data
        .experience
        .delete
        .delete(owner.session(), &path.into_inner())
        .await;
    action_response(outcome, StatusCode::OK)
}
