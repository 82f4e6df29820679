use actix_web::{delete, http::StatusCode, web, Responder};

use crate::auth::adapter::incoming::web::extractors::MaybeOwner;
use crate::shared::action::ActionResult;
use crate::shared::api::action_response;
use crate::AppState;

/// Delete a tech stack entry
#[utoipa::path(
    delete,
    path = "/api/tech-stack/{id}",
    tag = "tech-stack",
    params(("id" = String, Path, description = "Tech stack id (UUID)")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Deleted", body = ActionResult),
        (status = 400, description = "Malformed id", body = ActionResult),
        (status = 401, description = "No owner session", body = ActionResult),
        (status = 500, description = "Storage failure", body = ActionResult),
    )
)]
#[delete("/api/tech-stack/{id}")]
pub async fn delete_tech_stack_handler(
    owner: MaybeOwner,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let outcome = data
        .tech_stack
        .delete
        .delete(owner.session(), &path.into_inner())
        .await;
    action_response(outcome, StatusCode::OK)
}
