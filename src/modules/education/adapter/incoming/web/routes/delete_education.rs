use actix_web::{delete, http::StatusCode, web, Responder};

use crate::auth::adapter::incoming::web::extractors::MaybeOwner;
use crate::shared::action::ActionResult;
use crate::shared::api::action_response;
use crate::AppState;

/// Delete an education entry
#[utoipa::path(
    delete,
    path = "/api/education/{id}",
    tag = "education",
    params(("id" = String, Path, description = "Education id (UUID)")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Deleted", body = ActionResult),
        (status = 400, description = "Malformed id", body = ActionResult),
        (status = 401, description = "No owner session", body = ActionResult),
        (status = 500, description = "Storage failure", body = ActionResult),
    )
)]
#[delete("/api/education/{id}")]
pub async fn delete_education_handler(
    owner: MaybeOwner,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let outcome = data
        .education
        .delete
        .delete(owner.session(), &path.into_inner())
        .await;
    action_response(outcome, StatusCode::OK)
}
