use actix_web::{get, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::SuccessResponse;
use crate::auth::adapter::incoming::web::extractors::MaybeOwner;
use crate::shared::api::ApiResponse;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    #[schema(example = true)]
    pub is_owner: bool,
}

/// Owner check
///
/// Reports whether the request carries a valid owner session. Never fails
/// for a missing or expired token.
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "auth",
    responses(
        (status = 200, description = "Session state", body = inline(SuccessResponse<SessionStatus>)),
    ),
    security((), ("BearerAuth" = []))
)]
#[get("/api/auth/session")]
pub async fn session_handler(owner: MaybeOwner) -> impl Responder {
    ApiResponse::success(SessionStatus {
        is_owner: owner.is_owner(),
    })
}
