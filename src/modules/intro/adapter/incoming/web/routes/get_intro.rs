use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::intro::application::domain::entities::Intro;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get the intro
///
/// `data` is null until the owner has saved one.
#[utoipa::path(
    get,
    path = "/api/intro",
    tag = "intro",
    responses(
        (status = 200, description = "The intro, or null", body = inline(SuccessResponse<Option<Intro>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/intro")]
pub async fn get_intro_handler(data: web::Data<AppState>) -> impl Responder {
    match data.intro.load.load().await {
        Ok(intro) => ApiResponse::success(intro),
        Err(_) => ApiResponse::internal_error(),
    }
}
