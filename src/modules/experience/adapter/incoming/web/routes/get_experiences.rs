use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::experience::application::domain::entities::Experience;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List experience entries
///
/// Public. Most recent start date first.
#[utoipa::path(
    get,
    path = "/api/experiences",
    tag = "experience",
    responses(
        (status = 200, description = "Experience entries", body = inline(SuccessResponse<Vec<Experience>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/experiences")]
pub async fn get_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    match data.experience.load.load().await {
        Ok(list) => ApiResponse::success(list),
        Err(_) => ApiResponse::internal_error(),
    }
}
