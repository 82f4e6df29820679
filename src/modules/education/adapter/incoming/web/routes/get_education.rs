use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::education::application::domain::entities::Education;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List education entries
#[utoipa::path(
    get,
    path = "/api/education",
    tag = "education",
    responses(
        (status = 200, description = "Education entries", body = inline(SuccessResponse<Vec<Education>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/education")]
pub async fn get_education_handler(data: web::Data<AppState>) -> impl Responder {
    match data.education.load.load().await {
        Ok(list) => ApiResponse::success(list),
        Err(_) => ApiResponse::internal_error(),
    }
}
