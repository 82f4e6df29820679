use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::tech_stack::application::domain::entities::TechStack;
use crate::AppState;

/// List tech stack entries
#[utoipa::path(
    get,
    path = "/api/tech-stack",
    tag = "tech-stack",
    responses(
        (status = 200, description = "Tech stack entries", body = inline(SuccessResponse<Vec<TechStack>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/tech-stack")]
pub async fn get_tech_stack_handler(data: web::Data<AppState>) -> impl Responder {
    match data.tech_stack.load.load().await {
        Ok(list) => ApiResponse::success(list),
        Err(_) => ApiResponse::internal_error(),
    }
}
