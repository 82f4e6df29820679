use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::tech_stack::application::domain::entities::{group_by_category, TechStackGroup};
use crate::AppState;

/// Tech stack grouped by category
///
/// Same entries as the flat list, bucketed for the public profile page.
#[utoipa::path(
    get,
    path = "/api/tech-stack/grouped",
    tag = "tech-stack",
    responses(
        (status = 200, description = "Entries per category", body = inline(SuccessResponse<Vec<TechStackGroup>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/tech-stack/grouped")]
pub async fn get_tech_stack_grouped_handler(data: web::Data<AppState>) -> impl Responder {
    match data.tech_stack.load.load().await {
        Ok(list) => ApiResponse::success(group_by_category(list)),
        Err(_) => ApiResponse::internal_error(),
    }
}
