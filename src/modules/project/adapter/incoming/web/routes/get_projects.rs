use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::project::application::domain::entities::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List projects
///
/// Public. Most recent start date first.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    responses(
        (status = 200, description = "Projects", body = inline(SuccessResponse<Vec<Project>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.load.load().await {
        Ok(list) => ApiResponse::success(list),
        Err(_) => ApiResponse::internal_error(),
    }
}
