use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    SessionStatus, SignInRequestDto, SignInResponseBody, SignedInOwnerDto,
};
use crate::education::application::domain::entities::Education;
use crate::experience::application::domain::entities::Experience;
use crate::intro::application::domain::entities::Intro;
use crate::project::application::domain::entities::Project;
use crate::shared::action::{ActionResult, FieldErrors, FormFields, IntroActionResult};
use crate::tech_stack::application::domain::entities::{TechStack, TechStackGroup};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "Content management for a single-owner portfolio site"
    ),
    paths(
        // Auth
        crate::auth::adapter::incoming::web::routes::sign_in::sign_in_handler,
        crate::auth::adapter::incoming::web::routes::session::session_handler,

        // Experience
        crate::experience::adapter::incoming::web::routes::get_experiences::get_experiences_handler,
        crate::experience::adapter::incoming::web::routes::create_experience::create_experience_handler,
        crate::experience::adapter::incoming::web::routes::update_experience::update_experience_handler,
        crate::experience::adapter::incoming::web::routes::delete_experience::delete_experience_handler,

        // Education
        crate::education::adapter::incoming::web::routes::get_education::get_education_handler,
        crate::education::adapter::incoming::web::routes::create_education::create_education_handler,
        crate::education::adapter::incoming::web::routes::update_education::update_education_handler,
        crate::education::adapter::incoming::web::routes::delete_education::delete_education_handler,

        // Tech stack
        crate::tech_stack::adapter::incoming::web::routes::get_tech_stack::get_tech_stack_handler,
        crate::tech_stack::adapter::incoming::web::routes::get_tech_stack_grouped::get_tech_stack_grouped_handler,
        crate::tech_stack::adapter::incoming::web::routes::create_tech_stack::create_tech_stack_handler,
        crate::tech_stack::adapter::incoming::web::routes::update_tech_stack::update_tech_stack_handler,
        crate::tech_stack::adapter::incoming::web::routes::delete_tech_stack::delete_tech_stack_handler,

        // Projects
        crate::project::adapter::incoming::web::routes::get_projects::get_projects_handler,
        crate::project::adapter::incoming::web::routes::create_project::create_project_handler,
        crate::project::adapter::incoming::web::routes::update_project::update_project_handler,
        crate::project::adapter::incoming::web::routes::delete_project::delete_project_handler,

        // Intro
        crate::intro::adapter::incoming::web::routes::get_intro::get_intro_handler,
        crate::intro::adapter::incoming::web::routes::save_intro::save_intro_handler,
        crate::intro::adapter::incoming::web::routes::delete_intro::delete_intro_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            // Forms
            FormFields,
            FieldErrors,
            ActionResult,
            IntroActionResult,

            // Records
            Experience,
            Education,
            TechStack,
            TechStackGroup,
            Project,
            Intro,

            // Auth
            SignInRequestDto,
            SignInResponseBody,
            SignedInOwnerDto,
            SessionStatus,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Owner sign-in and session check"),
        (name = "experience", description = "Work experience entries"),
        (name = "education", description = "Education entries"),
        (name = "tech-stack", description = "Technologies and proficiency"),
        (name = "projects", description = "Portfolio projects"),
        (name = "intro", description = "Single intro/profile record"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
