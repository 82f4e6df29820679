mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::education;
pub use modules::experience;
pub use modules::intro;
pub use modules::project;
pub use modules::tech_stack;

use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::use_cases::bootstrap_owner::{
    BootstrapOutcome, BootstrapOwnerUseCase, IBootstrapOwnerUseCase,
};
use crate::auth::application::use_cases::sign_in::{ISignInUseCase, SignInUseCase};
use crate::config::{AppConfig, ConfigError};

use crate::education::adapter::outgoing::EducationRepositoryPostgres;
use crate::education::application::education_use_cases::EducationUseCases;
use crate::education::application::service::EducationService;
use crate::experience::adapter::outgoing::ExperienceRepositoryPostgres;
use crate::experience::application::experience_use_cases::ExperienceUseCases;
use crate::experience::application::service::ExperienceService;
use crate::intro::adapter::outgoing::IntroRepositoryPostgres;
use crate::intro::application::intro_use_cases::IntroUseCases;
use crate::intro::application::service::IntroService;
use crate::project::adapter::outgoing::ProjectRepositoryPostgres;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::service::ProjectService;
use crate::tech_stack::adapter::outgoing::TechStackRepositoryPostgres;
use crate::tech_stack::application::service::TechStackService;
use crate::tech_stack::application::tech_stack_use_cases::TechStackUseCases;

use crate::api::openapi::ApiDoc;
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DbErr};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub experience: ExperienceUseCases,
    pub education: EducationUseCases,
    pub tech_stack: TechStackUseCases,
    pub project: ProjectUseCases,
    pub intro: IntroUseCases,
    pub sign_in_use_case: Arc<dyn ISignInUseCase + Send + Sync>,
}

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Owner bootstrap failed: {0}")]
    Bootstrap(String),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> Result<(), StartupError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    config::load_dotenv();
    let config = AppConfig::from_env()?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(config.database.connect_timeout)
        .acquire_timeout(config.database.connect_timeout)
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db_arc = Arc::new(Database::connect(opt).await?);

    if config.run_migrations {
        info!("Applying pending migrations");
        Migrator::up(&*db_arc, None).await?;
    }

    let password_hasher: Arc<dyn PasswordHasher + Send + Sync> =
        if std::env::var("RUST_ENV").as_deref() == Ok("production") {
            Arc::new(Argon2Hasher::new())
        } else {
            Arc::new(Argon2Hasher::fast())
        };

    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));

    // Owner account
    match &config.owner {
        Some(credentials) => {
            let bootstrap = BootstrapOwnerUseCase::new(
                user_query.clone(),
                UserRepositoryPostgres::new(Arc::clone(&db_arc)),
                Arc::clone(&password_hasher),
            );
            match bootstrap
                .execute(credentials)
                .await
                .map_err(|e| StartupError::Bootstrap(e.to_string()))?
            {
                BootstrapOutcome::Created(id) => info!(owner_id = %id, "Owner account created"),
                BootstrapOutcome::AlreadyExists(id) => info!(owner_id = %id, "Owner account ready"),
            }
        }
        None => warn!("OWNER_EMAIL not set; sign-in only works for existing accounts"),
    }

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));

    let state = AppState {
        experience: ExperienceUseCases::from_service(ExperienceService::new(
            ExperienceRepositoryPostgres::new(Arc::clone(&db_arc)),
        )),
        education: EducationUseCases::from_service(EducationService::new(
            EducationRepositoryPostgres::new(Arc::clone(&db_arc)),
        )),
        tech_stack: TechStackUseCases::from_service(TechStackService::new(
            TechStackRepositoryPostgres::new(Arc::clone(&db_arc)),
        )),
        project: ProjectUseCases::from_service(ProjectService::new(
            ProjectRepositoryPostgres::new(Arc::clone(&db_arc)),
        )),
        intro: IntroUseCases::from_service(IntroService::new(IntroRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        sign_in_use_case: Arc::new(SignInUseCase::new(
            user_query,
            password_hasher,
            Arc::clone(&token_provider_arc),
        )),
    };

    let openapi = ApiDoc::openapi();
    let db_for_server = Arc::clone(&db_arc);

    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::education::adapter::incoming::web::routes as education_routes;
    use crate::experience::adapter::incoming::web::routes as experience_routes;
    use crate::intro::adapter::incoming::web::routes as intro_routes;
    use crate::project::adapter::incoming::web::routes as project_routes;
    use crate::tech_stack::adapter::incoming::web::routes as tech_stack_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth_routes::sign_in_handler);
    cfg.service(auth_routes::session_handler);
    // Experience
    cfg.service(experience_routes::get_experiences_handler);
    cfg.service(experience_routes::create_experience_handler);
    cfg.service(experience_routes::update_experience_handler);
    cfg.service(experience_routes::delete_experience_handler);
    // Education
    cfg.service(education_routes::get_education_handler);
    cfg.service(education_routes::create_education_handler);
    cfg.service(education_routes::update_education_handler);
    cfg.service(education_routes::delete_education_handler);
    // Tech stack; grouped before the {id} routes
    cfg.service(tech_stack_routes::get_tech_stack_grouped_handler);
    cfg.service(tech_stack_routes::get_tech_stack_handler);
    cfg.service(tech_stack_routes::create_tech_stack_handler);
    cfg.service(tech_stack_routes::update_tech_stack_handler);
    cfg.service(tech_stack_routes::delete_tech_stack_handler);
    // Projects
    cfg.service(project_routes::get_projects_handler);
    cfg.service(project_routes::create_project_handler);
    cfg.service(project_routes::update_project_handler);
    cfg.service(project_routes::delete_project_handler);
    // Intro
    cfg.service(intro_routes::get_intro_handler);
    cfg.service(intro_routes::save_intro_handler);
    cfg.service(intro_routes::delete_intro_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
